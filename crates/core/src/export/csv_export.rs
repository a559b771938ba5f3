//! Dashboard CSV export.
//!
//! Flattens the session's collections into one sectioned CSV blob.
//! Free-text fields go through the csv writer, so embedded commas and
//! quotes are escaped rather than corrupting the row.

use std::str::FromStr;

use csv::{ReaderBuilder, WriterBuilder};
use rust_decimal::Decimal;

use crate::errors::{Error, Result};
use crate::feed::FeedItem;
use crate::goals::Goal;
use crate::groups::Group;
use crate::polls::Poll;

const GROUPS_SECTION: &str = "Groups";
const POLLS_SECTION: &str = "Polls";
const GOALS_SECTION: &str = "Goals";
const FEED_SECTION: &str = "Activity Feed";

const GROUPS_HEADER: [&str; 5] = ["ID", "Name", "Total Contributions", "Next Payout", "Members"];
const POLLS_HEADER: [&str; 5] = ["Poll ID", "Question", "Option ID", "Option", "Votes"];
const GOALS_HEADER: [&str; 4] = ["ID", "Title", "Target", "Current"];
const FEED_HEADER: [&str; 4] = ["ID", "User", "Message", "Timestamp"];

/// Member names are pipe-joined inside a single field.
const MEMBER_SEPARATOR: &str = "|";

/// Serializes the dashboard collections into sectioned CSV text.
/// Polls produce one row per option.
pub fn write_dashboard_csv(
    groups: &[Group],
    polls: &[Poll],
    goals: &[Goal],
    feed: &[FeedItem],
) -> Result<String> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(vec![]);

    writer.write_record([GROUPS_SECTION])?;
    writer.write_record(GROUPS_HEADER)?;
    for group in groups {
        writer.write_record([
            group.id.to_string(),
            group.name.clone(),
            group.total_contributions.to_string(),
            group.next_payout.clone(),
            group.members.join(MEMBER_SEPARATOR),
        ])?;
    }
    writer.write_record([""])?;

    writer.write_record([POLLS_SECTION])?;
    writer.write_record(POLLS_HEADER)?;
    for poll in polls {
        for option in &poll.options {
            writer.write_record([
                poll.id.to_string(),
                poll.question.clone(),
                option.id.to_string(),
                option.text.clone(),
                option.votes.to_string(),
            ])?;
        }
    }
    writer.write_record([""])?;

    writer.write_record([GOALS_SECTION])?;
    writer.write_record(GOALS_HEADER)?;
    for goal in goals {
        writer.write_record([
            goal.id.to_string(),
            goal.title.clone(),
            goal.target.to_string(),
            goal.current.to_string(),
        ])?;
    }
    writer.write_record([""])?;

    writer.write_record([FEED_SECTION])?;
    writer.write_record(FEED_HEADER)?;
    for item in feed {
        writer.write_record([
            item.id.to_string(),
            item.user.clone(),
            item.message.clone(),
            item.timestamp.clone(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}

/// Re-parses the `Groups` section of an exported blob. Used by hosts
/// that re-import a prior export.
pub fn read_groups_section(csv_text: &str) -> Result<Vec<Group>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut groups = Vec::new();
    let mut in_section = false;
    for record in reader.records() {
        let record = record?;
        if !in_section {
            in_section = record.len() == 1 && &record[0] == GROUPS_SECTION;
            continue;
        }
        if record.len() < GROUPS_HEADER.len() {
            break; // blank separator or next section header
        }
        if &record[0] == GROUPS_HEADER[0] {
            continue; // column header row
        }
        groups.push(Group {
            id: i64::from_str(&record[0])
                .map_err(|e| Error::Export(format!("bad group id: {}", e)))?,
            name: record[1].to_string(),
            total_contributions: Decimal::from_str(&record[2])
                .map_err(|e| Error::Export(format!("bad group total: {}", e)))?,
            next_payout: record[3].to_string(),
            members: record[4]
                .split(MEMBER_SEPARATOR)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        });
    }
    Ok(groups)
}
