//! Group list filtering and sorting.
//!
//! Pure functions recomputed on every read; the stored collection is
//! never reordered.

use std::cmp::Ordering;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use super::groups_model::{Group, GroupSort};

/// Date formats accepted for free-text payout dates, tried in order
/// after ordinal suffixes are stripped ("Feb 10th, 2025" -> "Feb 10, 2025").
const PAYOUT_DATE_FORMATS: [&str; 3] = ["%b %d, %Y", "%B %d, %Y", "%Y-%m-%d"];

fn ordinal_suffix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)(st|nd|rd|th)").unwrap())
}

/// Tolerant parse of a free-text payout date. `None` means the string
/// is unparsable and should sort after every parsable date.
pub fn parse_payout_date(value: &str) -> Option<NaiveDate> {
    let normalized = ordinal_suffix_re().replace_all(value.trim(), "$1");
    PAYOUT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&normalized, fmt).ok())
}

/// Applies the case-insensitive name filter, then the optional stable
/// sort. `None` keeps insertion order; ties always keep their original
/// relative order.
pub fn filter_and_sort(
    groups: Vec<Group>,
    search_term: &str,
    sort: Option<GroupSort>,
) -> Vec<Group> {
    let needle = search_term.trim().to_lowercase();
    let mut filtered: Vec<Group> = groups
        .into_iter()
        .filter(|g| needle.is_empty() || g.name.to_lowercase().contains(&needle))
        .collect();

    match sort {
        Some(GroupSort::Name) => {
            filtered.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        Some(GroupSort::Payout) => {
            filtered.sort_by(|a, b| {
                match (parse_payout_date(&a.next_payout), parse_payout_date(&b.next_payout)) {
                    (Some(da), Some(db)) => da.cmp(&db),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            });
        }
        Some(GroupSort::Contributions) => {
            filtered.sort_by(|a, b| b.total_contributions.cmp(&a.total_contributions));
        }
        None => {}
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ordinal_and_plain_dates() {
        assert_eq!(
            parse_payout_date("Feb 10th, 2025"),
            NaiveDate::from_ymd_opt(2025, 2, 10)
        );
        assert_eq!(
            parse_payout_date("March 5th, 2025"),
            NaiveDate::from_ymd_opt(2025, 3, 5)
        );
        assert_eq!(
            parse_payout_date("2025-03-15"),
            NaiveDate::from_ymd_opt(2025, 3, 15)
        );
        assert_eq!(parse_payout_date("TBD"), None);
    }
}
