//! Placeholder session data.
//!
//! Seeds go straight through the repositories so the feed and
//! notification center stay quiet during construction.

use rust_decimal_macros::dec;

use crate::calendar::{CalendarEvent, CalendarRepository};
use crate::feed::{FeedRepository, FeedRepositoryTrait};
use crate::goals::{GoalRepository, GoalRepositoryTrait};
use crate::groups::{
    GroupMemberDetail, GroupRepository, GroupRepositoryTrait, NewGroup, PayoutScheduleEntry,
};
use crate::polls::{PollRepository, PollRepositoryTrait};

pub(crate) fn seed_groups(repository: &GroupRepository) {
    let family = repository.insert(NewGroup {
        name: "Family Savings".to_string(),
        total_contributions: dec!(4520),
        next_payout: "Feb 10th, 2025".to_string(),
        members: vec!["John".to_string(), "Jane".to_string(), "Doe".to_string()],
    });
    repository.insert(NewGroup {
        name: "Travel Fund".to_string(),
        total_contributions: dec!(3200),
        next_payout: "March 5th, 2025".to_string(),
        members: vec!["Alice".to_string(), "Bob".to_string()],
    });
    repository.insert(NewGroup {
        name: "Investment Club".to_string(),
        total_contributions: dec!(5000),
        next_payout: "March 15th, 2025".to_string(),
        members: vec![
            "Charlie".to_string(),
            "Diana".to_string(),
            "Eve".to_string(),
        ],
    });

    repository.seed_details(
        family.id,
        vec![
            GroupMemberDetail {
                name: "Adesola".to_string(),
                contributed: dec!(1200),
                next_contribution: "Jan 20th, 2025".to_string(),
            },
            GroupMemberDetail {
                name: "Tochi".to_string(),
                contributed: dec!(800),
                next_contribution: "Jan 20th, 2025".to_string(),
            },
            GroupMemberDetail {
                name: "Amara".to_string(),
                contributed: dec!(1000),
                next_contribution: "Jan 20th, 2025".to_string(),
            },
        ],
        vec![
            PayoutScheduleEntry {
                date: "Feb 10th, 2025".to_string(),
                member: "Adesola".to_string(),
                amount: dec!(1500),
            },
            PayoutScheduleEntry {
                date: "March 10th, 2025".to_string(),
                member: "Tochi".to_string(),
                amount: dec!(1500),
            },
            PayoutScheduleEntry {
                date: "April 10th, 2025".to_string(),
                member: "Amara".to_string(),
                amount: dec!(1500),
            },
        ],
    );
}

pub(crate) fn seed_polls(repository: &PollRepository) {
    repository.insert(
        "Where should the group trip be?".to_string(),
        vec![
            "Accra".to_string(),
            "Lagos".to_string(),
            "Nairobi".to_string(),
        ],
    );
}

pub(crate) fn seed_goals(repository: &GoalRepository) {
    repository.insert("Emergency Fund".to_string(), dec!(1000));
}

pub(crate) fn seed_calendar(repository: &CalendarRepository) {
    repository.seed(vec![
        CalendarEvent {
            id: 1,
            title: "Family Savings contribution".to_string(),
            date: "2025-01-20".to_string(),
            description: "$300 due".to_string(),
        },
        CalendarEvent {
            id: 2,
            title: "Travel Fund contribution".to_string(),
            date: "2025-01-22".to_string(),
            description: "$200 due".to_string(),
        },
        CalendarEvent {
            id: 3,
            title: "Investment Club contribution".to_string(),
            date: "2025-01-25".to_string(),
            description: "$500 due".to_string(),
        },
        CalendarEvent {
            id: 4,
            title: "Family Savings payout".to_string(),
            date: "2025-02-10".to_string(),
            description: "Scheduled payout to Adesola".to_string(),
        },
    ]);
}

pub(crate) fn seed_feed(repository: &FeedRepository) {
    repository.append("System", "Welcome to Susu! Your session has started.");
}
