//! Tests for the group service and list filtering.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::feed::{FeedRepository, FeedService, FeedServiceTrait};
    use crate::groups::{
        GroupRepository, GroupService, GroupServiceTrait, GroupSort, NewGroup,
        GroupRepositoryTrait,
    };
    use crate::notifications::{NotificationCenter, NotificationKind, NotificationServiceTrait};

    struct Fixture {
        service: GroupService,
        feed: Arc<FeedService>,
        notifications: Arc<NotificationCenter>,
        repository: Arc<GroupRepository>,
    }

    fn fixture() -> Fixture {
        let repository = Arc::new(GroupRepository::new());
        let feed = Arc::new(FeedService::new(Arc::new(FeedRepository::new())));
        let notifications = Arc::new(NotificationCenter::new());
        let service = GroupService::new(
            repository.clone(),
            feed.clone(),
            notifications.clone(),
        );
        Fixture {
            service,
            feed,
            notifications,
            repository,
        }
    }

    #[test]
    fn add_group_appends_one_with_parsed_total() {
        let f = fixture();
        let group = f
            .service
            .add_group("Family Savings", "4520", "Feb 10th, 2025", "John, Jane, Doe")
            .unwrap();

        assert_eq!(f.service.groups().len(), 1);
        assert_eq!(group.total_contributions, dec!(4520));
        assert_eq!(group.next_payout, "Feb 10th, 2025");
        assert_eq!(group.members, vec!["John", "Jane", "Doe"]);
        assert_eq!(f.feed.entries().len(), 1);
        assert_eq!(f.notifications.active().len(), 1);
    }

    #[test]
    fn add_group_coerces_unparsable_total_to_zero() {
        let f = fixture();
        let group = f.service.add_group("Travel Fund", "abc", "", "").unwrap();
        assert_eq!(group.total_contributions, Decimal::ZERO);
        assert_eq!(group.next_payout, "TBD");
        assert_eq!(group.members, vec!["Unknown"]);
    }

    #[test]
    fn add_group_rejects_blank_name_without_state_change() {
        let f = fixture();
        assert!(f.service.add_group("   ", "100", "", "a,b").is_err());
        assert!(f.service.groups().is_empty());
        assert!(f.feed.entries().is_empty());

        let notes = f.notifications.active();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Error);
    }

    #[test]
    fn contribute_adds_to_running_total() {
        let f = fixture();
        let group = f.service.add_group("Club", "100", "", "a").unwrap();

        let updated = f.service.contribute(group.id, "50").unwrap().unwrap();
        assert_eq!(updated.total_contributions, dec!(150));
    }

    #[test]
    fn contribute_rejects_negative_and_garbage_amounts() {
        let f = fixture();
        let group = f.service.add_group("Club", "100", "", "a").unwrap();

        assert!(f.service.contribute(group.id, "-5").is_err());
        assert!(f.service.contribute(group.id, "abc").is_err());

        let unchanged = &f.service.groups()[0];
        assert_eq!(unchanged.total_contributions, dec!(100));
    }

    #[test]
    fn rejected_contribution_emits_one_error_notification() {
        let f = fixture();
        let group = f.service.add_group("Club", "100", "", "a").unwrap();
        let before = f.notifications.active().len();

        assert!(f.service.contribute(group.id, "abc").is_err());

        let notes = f.notifications.active();
        assert_eq!(notes.len(), before + 1);
        let last = notes.last().unwrap();
        assert_eq!(last.kind, NotificationKind::Error);
        assert_eq!(last.message, "Invalid contribution amount");
    }

    #[test]
    fn contribute_to_unknown_group_is_a_silent_no_op() {
        let f = fixture();
        assert!(f.service.contribute(999, "50").unwrap().is_none());
        assert!(f.notifications.active().is_empty());
    }

    #[test]
    fn repository_assigns_sequential_ids() {
        let f = fixture();
        let a = f.repository.insert(NewGroup {
            name: "A".into(),
            total_contributions: Decimal::ZERO,
            next_payout: "TBD".into(),
            members: vec!["x".into()],
        });
        let b = f.repository.insert(NewGroup {
            name: "B".into(),
            total_contributions: Decimal::ZERO,
            next_payout: "TBD".into(),
            members: vec!["x".into()],
        });
        assert_eq!((a.id, b.id), (1, 2));
    }

    fn seeded() -> Fixture {
        let f = fixture();
        f.service
            .add_group("Family Savings", "4520", "Feb 10th, 2025", "John")
            .unwrap();
        f.service
            .add_group("Travel Fund", "3200", "March 5th, 2025", "Alice")
            .unwrap();
        f.service
            .add_group("Investment Club", "5000", "March 15th, 2025", "Charlie")
            .unwrap();
        f
    }

    #[test]
    fn filter_is_case_insensitive_substring_on_name() {
        let f = seeded();
        let hits = f.service.filtered_groups("fund", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Travel Fund");

        // empty term matches everything, insertion order kept
        let all = f.service.filtered_groups("", None);
        let names: Vec<_> = all.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Family Savings", "Travel Fund", "Investment Club"]);
    }

    #[test]
    fn sort_by_contributions_is_descending_and_stable() {
        let f = seeded();
        // a tie with an existing total, to check stability
        f.service
            .add_group("Second Travel Fund", "3200", "", "Bob")
            .unwrap();

        let sorted = f.service.filtered_groups("", Some(GroupSort::Contributions));
        let names: Vec<_> = sorted.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Investment Club",
                "Family Savings",
                "Travel Fund",
                "Second Travel Fund",
            ]
        );
    }

    #[test]
    fn sort_by_name_is_ascending() {
        let f = seeded();
        let sorted = f.service.filtered_groups("", Some(GroupSort::Name));
        let names: Vec<_> = sorted.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Family Savings", "Investment Club", "Travel Fund"]);
    }

    #[test]
    fn sort_by_payout_parses_dates_and_puts_unparsable_last() {
        let f = seeded();
        f.service.add_group("No Date Yet", "10", "", "x").unwrap();

        let sorted = f.service.filtered_groups("", Some(GroupSort::Payout));
        let names: Vec<_> = sorted.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            ["Family Savings", "Travel Fund", "Investment Club", "No Date Yet"]
        );
    }

    #[test]
    fn unrecognized_sort_selector_keeps_insertion_order() {
        assert_eq!(GroupSort::parse("name"), Some(GroupSort::Name));
        assert_eq!(GroupSort::parse("PAYOUT"), Some(GroupSort::Payout));
        assert_eq!(GroupSort::parse("newest"), None);
        assert_eq!(GroupSort::parse(""), None);
    }

    #[test]
    fn total_contributions_sums_all_groups() {
        let f = seeded();
        assert_eq!(f.service.total_contributions(), dec!(12720));
    }
}
