//! Tests for the goal service and achievement flow.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use crate::feed::{FeedRepository, FeedService, FeedServiceTrait};
    use crate::goals::{GoalRepository, GoalService, GoalServiceTrait};
    use crate::notifications::NotificationCenter;

    struct Fixture {
        service: GoalService,
        feed: Arc<FeedService>,
    }

    fn fixture() -> Fixture {
        let feed = Arc::new(FeedService::new(Arc::new(FeedRepository::new())));
        let service = GoalService::new(
            Arc::new(GoalRepository::new()),
            feed.clone(),
            Arc::new(NotificationCenter::new()),
        );
        Fixture { service, feed }
    }

    #[test]
    fn add_goal_starts_with_zero_progress() {
        let f = fixture();
        let goal = f.service.add_goal("Emergency Fund", "1000").unwrap();
        assert_eq!(goal.current, dec!(0));
        assert_eq!(goal.target, dec!(1000));
    }

    #[test]
    fn add_goal_rejects_blank_title_and_bad_targets() {
        let f = fixture();
        assert!(f.service.add_goal("  ", "1000").is_err());
        assert!(f.service.add_goal("Car", "0").is_err());
        assert!(f.service.add_goal("Car", "-10").is_err());
        assert!(f.service.add_goal("Car", "soon").is_err());
        assert!(f.service.goals().is_empty());
    }

    #[test]
    fn contribute_accumulates_and_may_overshoot_target() {
        let f = fixture();
        let goal = f.service.add_goal("Car", "500").unwrap();

        f.service.contribute(goal.id, dec!(400)).unwrap();
        let updated = f.service.contribute(goal.id, dec!(400)).unwrap().unwrap();
        assert_eq!(updated.current, dec!(800));
    }

    #[test]
    fn contribute_rejects_non_positive_amounts() {
        let f = fixture();
        let goal = f.service.add_goal("Car", "500").unwrap();
        assert!(f.service.contribute(goal.id, dec!(0)).is_err());
        assert!(f.service.contribute(goal.id, dec!(-5)).is_err());
        assert_eq!(f.service.goals()[0].current, dec!(0));
    }

    #[test]
    fn achievements_unlock_once_with_feed_entries() {
        let f = fixture();
        let goal = f.service.add_goal("Car", "500").unwrap();

        // 150 -> nothing yet
        f.service.contribute(goal.id, dec!(150)).unwrap();
        assert!(f.service.achievements().is_empty());

        // 150 -> 250: crosses $200 and exactly half of 500
        f.service.contribute(goal.id, dec!(100)).unwrap();
        assert_eq!(
            f.service.achievements(),
            vec!["Reached $200!".to_string(), "Halfway to Car!".to_string()]
        );

        // crossing the target fires only the remaining label
        f.service.contribute(goal.id, dec!(300)).unwrap();
        assert_eq!(
            f.service.achievements(),
            vec![
                "Reached $200!".to_string(),
                "Halfway to Car!".to_string(),
                "Goal Reached: Car".to_string(),
            ]
        );

        let unlock_entries: Vec<_> = f
            .feed
            .entries()
            .into_iter()
            .filter(|e| e.message.starts_with("Achievement unlocked"))
            .collect();
        assert_eq!(unlock_entries.len(), 3);
    }

    #[test]
    fn remove_goal_always_succeeds_and_never_reuses_ids() {
        let f = fixture();
        let first = f.service.add_goal("One", "100").unwrap();
        f.service.remove_goal(first.id);
        f.service.remove_goal(first.id); // already gone, still fine
        assert!(f.service.goals().is_empty());

        let second = f.service.add_goal("Two", "100").unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn contribute_to_unknown_goal_is_a_silent_no_op() {
        let f = fixture();
        assert!(f.service.contribute(42, dec!(50)).unwrap().is_none());
    }

    #[test]
    fn total_contributions_sums_progress() {
        let f = fixture();
        let a = f.service.add_goal("A", "500").unwrap();
        let b = f.service.add_goal("B", "500").unwrap();
        f.service.contribute(a.id, dec!(120)).unwrap();
        f.service.contribute(b.id, dec!(30)).unwrap();
        assert_eq!(f.service.total_contributions(), dec!(150));
    }
}
