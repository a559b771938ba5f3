//! Achievement threshold evaluation.
//!
//! A pure function over the goal's updated progress and the already
//! unlocked set; the caller owns the set and the side effects.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixed dollar amount for the first milestone.
const MILESTONE_AMOUNT: Decimal = dec!(200);

/// Returns the labels newly crossed by `updated_current`, in display
/// order. Thresholds are independent; one large contribution can
/// unlock all three at once. Labels already in `unlocked` never fire
/// again.
pub fn newly_unlocked(
    title: &str,
    updated_current: Decimal,
    target: Decimal,
    unlocked: &[String],
) -> Vec<String> {
    let mut fresh = Vec::new();
    let mut check = |crossed: bool, label: String| {
        if crossed && !unlocked.contains(&label) && !fresh.contains(&label) {
            fresh.push(label);
        }
    };

    check(updated_current >= MILESTONE_AMOUNT, "Reached $200!".to_string());
    check(
        updated_current >= target / dec!(2),
        format!("Halfway to {}!", title),
    );
    check(updated_current >= target, format!("Goal Reached: {}", title));
    fresh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_every_threshold_unlocks_nothing() {
        assert!(newly_unlocked("Car", dec!(150), dec!(500), &[]).is_empty());
    }

    #[test]
    fn milestone_only_when_under_halfway() {
        // 240 crosses $200 but stays under 250 (= 500 / 2)
        let fresh = newly_unlocked("Car", dec!(240), dec!(500), &[]);
        assert_eq!(fresh, vec!["Reached $200!".to_string()]);
    }

    #[test]
    fn halfway_fires_exactly_at_half_the_target() {
        // >= semantics: 250 >= 500/2 unlocks halfway
        let fresh = newly_unlocked("Car", dec!(250), dec!(500), &[]);
        assert_eq!(
            fresh,
            vec!["Reached $200!".to_string(), "Halfway to Car!".to_string()]
        );
    }

    #[test]
    fn one_large_contribution_unlocks_all_in_order() {
        let fresh = newly_unlocked("Car", dec!(600), dec!(500), &[]);
        assert_eq!(
            fresh,
            vec![
                "Reached $200!".to_string(),
                "Halfway to Car!".to_string(),
                "Goal Reached: Car".to_string(),
            ]
        );
    }

    #[test]
    fn already_unlocked_labels_never_fire_again() {
        let unlocked = vec!["Reached $200!".to_string(), "Halfway to Car!".to_string()];
        let fresh = newly_unlocked("Car", dec!(600), dec!(500), &unlocked);
        assert_eq!(fresh, vec!["Goal Reached: Car".to_string()]);
    }

    #[test]
    fn small_targets_can_skip_the_fixed_milestone() {
        // target 100: goal completes without ever crossing $200
        let fresh = newly_unlocked("Phone", dec!(100), dec!(100), &[]);
        assert_eq!(
            fresh,
            vec![
                "Halfway to Phone!".to_string(),
                "Goal Reached: Phone".to_string(),
            ]
        );
    }
}
