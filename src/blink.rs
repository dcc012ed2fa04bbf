//! Blink scheduling
//!
//! Every flashing element (loading text, continue/start prompts) asks this
//! module whether it is currently shown. The answer depends only on the
//! elapsed time, so a replayed clock replays the exact same blink.

use std::time::Duration;

/// Visible for the first half of every `period`, hidden for the second.
///
/// Equivalent to `floor(2 * elapsed / period) % 2 == 0`. A zero period never
/// toggles and reports visible; configuration validation rejects it before it
/// can reach a composer.
#[inline]
pub fn is_visible(elapsed: Duration, period: Duration) -> bool {
    let period = period.as_nanos();
    if period == 0 {
        return true;
    }
    (2 * elapsed.as_nanos() / period) % 2 == 0
}

/// Guarded blink: absent until `elapsed` strictly exceeds `guard`, then
/// blinking with `period`.
///
/// The guard is a debounce for the click that ends a screen, not a visual
/// effect, so the two checks stay separate.
#[inline]
pub fn is_prompt_visible(elapsed: Duration, guard: Duration, period: Duration) -> bool {
    elapsed > guard && is_visible(elapsed, period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PERIOD: Duration = Duration::from_millis(1000);

    #[test]
    fn test_blink_half_second_cadence() {
        assert!(is_visible(Duration::ZERO, PERIOD));
        assert!(is_visible(Duration::from_millis(499), PERIOD));
        assert!(!is_visible(Duration::from_millis(500), PERIOD));
        assert!(!is_visible(Duration::from_millis(999), PERIOD));
        assert!(is_visible(Duration::from_millis(1000), PERIOD));
        assert!(is_visible(Duration::from_millis(2010), PERIOD));
    }

    #[test]
    fn test_zero_period_never_hides() {
        assert!(is_visible(Duration::from_millis(750), Duration::ZERO));
    }

    #[test]
    fn test_prompt_absent_until_guard_passes() {
        let guard = Duration::from_millis(2000);
        // Visible phase of the blink, but still inside the guard
        assert!(!is_prompt_visible(Duration::from_millis(1999), guard, PERIOD));
        assert!(!is_prompt_visible(guard, guard, PERIOD));
        assert!(is_prompt_visible(Duration::from_millis(2010), guard, PERIOD));
        // Past the guard, hidden half of the blink
        assert!(!is_prompt_visible(Duration::from_millis(2600), guard, PERIOD));
    }

    proptest! {
        #[test]
        fn prop_blink_is_periodic(t in 0u64..10_000_000, p in 1u64..100_000) {
            let t = Duration::from_millis(t);
            let p = Duration::from_millis(p);
            prop_assert_eq!(is_visible(t, p), is_visible(t + p, p));
        }

        #[test]
        fn prop_half_of_each_period_is_visible(start in 0u64..1_000_000, half in 1u64..500) {
            // Even period in ms so the window splits exactly
            let p = Duration::from_millis(half * 2);
            let visible = (0..half * 2)
                .filter(|ms| is_visible(Duration::from_millis(start + ms), p))
                .count() as u64;
            prop_assert_eq!(visible, half);
        }
    }
}
