//! Hand angles for a two-hand analog dial.
//!
//! Angles are in degrees, clockwise from 12 o'clock, always in `[0, 360)`.
//! Inputs are not validated: minutes and seconds are expected in `[0, 60)`.
//! Anything larger still carries into the slower hand and the result is folded
//! back onto the dial.

/// Rotation of both hands, derived from a [`TimeValue`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct HandAngles {
    pub big_hand_degrees: f32,
    pub small_hand_degrees: f32,
}

/// A time shown on the dial.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimeValue {
    /// Clock mode: big hand = hours (12 per turn), small hand = minutes.
    HourMinSec { hour: u32, min: u32, sec: u32 },
    /// Chronometer mode: big hand = minutes (60 per turn), small hand = seconds.
    MinSec { min: u32, sec: u32 },
}

impl TimeValue {
    pub fn angles(self) -> HandAngles {
        match self {
            TimeValue::HourMinSec { hour, min, sec } => angles_from_hour_min_sec(hour, min, sec),
            TimeValue::MinSec { min, sec } => angles_from_min_sec(min, sec),
        }
    }
}

#[inline]
fn fold(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}

/// Clock mode: hour hand on the big hand, minute hand on the small hand.
pub fn angles_from_hour_min_sec(hour: u32, min: u32, sec: u32) -> HandAngles {
    let mins = min as f32 + sec as f32 / 60.0;
    let hours = hour as f32 + mins / 60.0;
    HandAngles {
        big_hand_degrees: fold(hours / 12.0 * 360.0),
        small_hand_degrees: fold(mins / 60.0 * 360.0),
    }
}

/// Chronometer mode: minute hand on the big hand, second hand on the small hand.
pub fn angles_from_min_sec(min: u32, sec: u32) -> HandAngles {
    let secs = sec as f32;
    let mins = min as f32 + secs / 60.0;
    HandAngles {
        big_hand_degrees: fold(mins / 60.0 * 360.0),
        small_hand_degrees: fold(secs / 60.0 * 360.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    // ── min/sec (chronometer mode) ────────────────────────────────────────

    #[test]
    fn min_sec_matches_six_degrees_per_unit() {
        for min in 0..60 {
            for sec in 0..60 {
                let a = angles_from_min_sec(min, sec);
                let want_small = sec as f32 * 6.0;
                let want_big = (min as f32 + sec as f32 / 60.0) * 6.0;
                assert!(approx(a.small_hand_degrees, want_small), "{min}:{sec} small {a:?}");
                assert!(approx(a.big_hand_degrees, want_big), "{min}:{sec} big {a:?}");
            }
        }
    }

    #[test]
    fn one_second_elapsed() {
        let a = angles_from_min_sec(0, 1);
        assert!(approx(a.small_hand_degrees, 6.0));
        assert!(approx(a.big_hand_degrees, 0.1));
    }

    #[test]
    fn zero_is_straight_up() {
        assert_eq!(angles_from_min_sec(0, 0), HandAngles::default());
        assert_eq!(angles_from_hour_min_sec(0, 0, 0), HandAngles::default());
    }

    // ── hour/min/sec (clock mode) ─────────────────────────────────────────

    #[test]
    fn hour_min_sec_matches_formula() {
        for hour in 0..12 {
            for min in (0..60).step_by(7) {
                for sec in (0..60).step_by(11) {
                    let a = angles_from_hour_min_sec(hour, min, sec);
                    let mins = min as f32 + sec as f32 / 60.0;
                    assert!(approx(a.small_hand_degrees, mins * 6.0), "{a:?}");
                    assert!(approx(a.big_hand_degrees, (hour as f32 + mins / 60.0) * 30.0), "{a:?}");
                }
            }
        }
    }

    #[test]
    fn half_past_three() {
        let a = angles_from_hour_min_sec(3, 30, 0);
        assert!(approx(a.big_hand_degrees, 105.0));
        assert!(approx(a.small_hand_degrees, 180.0));
    }

    // ── out-of-range input ────────────────────────────────────────────────

    #[test]
    fn overflow_carries_and_folds() {
        // 90 s = 1.5 min: the small hand folds to 180°, the big hand keeps the carry.
        let a = angles_from_min_sec(0, 90);
        assert!(approx(a.small_hand_degrees, 180.0));
        assert!(approx(a.big_hand_degrees, 9.0));

        // 13 o'clock reads as 1 o'clock.
        let b = angles_from_hour_min_sec(13, 0, 0);
        assert!(approx(b.big_hand_degrees, 30.0));
    }

    #[test]
    fn angles_stay_on_the_dial() {
        for v in [
            TimeValue::MinSec { min: 59, sec: 59 },
            TimeValue::MinSec { min: 600, sec: 3_599 },
            TimeValue::HourMinSec { hour: 11, min: 59, sec: 59 },
            TimeValue::HourMinSec { hour: 100, min: 500, sec: 9_000 },
        ] {
            let a = v.angles();
            assert!((0.0..360.0).contains(&a.big_hand_degrees), "{v:?} -> {a:?}");
            assert!((0.0..360.0).contains(&a.small_hand_degrees), "{v:?} -> {a:?}");
        }
    }

    #[test]
    fn time_value_dispatches_by_mode() {
        assert_eq!(TimeValue::MinSec { min: 5, sec: 0 }.angles(), angles_from_min_sec(5, 0));
        assert_eq!(
            TimeValue::HourMinSec { hour: 5, min: 0, sec: 0 }.angles(),
            angles_from_hour_min_sec(5, 0, 0)
        );
    }
}
