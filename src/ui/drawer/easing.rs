//! Easing curves for the drawer transition.

use serde::{Deserialize, Serialize};

/// Monotonic easing curve mapping [0, 1] onto [0, 1] with fixed endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    EaseInOutQuad,
    EaseOutCubic,
}

impl Easing {
    /// Apply the curve. Input is clamped to [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::EaseInOutQuad, Easing::EaseOutCubic];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 0..=200 {
                let value = easing.apply(step as f32 / 200.0);
                assert!(value >= previous, "{easing:?} decreased at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::EaseOutCubic.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseInOutQuad.apply(3.0), 1.0);
    }
}
