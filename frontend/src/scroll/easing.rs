/// Progress curves for the scroll animation.
///
/// Every curve maps a normalised elapsed-time fraction `t` in `[0, 1]` to a
/// normalised progress fraction in `[0, 1]`, with `f(0) = 0` and `f(1) = 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    #[default]
    EaseInOutQuad,
}

impl Easing {
    pub const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
    ];

    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in Easing::ALL {
            assert!((easing.apply(0.0) - 0.0).abs() < f64::EPSILON, "{:?}", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < f64::EPSILON, "{:?}", easing);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in Easing::ALL {
            let mut previous = easing.apply(0.0);
            for step in 1..=1000 {
                let current = easing.apply(step as f64 / 1000.0);
                assert!(current >= previous, "{:?} decreased at step {}", easing, step);
                previous = current;
            }
        }
    }

    #[test]
    fn midpoint_shapes() {
        assert!((Easing::Linear.apply(0.5) - 0.5).abs() < f64::EPSILON);
        assert!(Easing::EaseInQuad.apply(0.5) < 0.5);
        assert!(Easing::EaseOutQuad.apply(0.5) > 0.5);
        assert!((Easing::EaseInOutQuad.apply(0.5) - 0.5).abs() < f64::EPSILON);
        assert!(Easing::EaseInOutQuad.apply(0.25) < 0.25);
        assert!(Easing::EaseInOutQuad.apply(0.75) > 0.75);
    }

    #[test]
    fn default_is_ease_in_out() {
        assert_eq!(Easing::default(), Easing::EaseInOutQuad);
    }
}
