//! Pure math behind the parallax and scroll-linked effects.

/// Maps `value` from `input` onto `output`, clamped to the input range.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    interpolate(value, &[input.0, input.1], &[output.0, output.1])
}

/// Piecewise-linear interpolation through `(stops[i], values[i])`.
///
/// `stops` must be ascending and the same length as `values`. Outside the
/// stops the first or last value is held.
pub fn interpolate(progress: f64, stops: &[f64], values: &[f64]) -> f64 {
    debug_assert_eq!(stops.len(), values.len());
    let (Some(&first), Some(&last)) = (stops.first(), stops.last()) else {
        return 0.0;
    };
    if progress <= first {
        return values[0];
    }
    if progress >= last {
        return values[values.len() - 1];
    }
    for (i, window) in stops.windows(2).enumerate() {
        let (lo, hi) = (window[0], window[1]);
        if progress <= hi {
            if hi == lo {
                return values[i + 1];
            }
            let t = (progress - lo) / (hi - lo);
            return values[i] + (values[i + 1] - values[i]) * t;
        }
    }
    values[values.len() - 1]
}

/// Fraction of the scrollable document already scrolled past.
pub fn document_scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Progress of an element through the viewport: 0 when its top touches the
/// viewport bottom, 1 when its bottom leaves the viewport top.
pub fn element_scroll_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + rect_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / travel).clamp(0.0, 1.0)
}

/// Pointer position relative to an element's centre on one axis, in
/// `[-1, 1]` across the element, scaled by `multiplier`.
pub fn pointer_offset(client: f64, rect_start: f64, rect_size: f64, multiplier: f64) -> f64 {
    let half = rect_size / 2.0;
    if half <= 0.0 {
        return 0.0;
    }
    let centre = rect_start + half;
    (client - centre) / half * multiplier
}

/// Admits at most one event per interval.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last: None,
        }
    }

    pub fn admit(&mut self, now: f64) -> bool {
        match self.last {
            Some(last) if now - last < self.interval_ms => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_inverts_and_clamps() {
        let input = (-300.0, 300.0);
        let output = (5.0, -5.0);
        assert!((map_range(0.0, input, output) - 0.0).abs() < 1e-9);
        assert!((map_range(-300.0, input, output) - 5.0).abs() < 1e-9);
        assert!((map_range(150.0, input, output) + 2.5).abs() < 1e-9);
        assert!((map_range(900.0, input, output) + 5.0).abs() < 1e-9);
    }

    #[test]
    fn interpolate_fades_in_and_out() {
        let stops = [0.0, 0.2, 0.8, 1.0];
        let values = [0.0, 1.0, 1.0, 0.0];
        assert_eq!(interpolate(-1.0, &stops, &values), 0.0);
        assert!((interpolate(0.1, &stops, &values) - 0.5).abs() < 1e-9);
        assert_eq!(interpolate(0.5, &stops, &values), 1.0);
        assert!((interpolate(0.9, &stops, &values) - 0.5).abs() < 1e-9);
        assert_eq!(interpolate(2.0, &stops, &values), 0.0);
    }

    #[test]
    fn document_progress_bounds() {
        assert_eq!(document_scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(document_scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(document_scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(document_scroll_progress(100.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn element_progress_spans_entry_to_exit() {
        // Top edge at the viewport bottom.
        assert_eq!(element_scroll_progress(800.0, 400.0, 800.0), 0.0);
        // Bottom edge at the viewport top.
        assert_eq!(element_scroll_progress(-400.0, 400.0, 800.0), 1.0);
        assert_eq!(element_scroll_progress(200.0, 400.0, 800.0), 0.5);
    }

    #[test]
    fn pointer_offset_is_centred() {
        assert_eq!(pointer_offset(500.0, 0.0, 1000.0, 200.0), 0.0);
        assert_eq!(pointer_offset(1000.0, 0.0, 1000.0, 200.0), 200.0);
        assert_eq!(pointer_offset(0.0, 0.0, 1000.0, 50.0), -50.0);
        assert_eq!(pointer_offset(10.0, 0.0, 0.0, 50.0), 0.0);
    }

    #[test]
    fn throttle_drops_events_inside_interval() {
        let mut throttle = Throttle::new(50.0);
        assert!(throttle.admit(1_000.0));
        assert!(!throttle.admit(1_020.0));
        assert!(!throttle.admit(1_049.0));
        assert!(throttle.admit(1_050.0));
        assert!(!throttle.admit(1_060.0));
    }
}
