//! Animation curves for the scroll driven visuals.
//!
//! Components only read the DOM and write styles; the numbers come from here
//! so they can be checked without a browser.

/// Maps `value` from `input` onto `output`, clamping at both ends.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return out_start;
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// How far an element has travelled through the viewport: 0 when its top
/// touches the viewport bottom, 1 when its bottom leaves through the top.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

pub fn parallax_offset(progress: f64, range: f64) -> f64 {
    map_range(progress, (0.0, 1.0), (-range, range))
}

pub fn parallax_transform(offset: f64, scale: f64) -> String {
    format!("translateY({:.2}px) scale({})", offset, scale)
}

/// Marquee track position in percent of the track width. The track holds the
/// images twice, so -50% shows exactly what 0% shows.
pub fn marquee_offset(elapsed_ms: f64, cycle_ms: f64, reverse: bool) -> f64 {
    if cycle_ms <= 0.0 {
        return 0.0;
    }
    let phase = elapsed_ms.rem_euclid(cycle_ms) / cycle_ms;
    if reverse {
        -50.0 + 50.0 * phase
    } else {
        -50.0 * phase
    }
}

/// Repeats the sequence once so the marquee can wrap without a gap.
pub fn doubled<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items.iter()).cloned().collect()
}

pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}

pub fn stagger_delay(index: usize, step_secs: f64) -> f64 {
    index as f64 * step_secs
}

/// Starting transform of a fade-in element before it is revealed.
pub fn fade_from_transform(distance_px: u32, scale: Option<f64>) -> String {
    match scale {
        Some(scale) => format!("translateY({}px) scale({})", distance_px, scale),
        None => format!("translateY({}px)", distance_px),
    }
}

/// Flips once on the first visible observation and never flips back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Returns true only for the observation that reveals the element.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.revealed || !visible {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn map_range_clamps() {
        assert_eq!(map_range(-10.0, (0.0, 500.0), (0.0, 200.0)), 0.0);
        assert_eq!(map_range(250.0, (0.0, 500.0), (0.0, 200.0)), 100.0);
        assert_eq!(map_range(900.0, (0.0, 500.0), (0.0, 200.0)), 200.0);
        assert_eq!(map_range(150.0, (0.0, 300.0), (1.0, 0.0)), 0.5);
    }

    #[test]
    fn scroll_progress_spans_entry_to_exit() {
        // Top at viewport bottom: just entering.
        assert_eq!(scroll_progress(800.0, 600.0, 800.0), 0.0);
        // Bottom at viewport top: just left.
        assert_eq!(scroll_progress(-600.0, 600.0, 800.0), 1.0);
        assert!((scroll_progress(100.0, 600.0, 800.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn parallax_runs_between_negative_and_positive_offset() {
        assert_eq!(parallax_offset(0.0, 80.0), -80.0);
        assert_eq!(parallax_offset(0.5, 80.0), 0.0);
        assert_eq!(parallax_offset(1.0, 80.0), 80.0);
        assert_eq!(parallax_transform(-12.5, 1.15), "translateY(-12.50px) scale(1.15)");
    }

    #[test]
    fn marquee_directions() {
        assert_eq!(marquee_offset(0.0, 40_000.0, false), 0.0);
        assert_eq!(marquee_offset(20_000.0, 40_000.0, false), -25.0);
        assert_eq!(marquee_offset(0.0, 40_000.0, true), -50.0);
        assert_eq!(marquee_offset(20_000.0, 40_000.0, true), -25.0);
    }

    #[test]
    fn doubled_repeats_sequence_once() {
        assert_eq!(doubled(&["a", "b"]), vec!["a", "b", "a", "b"]);
    }

    #[test]
    fn words_and_delays() {
        assert_eq!(split_words("Keep the lifestyle."), vec!["Keep", "the", "lifestyle."]);
        assert_eq!(split_words(""), Vec::<&str>::new());
        assert!((stagger_delay(3, 0.05) - 0.15).abs() < 1e-9);
    }

    #[test]
    fn fade_transform_with_and_without_scale() {
        assert_eq!(fade_from_transform(40, None), "translateY(40px)");
        assert_eq!(fade_from_transform(0, Some(0.95)), "translateY(0px) scale(0.95)");
    }

    #[test]
    fn latch_reveals_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert_eq!(latch, RevealLatch { revealed: true });
    }

    proptest! {
        #[test]
        fn parallax_stays_in_range(top in -5000.0f64..5000.0, height in 0.0f64..3000.0, vh in 1.0f64..2000.0, range in 0.0f64..200.0) {
            let offset = parallax_offset(scroll_progress(top, height, vh), range);
            prop_assert!(offset >= -range && offset <= range);
        }

        #[test]
        fn marquee_wraps_without_jump(cycles in 0u32..50, dir in any::<bool>()) {
            let cycle = 40_000.0;
            let start = marquee_offset(0.0, cycle, dir);
            let after = marquee_offset(cycle * cycles as f64, cycle, dir);
            prop_assert!((start - after).abs() < 1e-6);
            // Just before the wrap the track sits one copy (50%) from the start.
            let end = marquee_offset(cycle - 1e-3, cycle, dir);
            prop_assert!(((end - start).abs() - 50.0).abs() < 1e-3);
        }

        #[test]
        fn marquee_stays_within_one_copy(t in 0.0f64..1e7, dir in any::<bool>()) {
            let x = marquee_offset(t, 40_000.0, dir);
            prop_assert!((-50.0..=0.0).contains(&x));
        }

        #[test]
        fn latch_fires_at_most_once(seq in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut latch = RevealLatch::default();
            let fired = seq.iter().filter(|v| latch.observe(**v)).count();
            prop_assert_eq!(fired, usize::from(seq.contains(&true)));
        }
    }
}
