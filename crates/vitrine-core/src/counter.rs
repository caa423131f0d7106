//! Animated counters and the fire-once visibility latch.

use std::time::Duration;

/// Ease-out quadratic: fast start, gentle landing. `t` in `[0, 1]`.
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Leading integer of a display string, the way `parseInt` reads it:
/// `"500+"` is 500, `" 12 dishes"` is 12, `"n/a"` is nothing.
pub fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Interpolates a displayed integer from `from` to `to` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    from: i64,
    to: i64,
    duration: Duration,
}

impl CounterAnimation {
    pub fn new(from: i64, to: i64, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    pub fn start(&self) -> i64 {
        self.from
    }

    pub fn target(&self) -> i64 {
        self.to
    }

    /// Elapsed fraction, clamped to `[0, 1]`. A zero duration is complete at once.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// The integer to display after `elapsed`.
    ///
    /// Once complete this is exactly `to`; floating-point rounding never
    /// leaves the final frame one short.
    pub fn value_at(&self, elapsed: Duration) -> i64 {
        let t = self.progress(elapsed);
        if t >= 1.0 {
            return self.to;
        }
        let span = (self.to - self.from) as f64;
        (self.from as f64 + span * ease_out_quad(t)).floor() as i64
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }
}

/// Fires the first time its element is reported visible, then never again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    fired: bool,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a visibility observation; returns `true` only on the first
    /// visible one.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(0.5), 0.75);
    }

    #[test]
    fn parse_like_parse_int() {
        assert_eq!(parse_leading_integer("42"), Some(42));
        assert_eq!(parse_leading_integer("500+"), Some(500));
        assert_eq!(parse_leading_integer("  12 dishes"), Some(12));
        assert_eq!(parse_leading_integer("-7"), Some(-7));
        assert_eq!(parse_leading_integer("n/a"), None);
        assert_eq!(parse_leading_integer(""), None);
        assert_eq!(parse_leading_integer("+"), None);
    }

    #[test]
    fn value_follows_curve() {
        let anim = CounterAnimation::new(0, 100, Duration::from_millis(1000));
        assert_eq!(anim.value_at(Duration::ZERO), 0);
        assert_eq!(anim.value_at(Duration::from_millis(500)), 75);
        assert_eq!(anim.value_at(Duration::from_millis(1000)), 100);
        assert_eq!(anim.value_at(Duration::from_secs(5)), 100);
    }

    #[test]
    fn counting_down_lands_on_target() {
        let anim = CounterAnimation::new(12, 5, Duration::from_millis(500));
        assert_eq!(anim.value_at(Duration::from_millis(250)), 6);
        assert_eq!(anim.value_at(Duration::from_millis(500)), 5);
    }

    #[test]
    fn zero_duration_is_immediate() {
        let anim = CounterAnimation::new(0, 9, Duration::ZERO);
        assert!(anim.is_complete(Duration::ZERO));
        assert_eq!(anim.value_at(Duration::ZERO), 9);
    }

    #[test]
    fn frame_values_end_on_target_and_never_decrease() {
        let anim = CounterAnimation::new(0, 42, Duration::from_millis(2000));
        let values: Vec<i64> = (0..=125)
            .map(|frame| anim.value_at(Duration::from_millis(frame * 16)))
            .collect();
        assert_eq!(values.last(), Some(&42));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|v| *v <= 42));
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = VisibilityLatch::new();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.has_fired());
    }
}
