/// Wall-clock driven animation runs
///
/// An `Animator` is ticked once per display refresh with the frame
/// timestamp. Progress comes from elapsed time, never from frame counts,
/// so a slow or uneven frame cadence only changes how many ticks land
/// inside the run, not how long it lasts.
use std::time::Duration;

/// Easing curve applied to raw progress
pub type EasingFn = fn(f32) -> f32;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickStatus {
    /// Run not started or already finished, callback not invoked
    Idle,
    /// Callback invoked with this eased progress, more ticks to come
    Running(f32),
    /// Callback invoked with the final progress of 1.0
    Finished,
}

/// One timed run from progress 0 to 1 over a fixed duration
#[derive(Debug, Clone, Copy)]
pub struct Animator {
    duration: Duration,
    easing: EasingFn,
    started_at: Duration,
    active: bool,
}

impl Animator {
    /// Create inactive animator
    pub fn new(duration: Duration, easing: EasingFn) -> Self {
        Self {
            duration,
            easing,
            started_at: Duration::ZERO,
            active: false,
        }
    }

    /// Create animator already started at `now`
    pub fn run(duration: Duration, easing: EasingFn, now: Duration) -> Self {
        let mut animator = Self::new(duration, easing);
        animator.start(now);
        animator
    }

    /// Start (or restart) the run at `now`
    pub fn start(&mut self, now: Duration) {
        self.started_at = now;
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Raw (uneased) progress at `now`, in [0, 1]
    pub fn raw_progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
    }

    /// Advance to `now`, feeding eased progress to `on_tick`
    ///
    /// The tick that reaches the end of the run delivers exactly 1.0 and
    /// deactivates the animator; later ticks are no-ops.
    pub fn tick(&mut self, now: Duration, mut on_tick: impl FnMut(f32)) -> TickStatus {
        if !self.active {
            return TickStatus::Idle;
        }

        let raw = self.raw_progress(now);
        if raw >= 1.0 {
            self.active = false;
            on_tick(1.0);
            return TickStatus::Finished;
        }

        let eased = (self.easing)(raw);
        on_tick(eased);
        TickStatus::Running(eased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::easing::{ease_out, linear};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn animator_inactive_until_started() {
        let mut animator = Animator::new(ms(1000), linear);
        let mut calls = 0;

        assert_eq!(animator.tick(ms(10), |_| calls += 1), TickStatus::Idle);
        assert_eq!(calls, 0);
        assert!(!animator.is_active());
    }

    #[test]
    fn animator_final_tick_is_exactly_one() {
        let mut animator = Animator::run(ms(1000), ease_out, ms(0));
        let mut seen = Vec::new();

        // Uneven frame cadence, overshooting the end
        for now in [16, 40, 250, 251, 700, 999, 1033] {
            animator.tick(ms(now), |p| seen.push(p));
        }

        assert_eq!(seen.last().copied(), Some(1.0));
        assert!(!animator.is_active());
    }

    #[test]
    fn animator_stops_ticking_after_duration() {
        let mut animator = Animator::run(ms(1000), ease_out, ms(500));
        let mut calls = 0;

        assert!(matches!(animator.tick(ms(900), |_| calls += 1), TickStatus::Running(_)));
        assert_eq!(animator.tick(ms(1500), |_| calls += 1), TickStatus::Finished);
        assert_eq!(animator.tick(ms(1516), |_| calls += 1), TickStatus::Idle);
        assert_eq!(animator.tick(ms(3000), |_| calls += 1), TickStatus::Idle);
        assert_eq!(calls, 2);
    }

    #[test]
    fn animator_progress_non_decreasing() {
        let mut animator = Animator::run(ms(1000), ease_out, ms(0));
        let mut seen = Vec::new();
        let mut now = 0;
        while animator.is_active() {
            now += 7;
            animator.tick(ms(now), |p| seen.push(p));
        }

        assert!(seen.windows(2).all(|pair| pair[1] >= pair[0]));
        assert_eq!(seen.last().copied(), Some(1.0));
    }

    #[test]
    fn animator_uses_wall_clock_not_frames() {
        let mut animator = Animator::run(ms(1000), linear, ms(0));
        let mut last = 0.0;

        // A single late frame lands halfway regardless of how few frames ran
        animator.tick(ms(500), |p| last = p);
        assert!((last - 0.5).abs() < 1e-6);
    }

    #[test]
    fn animator_clock_going_backwards_yields_zero() {
        let animator = Animator::run(ms(1000), linear, ms(200));
        assert_eq!(animator.raw_progress(ms(100)), 0.0);
    }

    #[test]
    fn animator_zero_duration_finishes_immediately() {
        let mut animator = Animator::run(Duration::ZERO, ease_out, ms(5));
        let mut last = 0.0;

        assert_eq!(animator.tick(ms(5), |p| last = p), TickStatus::Finished);
        assert_eq!(last, 1.0);
    }

    #[test]
    fn animator_restart_resets_origin() {
        let mut animator = Animator::run(ms(100), linear, ms(0));
        animator.tick(ms(100), |_| {});
        assert!(!animator.is_active());

        animator.start(ms(1000));
        assert!(animator.is_active());
        assert_eq!(animator.raw_progress(ms(1050)), 0.5);
    }
}
