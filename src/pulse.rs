use std::time::Duration;
use crate::core::animator::{Animator, TickStatus};
use crate::core::easing::ease_out;

/// Hue pulse on the designated panel
///
/// Each cycle eases progress from `from` to `1 - from`, so consecutive
/// cycles swing back and forth between the two hue states. A request
/// starts one cycle; completed cycles re-arm themselves until the repeat
/// counter reaches the cap. The counter only resets when the carousel
/// leaves and re-enters the pulse slide.
///
/// The counter's parity always matches the side the next cycle starts
/// from (odd = away from rest), so an even cap ends every visit back at
/// the resting hue.
#[derive(Debug, Clone)]
pub struct PulseAnimation {
    duration: Duration,
    repeat_cap: u32,
    progress: f32,
    from: f32,
    requested: bool,
    repeats: u32,
    run: Option<Animator>,
}

impl PulseAnimation {
    pub fn new(duration: Duration, repeat_cap: u32) -> Self {
        Self {
            duration,
            repeat_cap,
            progress: 0.0,
            from: 0.0,
            requested: false,
            repeats: 0,
            run: None,
        }
    }

    /// Current progress value for the pulse uniform
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Completed cycles since the last reset
    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    pub fn repeat_cap(&self) -> u32 {
        self.repeat_cap
    }

    /// Ask for a cycle; ignored once the cap is reached
    pub fn request(&mut self) -> bool {
        if self.repeats >= self.repeat_cap {
            log::debug!("Pulse request ignored, {} cycles already ran", self.repeats);
            return false;
        }
        self.requested = true;
        true
    }

    /// Forget completed cycles (slide left and re-entered)
    ///
    /// A pulse parked or mid-cycle away from rest keeps one cycle on the
    /// counter so the visit still finishes at rest.
    pub fn reset_repeats(&mut self) {
        self.repeats = if self.from == 0.0 { 0 } else { 1 };
    }

    /// Start a requested cycle if idle, then tick the active one
    ///
    /// Returns the new progress when it changed this frame.
    pub fn advance(&mut self, now: Duration) -> Option<f32> {
        if self.run.is_none() && self.requested {
            self.requested = false;
            self.run = Some(Animator::run(self.duration, ease_out, now));
        }

        let run = self.run.as_mut()?;
        let from = self.from;
        let to = 1.0 - from;
        let mut value = self.progress;

        let status = run.tick(now, |eased| value = from + (to - from) * eased);
        self.progress = value;

        if status == TickStatus::Finished {
            self.run = None;
            self.from = to;
            self.progress = to;
            self.repeats += 1;
            // Requests that arrived mid-cycle still obey the cap
            self.requested = self.repeats < self.repeat_cap;
        }

        Some(self.progress)
    }
}
