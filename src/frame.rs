use std::time::{Duration, Instant};

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Time since the clock started; the animation timestamp
    pub time: Duration,
    pub delta: Duration,
}

impl FrameInfo {
    pub fn new(number: u64, time: Duration, delta: Duration) -> Self {
        Self {
            number,
            time,
            delta,
        }
    }
}

/// Monotonic frame clock
///
/// Yields one [`FrameInfo`] per display refresh: `for frame in clock { ... }`
pub struct FrameIterator {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time);
        let time = now.duration_since(self.start_time);

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}
