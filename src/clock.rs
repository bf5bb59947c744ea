//! Paces the animation: one frame per interval, round and round.

use std::time::{Duration, Instant};

/// Tracks which frame of the sweep is showing and when the next one is due.
#[derive(Debug)]
pub struct FrameClock {
    frames: usize,
    interval: Duration,
    frame: usize,
    last: Instant,
}

impl FrameClock {
    /// Starts at frame 0 at time `now`.
    pub fn new(frames: usize, interval: Duration, now: Instant) -> FrameClock {
        FrameClock {
            frames: frames.max(1),
            interval,
            frame: 0,
            last: now,
        }
    }

    /// The frame currently showing.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// When the next frame is due.
    pub fn deadline(&self) -> Instant {
        self.last + self.interval
    }

    /// Moves to the next frame if an interval has passed since the last
    /// move, wrapping after the final frame.  Missed intervals are not
    /// made up.  Returns whether the frame changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now < self.deadline() {
            return false;
        }
        self.frame = (self.frame + 1) % self.frames;
        self.last = now;
        true
    }
}
