use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

#[derive(Debug, Clone, Copy)]
enum Timing {
    WallClock { start: Instant, last: Instant },
    Fixed { delta: f32 },
}

/// Infinite iterator that yields frame information.
/// Use this in a loop: `for frame in frames.take(n) { ... }`
///
/// Wall-clock deltas are clamped to `max_delta` so a stall (debugger, window
/// drag) doesn't teleport a camera whose speed is scaled by delta time.
#[derive(Debug, Clone)]
pub struct FrameIterator {
    frame_number: u64,
    elapsed: f32,
    max_delta: f32,
    timing: Timing,
}

impl FrameIterator {
    pub const DEFAULT_MAX_DELTA: f32 = 0.25;

    /// Deltas measured from the wall clock. The first frame has delta 0.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            elapsed: 0.0,
            max_delta: Self::DEFAULT_MAX_DELTA,
            timing: Timing::WallClock { start: now, last: now },
        }
    }

    /// Every frame advances by exactly `delta` seconds. Deterministic, for
    /// headless runs and tests.
    pub fn fixed(delta: f32) -> Self {
        Self {
            frame_number: 0,
            elapsed: 0.0,
            max_delta: f32::INFINITY,
            timing: Timing::Fixed { delta },
        }
    }

    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta;
        self
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Seconds since the iterator started
    pub fn time(&self) -> f32 {
        match self.timing {
            Timing::WallClock { start, .. } => start.elapsed().as_secs_f32(),
            Timing::Fixed { .. } => self.elapsed,
        }
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
        let delta = match &mut self.timing {
            Timing::WallClock { last, .. } => {
                let now = Instant::now();
                let delta = now.duration_since(*last).as_secs_f32();
                *last = now;
                delta
            }
            Timing::Fixed { delta } => {
                // first frame starts at t = 0 like the wall clock
                if self.frame_number == 0 {
                    0.0
                } else {
                    *delta
                }
            }
        }
        .min(self.max_delta);

        self.elapsed += delta;
        let info = FrameInfo::new(self.frame_number, self.elapsed, delta);
        self.frame_number += 1;

        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn fixed_frames_advance_evenly() {
        let frames: Vec<FrameInfo> = FrameIterator::fixed(0.5).take(4).collect();
        assert_eq!(frames[0], FrameInfo::new(0, 0.0, 0.0));
        assert_eq!(frames[1], FrameInfo::new(1, 0.5, 0.5));
        assert_eq!(frames[3], FrameInfo::new(3, 1.5, 0.5));
    }

    #[test]
    fn wall_clock_measures_delta() {
        let mut frames = FrameIterator::new();
        let first = frames.next().unwrap();
        assert!(first.delta < 0.005);

        thread::sleep(Duration::from_millis(10));
        let second = frames.next().unwrap();
        assert!(second.delta >= 0.009 && second.delta <= 0.25);
        assert_eq!(frames.frame_number(), 2);
    }

    #[test]
    fn delta_is_clamped() {
        let mut frames = FrameIterator::fixed(2.0).with_max_delta(0.1);
        frames.next();
        let info = frames.next().unwrap();
        assert_eq!(info.delta, 0.1);
        assert!((frames.time() - 0.1).abs() < 1e-6);
    }
}
