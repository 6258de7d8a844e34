//! Frame Timing
//!
//! Software frame pacing at a fixed cadence, plus a once-per-second FPS
//! integrator for the window title.

use std::time::{Duration, Instant};

/// Target cadence of the main loop.
pub const TARGET_FPS: u32 = 60;

/// Frame interval for `fps`, rounded to the nearest whole millisecond.
pub fn target_interval(fps: u32) -> Duration {
    let fps = fps.max(1) as u64;
    Duration::from_millis((1000 + fps / 2) / fps)
}

/// Paces the loop to a fixed interval by sleeping off whatever the frame
/// didn't use. A frame that ran over budget is not penalized further.
#[derive(Debug)]
pub struct FramePacer {
    target: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            target: target_interval(fps),
            frame_start: Instant::now(),
        }
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    /// Mark the start of a frame.
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Sleep off the remainder of the frame interval, if any is left.
    pub fn pace(&self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.target {
            std::thread::sleep(self.target - elapsed);
        }
    }
}

/// Counts frames and refreshes the rate once per second.
#[derive(Debug)]
pub struct FpsCounter {
    frames: u32,
    window_start: Instant,
    current: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: 0,
            window_start: Instant::now(),
            current: 0.0,
        }
    }

    /// Count one frame; returns the refreshed rate when a full second has
    /// passed since the last refresh.
    pub fn tick(&mut self) -> Option<f32> {
        self.frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            self.current = self.frames as f32 / elapsed;
            self.frames = 0;
            self.window_start = Instant::now();
            Some(self.current)
        } else {
            None
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
