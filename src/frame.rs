use std::time::Instant;

/// How often the FPS readout refreshes, in seconds
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Minimal frame clock - just tracks delta time
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds since the previous tick; advances the clock
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames-per-second averaged over `FPS_UPDATE_INTERVAL`
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameStats {
    frame_count: u32,
    elapsed: f32,
    fps: f32,
    total_frames: u64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame. Returns the new average when a window completes.
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.total_frames += 1;
        self.elapsed += delta;

        if self.elapsed < FPS_UPDATE_INTERVAL {
            return None;
        }
        self.fps = self.frame_count as f32 / self.elapsed;
        self.frame_count = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_time_ms(&self) -> f32 {
        if self.fps > 0.0 {
            1000.0 / self.fps
        } else {
            0.0
        }
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}
