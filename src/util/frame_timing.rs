use web_time::Instant;

/// Per-viewer frame clock with a smoothed FPS estimate.
///
/// Timestamps come from the frame callback rather than being sampled
/// here, so a viewer driven by a host's refresh cadence measures exactly
/// that cadence.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Timestamp of the previous frame, if any.
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
    /// Frames recorded so far.
    frames: u64,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// A clock that has not seen any frame yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: None,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Record a frame drawn at `now`.
    pub fn record(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            let frame_time = now.saturating_duration_since(last).as_secs_f32();
            if frame_time > 0.0 {
                let instant_fps = 1.0 / frame_time;
                self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                    + instant_fps * self.smoothing;
            }
        }
        self.last_frame = Some(now);
        self.frames += 1;
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of frames recorded.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
