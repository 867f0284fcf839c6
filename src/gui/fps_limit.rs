use super::Config;
use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the frame rate and tracks a smoothed FPS estimate.
pub struct FpsLimiter {
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl Default for FpsLimiter {
    fn default() -> Self {
        Self {
            frame_timer: Instant::now(),
            frametime_smoothed: 1. / Config::MAX_FPS,
        }
    }
}

impl FpsLimiter {
    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Sleeps for the rest of the frame, but never past `deadline`.
    pub fn sleep(&mut self, max_fps: f64, deadline: Option<Duration>) {
        let before_wait = self.frame_timer.elapsed();

        let mut target_frametime = Duration::from_secs_f64(1. / max_fps);
        if let Some(deadline) = deadline {
            target_frametime = target_frametime.min(before_wait + deadline);
        }
        if target_frametime > before_wait {
            sleep(target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}
