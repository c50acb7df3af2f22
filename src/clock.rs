//! Frame pacing
//!
//! `FrameClock` measures the wall-clock time between frames and holds the
//! loop to the configured frame rate: sleep for the bulk of the remaining
//! time, then spin-wait the last couple of milliseconds for precision.

use macroquad::prelude::get_time;
use serde::{Deserialize, Serialize};

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    Fps30,
    #[default]
    Fps60,
    /// As fast as possible
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FpsLimit::Fps30 => "30",
            FpsLimit::Fps60 => "60",
            FpsLimit::Unlocked => "Unlocked",
        }
    }
}

/// Measures `dt` between frames and enforces an `FpsLimit`
#[derive(Debug, Clone)]
pub struct FrameClock {
    limit: FpsLimit,
    frame_start: Option<f64>,
}

impl FrameClock {
    pub fn new(limit: FpsLimit) -> Self {
        Self { limit, frame_start: None }
    }

    /// Mark the start of a frame at `now` (seconds) and return the time since
    /// the previous frame started. The first frame reports the target frame
    /// time, or zero when unlocked.
    pub fn begin_frame_at(&mut self, now: f64) -> f32 {
        let dt = match self.frame_start {
            Some(prev) => (now - prev).max(0.0),
            None => self.limit.frame_time().unwrap_or(0.0),
        };
        self.frame_start = Some(now);
        dt as f32
    }

    /// `begin_frame_at` with macroquad's clock
    pub fn begin_frame(&mut self) -> f32 {
        self.begin_frame_at(get_time())
    }

    /// Seconds left in the current frame's budget at `now`
    pub fn remaining_at(&self, now: f64) -> Option<f64> {
        let target = self.limit.frame_time()?;
        let start = self.frame_start?;
        let remaining = target - (now - start);
        (remaining > 0.0).then_some(remaining)
    }

    /// Block until the current frame has used its whole budget
    pub fn wait_for_frame_end(&self) {
        let (Some(target_frame_time), Some(frame_start)) = (self.limit.frame_time(), self.frame_start) else {
            return;
        };
        if self.remaining_at(get_time()).is_none() {
            return;
        }

        // Native: use sleep for bulk, then spin-wait for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            let spin_margin = 0.002; // 2ms
            while get_time() - frame_start + spin_margin < target_frame_time {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while get_time() - frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
        // WASM: no thread::sleep, the browser paces frames
        #[cfg(target_arch = "wasm32")]
        {
            while get_time() - frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_time() {
        assert_eq!(FpsLimit::Unlocked.frame_time(), None);
        let t = FpsLimit::Fps30.frame_time().unwrap_or_default();
        assert!((t - 1.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_dt_is_wall_clock_delta() {
        let mut clock = FrameClock::new(FpsLimit::Fps60);
        let first = clock.begin_frame_at(10.0);
        assert!((first - 1.0 / 60.0).abs() < 1e-6);
        let dt = clock.begin_frame_at(10.05);
        assert!((dt - 0.05).abs() < 1e-6);
        // Clock going backwards never yields negative dt
        assert_eq!(clock.begin_frame_at(9.0), 0.0);
    }

    #[test]
    fn test_remaining_budget() {
        let mut clock = FrameClock::new(FpsLimit::Fps30);
        assert_eq!(clock.remaining_at(0.0), None);
        clock.begin_frame_at(1.0);
        let left = clock.remaining_at(1.01).unwrap_or_default();
        assert!((left - (1.0 / 30.0 - 0.01)).abs() < 1e-9);
        assert_eq!(clock.remaining_at(1.5), None);

        let mut unlocked = FrameClock::new(FpsLimit::Unlocked);
        unlocked.begin_frame_at(1.0);
        assert_eq!(unlocked.remaining_at(1.0), None);
        assert_eq!(unlocked.begin_frame_at(2.0), 1.0);
    }
}
