//! Frame-rate HUD
//!
//! Averages the last few frame times and shows the frame rate plus the
//! average frame time rounded to an even number of milliseconds.

use std::collections::VecDeque;

use crate::rasterizer::{Color, Vec2};

use super::text::TextPainter;

/// Frame times kept for the average
pub const MAX_SAMPLES: usize = 10;

/// Shown until the first frame time arrives
const FALLBACK_FPS: f32 = 60.0;

/// Round to the nearest integer, then to the nearest even one
pub fn round_to_nearest_even(number: f64) -> i64 {
    let rounded = number.round_ties_even();
    let mut result = rounded as i64;
    if result % 2 != 0 {
        result += if rounded > number { -1 } else { 1 };
    }
    result
}

pub struct FrameRateDisplay {
    samples: VecDeque<f32>,
    color: Color,
    pos_fps: Vec2,
    pos_time: Vec2,
}

impl Default for FrameRateDisplay {
    fn default() -> Self {
        Self::new(Color::WHITE, Vec2::new(10.0, 30.0), Vec2::new(10.0, 60.0))
    }
}

impl FrameRateDisplay {
    pub fn new(color: Color, pos_fps: Vec2, pos_time: Vec2) -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_SAMPLES + 1),
            color,
            pos_fps,
            pos_time,
        }
    }

    /// Record one frame's duration in seconds
    pub fn record(&mut self, dt: f32) {
        self.samples.push_back(dt * 1000.0);
        if self.samples.len() > MAX_SAMPLES {
            self.samples.pop_front();
        }
    }

    /// Average frame time in milliseconds
    pub fn average_ms(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f32>() / self.samples.len() as f32
    }

    pub fn fps(&self) -> f32 {
        let avg = self.average_ms();
        if avg > 0.0 {
            1000.0 / avg
        } else {
            FALLBACK_FPS
        }
    }

    pub fn fps_label(&self) -> String {
        format!("FPS: {:.2}", self.fps())
    }

    pub fn frame_time_label(&self) -> String {
        format!("Frame Time: {} ms", round_to_nearest_even(self.average_ms() as f64))
    }

    pub fn draw(&self, text: &TextPainter) {
        text.draw(&self.fps_label(), self.pos_fps, self.color, None);
        text.draw(&self.frame_time_label(), self.pos_time, self.color, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_nearest_even() {
        assert_eq!(round_to_nearest_even(16.67), 16);
        assert_eq!(round_to_nearest_even(33.3), 34);
        assert_eq!(round_to_nearest_even(15.0), 16);
        assert_eq!(round_to_nearest_even(2.5), 2);
        assert_eq!(round_to_nearest_even(8.0), 8);
        assert_eq!(round_to_nearest_even(0.0), 0);
    }

    #[test]
    fn test_keeps_last_samples() {
        let mut hud = FrameRateDisplay::default();
        assert_eq!(hud.fps(), 60.0);
        for _ in 0..MAX_SAMPLES {
            hud.record(0.1);
        }
        for _ in 0..MAX_SAMPLES {
            hud.record(0.02);
        }
        assert!((hud.average_ms() - 20.0).abs() < 1e-3);
        assert!((hud.fps() - 50.0).abs() < 1e-2);
        assert_eq!(hud.frame_time_label(), "Frame Time: 20 ms");
        assert_eq!(hud.fps_label(), "FPS: 50.00");
    }
}
