//! Adaptive scaling of trackball motion.
//!
//! The raw deltas of a trackball are too small to move the cursor at rest and
//! too erratic at speed. The gain follows an exponential moving average of the
//! motion length, giving velocity dependent acceleration without a hard
//! threshold.

use crate::config::ScalerConfig;

/// Smoothed gain of one trackball
#[derive(Debug, Clone, Copy)]
pub struct Scaler {
    accumulated_factor: f32,
}

impl Scaler {
    pub fn new(config: &ScalerConfig) -> Self {
        Self {
            accumulated_factor: config.min_scale,
        }
    }

    /// Current smoothed factor
    pub fn factor(&self) -> f32 {
        self.accumulated_factor
    }

    /// Scale one sample, `growth_factor` is the runtime adjustable growth.
    ///
    /// The factor always stays within `[min_scale, max_scale]` and the output
    /// within the i16 range.
    pub fn scale(&mut self, x: i16, y: i16, growth_factor: f32, config: &ScalerConfig) -> (i16, i16) {
        let x = x as f32;
        let y = y as f32;
        let length = libm::sqrtf(x * x + y * y);
        let factor = growth_factor * length + config.min_scale;

        let accumulated = self.accumulated_factor * (1.0 - config.momentum) + factor * config.momentum;
        // `max`/`min` discard a NaN operand, keeping the previous bound
        self.accumulated_factor = accumulated.max(config.min_scale).min(config.max_scale);

        (
            saturate_i16(x * self.accumulated_factor),
            saturate_i16(y * self.accumulated_factor),
        )
    }
}

fn saturate_i16(value: f32) -> i16 {
    libm::roundf(value).clamp(i16::MIN as f32, i16::MAX as f32) as i16
}
