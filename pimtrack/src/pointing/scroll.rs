//! Scroll emulation, trackball motion becomes smooth scrolling.

use crate::config::ScrollConfig;
use crate::hid::PointingReport;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollEmulator {
    accumulated_h: f32,
    accumulated_v: f32,
}

impl ScrollEmulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fractional scroll carried over to the next tick
    pub fn remainder(&self) -> (f32, f32) {
        (self.accumulated_h, self.accumulated_v)
    }

    /// Replace the motion of `report` with scroll.
    ///
    /// Vertical scroll is inverted: moving the ball up scrolls up.
    pub fn process(&mut self, report: &mut PointingReport, config: &ScrollConfig) {
        self.accumulated_h += report.x as f32 / config.divisor_h;
        self.accumulated_v += -(report.y as f32) / config.divisor_v;

        let h = truncate(self.accumulated_h);
        let v = truncate(self.accumulated_v);
        report.h = h;
        report.v = v;

        self.accumulated_h -= h as f32;
        self.accumulated_v -= v as f32;

        report.x = 0;
        report.y = 0;
    }
}

fn truncate(value: f32) -> i16 {
    // `as` truncates toward zero and saturates
    value as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(x: i16, y: i16) -> PointingReport {
        PointingReport {
            x,
            y,
            ..Default::default()
        }
    }

    #[test]
    fn test_remainder_is_conserved() {
        let config = ScrollConfig::default();
        let mut emulator = ScrollEmulator::new();
        let mut total = 0i32;
        for _ in 0..20 {
            let mut r = report(4, 0);
            emulator.process(&mut r, &config);
            total += r.h as i32;
            assert_eq!((r.x, r.y, r.v), (0, 0, 0));
        }
        assert_eq!(total, 10);
        assert!(emulator.remainder().0.abs() < 1.0);
    }

    #[test]
    fn test_vertical_is_inverted() {
        let config = ScrollConfig::default();
        let mut emulator = ScrollEmulator::new();
        let mut r = report(0, 17);
        emulator.process(&mut r, &config);
        assert_eq!(r.v, -2);
        let (_, v) = emulator.remainder();
        assert!((v + 0.125).abs() < 1e-6);
    }

    #[test]
    fn test_mixed_signs_do_not_drift() {
        let config = ScrollConfig::default();
        let mut emulator = ScrollEmulator::new();
        let inputs = [3i16, -5, 7, 1, -2, 9, -11, 4];
        let mut emitted = 0i32;
        let mut fed = 0.0f32;
        for &dx in inputs.iter().cycle().take(400) {
            let mut r = report(dx, 0);
            emulator.process(&mut r, &config);
            emitted += r.h as i32;
            fed += dx as f32 / config.divisor_h;
            assert!(emulator.remainder().0.abs() < 1.0);
        }
        let (h, _) = emulator.remainder();
        assert!((emitted as f32 + h - fed).abs() < 1e-3);
    }
}
