//! Arrow key emulation.
//!
//! Motion is low-pass filtered into a running average per axis. Every time an
//! average reaches the step threshold one arrow tap is sent and the step is
//! taken off the average, so the remainder carries over to the next tick.

use pimtrack_types::keycode::HidKeyCode;

use crate::config::ArrowConfig;
use crate::hid::PointingReport;
use crate::host::KeyTapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowEmulator {
    average_x: f32,
    average_y: f32,
}

impl ArrowEmulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Residual of both axes
    pub fn residual(&self) -> (f32, f32) {
        (self.average_x, self.average_y)
    }

    /// Turn the motion of `report` into arrow taps and clear the motion.
    ///
    /// Returns the number of taps sent.
    pub fn process<K: KeyTapper>(&mut self, report: &mut PointingReport, tapper: &mut K, config: &ArrowConfig) -> u16 {
        self.average_x = self.average_x * config.momentum + report.x as f32;
        self.average_y = self.average_y * config.momentum + report.y as f32;

        // All horizontal taps go out before the vertical ones
        let mut taps = drain_axis(&mut self.average_x, HidKeyCode::Right, HidKeyCode::Left, tapper, config.step);
        taps += drain_axis(&mut self.average_y, HidKeyCode::Down, HidKeyCode::Up, tapper, config.step);

        report.x = 0;
        report.y = 0;
        taps
    }
}

fn drain_axis<K: KeyTapper>(
    average: &mut f32,
    positive: HidKeyCode,
    negative: HidKeyCode,
    tapper: &mut K,
    step: f32,
) -> u16 {
    let mut taps = 0u16;
    while libm::fabsf(*average) >= step {
        if *average > 0.0 {
            tapper.tap(positive);
            *average -= step;
        } else {
            tapper.tap(negative);
            *average += step;
        }
        taps = taps.saturating_add(1);
    }
    taps
}

#[cfg(test)]
mod tests {
    use heapless::Vec;

    use super::*;

    #[derive(Default)]
    struct Taps(Vec<HidKeyCode, 64>);

    impl KeyTapper for Taps {
        fn tap(&mut self, key: HidKeyCode) {
            let _ = self.0.push(key);
        }
    }

    fn report(x: i16, y: i16) -> PointingReport {
        PointingReport {
            x,
            y,
            ..Default::default()
        }
    }

    #[test]
    fn test_below_step_emits_nothing() {
        let config = ArrowConfig::default();
        let mut emulator = ArrowEmulator::new();
        let mut taps = Taps::default();
        let mut r = report(5, -5);
        assert_eq!(emulator.process(&mut r, &mut taps, &config), 0);
        assert!(taps.0.is_empty());
        assert_eq!((r.x, r.y), (0, 0));
    }

    #[test]
    fn test_x_taps_before_y_taps() {
        let config = ArrowConfig::default();
        let mut emulator = ArrowEmulator::new();
        let mut taps = Taps::default();
        let mut r = report(-13, 12);
        assert_eq!(emulator.process(&mut r, &mut taps, &config), 4);
        assert_eq!(
            taps.0.as_slice(),
            &[HidKeyCode::Left, HidKeyCode::Left, HidKeyCode::Down, HidKeyCode::Down]
        );
        let (x, y) = emulator.residual();
        assert!((x + 1.0).abs() < 1e-5);
        assert!(y.abs() < 1e-5);
    }

    #[test]
    fn test_constant_step_taps_once_per_tick() {
        let config = ArrowConfig::default();
        let mut emulator = ArrowEmulator::new();
        let mut taps = Taps::default();
        for _ in 0..20 {
            let mut r = report(6, 0);
            assert_eq!(emulator.process(&mut r, &mut taps, &config), 1);
        }
        assert_eq!(taps.0.len(), 20);
        assert!(taps.0.iter().all(|k| *k == HidKeyCode::Right));
    }

    #[test]
    fn test_residual_stays_below_step() {
        let config = ArrowConfig::default();
        let mut emulator = ArrowEmulator::new();
        let mut taps = Taps::default();
        let inputs = [(3, 1), (40, -7), (-2, 90), (0, 0), (-127, -127), (1, 2), (5, 5)];
        for &(x, y) in inputs.iter().cycle().take(60) {
            taps.0.clear();
            let mut r = report(x, y);
            emulator.process(&mut r, &mut taps, &config);
            let (ax, ay) = emulator.residual();
            assert!(ax.abs() < config.step);
            assert!(ay.abs() < config.step);
            assert_eq!((r.x, r.y), (0, 0));
        }
    }

    #[test]
    fn test_remainder_decays() {
        let config = ArrowConfig::default();
        let mut emulator = ArrowEmulator::new();
        let mut taps = Taps::default();
        let mut r = report(5, 0);
        emulator.process(&mut r, &mut taps, &config);
        // 5 * 0.99 + 1 = 5.95 stays below the step
        let mut r = report(1, 0);
        emulator.process(&mut r, &mut taps, &config);
        assert!(taps.0.is_empty());
        let (x, _) = emulator.residual();
        assert!((x - 5.95).abs() < 1e-4);
    }
}
