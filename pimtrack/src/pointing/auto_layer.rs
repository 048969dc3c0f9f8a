//! Auto mouse layer: a dedicated layer is on while the trackballs move.

use embassy_time::{Duration, Instant};

use crate::config::AutoLayerConfig;
use crate::host::LayerState;

#[derive(Debug, Clone, Copy)]
pub struct AutoLayer {
    active: bool,
    /// Last refresh of the idle timer, may lie in the future after a delayed refresh
    last_refresh: Instant,
}

impl Default for AutoLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoLayer {
    pub const fn new() -> Self {
        Self {
            active: false,
            last_refresh: Instant::from_ticks(0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one half's motion.
    ///
    /// Returns `true` when this call switched the layer on.
    pub fn update<L: LayerState>(
        &mut self,
        moving: bool,
        now: Instant,
        layers: &mut L,
        config: &AutoLayerConfig,
        throttle: Duration,
    ) -> bool {
        let elapsed = now.saturating_duration_since(self.last_refresh);
        if moving {
            let activated = !self.active;
            if activated {
                info!("Auto mouse layer {} on", config.layer);
                layers.layer_on(config.layer);
                self.active = true;
            }
            if elapsed > throttle {
                self.last_refresh = now;
            }
            activated
        } else {
            if elapsed > config.timeout && self.active {
                info!("Auto mouse layer {} off", config.layer);
                layers.layer_off(config.layer);
                self.active = false;
            }
            false
        }
    }

    /// Forget the layer after it was switched off from outside
    pub fn release(&mut self) {
        self.active = false;
    }

    /// Keep the layer alive while mouse keys on it are used.
    ///
    /// `delay` postpones the timeout beyond the usual idle time.
    pub fn refresh(&mut self, now: Instant, delay: Duration, throttle: Duration) {
        if self.active && now.saturating_duration_since(self.last_refresh) > throttle {
            self.last_refresh = now + delay;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Layers {
        on: [bool; 8],
    }

    impl LayerState for Layers {
        fn layer_on(&mut self, layer: u8) {
            self.on[layer as usize] = true;
        }
        fn layer_off(&mut self, layer: u8) {
            self.on[layer as usize] = false;
        }
        fn highest_layer(&self) -> u8 {
            self.on.iter().rposition(|on| *on).unwrap_or(0) as u8
        }
    }

    const THROTTLE: Duration = Duration::from_millis(500);

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_motion_turns_layer_on_then_idle_turns_it_off() {
        let config = AutoLayerConfig::default();
        let mut auto = AutoLayer::new();
        let mut layers = Layers::default();

        assert!(auto.update(true, at(1000), &mut layers, &config, THROTTLE));
        assert!(layers.on[3]);
        assert!(!auto.update(true, at(1010), &mut layers, &config, THROTTLE));

        auto.update(false, at(2000), &mut layers, &config, THROTTLE);
        assert!(auto.is_active());
        auto.update(false, at(2500), &mut layers, &config, THROTTLE);
        assert!(auto.is_active());
        auto.update(false, at(2501), &mut layers, &config, THROTTLE);
        assert!(!auto.is_active());
        assert!(!layers.on[3]);
    }

    #[test]
    fn test_timer_refresh_is_throttled() {
        let config = AutoLayerConfig::default();
        let mut auto = AutoLayer::new();
        let mut layers = Layers::default();

        auto.update(true, at(1000), &mut layers, &config, THROTTLE);
        // Within the throttle window the timer keeps its value from 1000
        auto.update(true, at(1400), &mut layers, &config, THROTTLE);
        auto.update(false, at(2501), &mut layers, &config, THROTTLE);
        assert!(!auto.is_active());

        auto.update(true, at(3000), &mut layers, &config, THROTTLE);
        // 3501 refreshes the timer
        auto.update(true, at(3501), &mut layers, &config, THROTTLE);
        auto.update(false, at(4600), &mut layers, &config, THROTTLE);
        assert!(auto.is_active());
        auto.update(false, at(5002), &mut layers, &config, THROTTLE);
        assert!(!auto.is_active());
    }

    #[test]
    fn test_key_refresh_with_delay() {
        let config = AutoLayerConfig::default();
        let mut auto = AutoLayer::new();
        let mut layers = Layers::default();

        auto.update(true, at(1000), &mut layers, &config, THROTTLE);
        auto.refresh(at(1600), Duration::from_millis(1000), THROTTLE);
        auto.update(false, at(3500), &mut layers, &config, THROTTLE);
        assert!(auto.is_active());
        auto.update(false, at(4101), &mut layers, &config, THROTTLE);
        assert!(!auto.is_active());
    }

    #[test]
    fn test_refresh_ignored_while_inactive() {
        let mut auto = AutoLayer::new();
        auto.refresh(at(1600), Duration::from_millis(1000), THROTTLE);
        assert!(!auto.is_active());
    }
}
