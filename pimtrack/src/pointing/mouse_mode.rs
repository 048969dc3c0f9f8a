//! Mouse mode indicator, the alternative to the auto mouse layer.
//!
//! While the trackballs move both LEDs show the gesture mode of a trackball,
//! after an idle timeout the layer colour comes back.

use embassy_time::{Duration, Instant};
use pimtrack_types::indicator::IndicatorIndex;

use super::gesture::GestureMode;
use crate::config::MouseModeConfig;
use crate::host::{IndicatorLed, SyncTransport};
use crate::indicator::{ColorSync, SyncTarget};

/// Indicator of a gesture mode while the mouse is in use
pub fn mouse_indicator(mode: GestureMode) -> IndicatorIndex {
    match mode {
        GestureMode::Off | GestureMode::Pending => IndicatorIndex::Alternate,
        GestureMode::Arrow => IndicatorIndex::Red,
        GestureMode::Scroll => IndicatorIndex::Green,
    }
}

/// Colours used by mouse mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseColors {
    /// Shown on the central while the mouse is in use
    pub central: IndicatorIndex,
    /// Shown on the peripheral while the mouse is in use
    pub peripheral: IndicatorIndex,
    /// Restored on both halves after the timeout, `None` keeps the mouse colours
    pub resting: Option<IndicatorIndex>,
}

#[derive(Debug, Clone, Copy)]
pub struct MouseMode {
    active: bool,
    last_motion: Instant,
}

impl Default for MouseMode {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseMode {
    pub const fn new() -> Self {
        Self {
            active: false,
            last_motion: Instant::from_ticks(0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Leave mouse mode without restoring the colour, the caller takes over the LEDs
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Feed the combined motion of both halves
    pub fn update<L: IndicatorLed, S: SyncTransport>(
        &mut self,
        moving: bool,
        colors: MouseColors,
        now: Instant,
        sync: &mut ColorSync<L, S>,
        config: &MouseModeConfig,
        throttle: Duration,
    ) {
        let elapsed = now.saturating_duration_since(self.last_motion);
        if moving {
            // Colours are only pushed when entering mouse mode
            if !self.active {
                debug!("Enter mouse mode");
                sync.apply(colors.central);
                sync.sync(colors.peripheral, SyncTarget::Remote);
                self.active = true;
            }
            if elapsed > throttle {
                self.last_motion = now;
            }
        } else if self.active && elapsed > config.timeout {
            debug!("Leave mouse mode");
            self.active = false;
            if let Some(resting) = colors.resting {
                sync.sync(resting, SyncTarget::Both);
            }
        }
    }

    /// Keep mouse mode alive while mouse keys are used
    pub fn refresh(&mut self, now: Instant, throttle: Duration) {
        if self.active && now.saturating_duration_since(self.last_motion) > throttle {
            self.last_motion = now;
        }
    }
}
