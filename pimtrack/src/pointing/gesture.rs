//! Trackball button gestures.
//!
//! Each trackball has a single button that selects between three behaviours,
//! told apart by press timing only:
//!
//! ```text
//!         press             press < window
//!   Off ────────► Pending ────────────────► Arrow
//!    ▲             │  ▲                       │
//!    │             │  └─ press >= window      │
//!    │             │     (restart window)     │
//!    │             │ no press for window      │
//!    │             ▼                          │
//!    ├── press ── Scroll                      │
//!    └──────────────────── press ─────────────┘
//! ```

use embassy_time::Instant;
use pimtrack_types::indicator::IndicatorIndex;

use crate::config::GestureConfig;

/// What a trackball's motion currently means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureMode {
    /// Plain cursor motion
    Off,
    /// First press seen, waiting for a second one
    Pending,
    /// Motion is turned into arrow taps
    Arrow,
    /// Motion is turned into scrolling
    Scroll,
}

impl GestureMode {
    /// Indicator confirming the mode to the user
    pub fn indicator(self) -> IndicatorIndex {
        match self {
            GestureMode::Off | GestureMode::Pending => IndicatorIndex::Base,
            GestureMode::Arrow => IndicatorIndex::Red,
            GestureMode::Scroll => IndicatorIndex::Green,
        }
    }
}

/// Gesture state of one trackball button
#[derive(Debug, Clone, Copy)]
pub struct GestureState {
    mode: GestureMode,
    last_press: Instant,
    button_was_pressed: bool,
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureState {
    pub const fn new() -> Self {
        Self {
            mode: GestureMode::Off,
            last_press: Instant::from_ticks(0),
            button_was_pressed: false,
        }
    }

    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Force a mode from outside the classifier, used by the hold-for-arrow key
    pub fn force(&mut self, mode: GestureMode) {
        self.mode = mode;
    }

    /// Run one classification step.
    ///
    /// Returns the new mode when this step changed it.
    pub fn classify(&mut self, pressed: bool, now: Instant, config: &GestureConfig) -> Option<GestureMode> {
        let press_edge = pressed && !self.button_was_pressed;
        self.button_was_pressed = pressed;

        let elapsed = now.saturating_duration_since(self.last_press);
        let next = match self.mode {
            GestureMode::Off if press_edge => {
                self.last_press = now;
                GestureMode::Pending
            }
            GestureMode::Pending if press_edge => {
                if elapsed < config.double_press_window {
                    GestureMode::Arrow
                } else {
                    // Too late for a double press, start over
                    self.last_press = now;
                    GestureMode::Pending
                }
            }
            GestureMode::Pending if elapsed >= config.double_press_window => GestureMode::Scroll,
            GestureMode::Arrow | GestureMode::Scroll if press_edge => GestureMode::Off,
            mode => mode,
        };

        if next != self.mode {
            debug!("Trackball gesture {:?} -> {:?}", self.mode, next);
            self.mode = next;
            Some(next)
        } else {
            None
        }
    }
}
