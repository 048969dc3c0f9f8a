//! Motion shaping and mode state of one trackball.

pub mod arrow;
pub mod auto_layer;
pub mod gesture;
pub mod mouse_mode;
pub mod scaler;
pub mod scroll;

use pimtrack_types::mouse_button::MouseButtons;

use self::arrow::ArrowEmulator;
use self::gesture::{GestureMode, GestureState};
use self::scaler::Scaler;
use self::scroll::ScrollEmulator;
use crate::config::ScalerConfig;
use crate::hid::PointingReport;

/// Physical half of the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn opposite(self) -> Hand {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }
}

/// Raw sample of one trackball for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSample {
    pub dx: i16,
    pub dy: i16,
    pub buttons: MouseButtons,
}

impl MotionSample {
    pub const fn new(dx: i16, dy: i16, buttons: MouseButtons) -> Self {
        Self { dx, dy, buttons }
    }
}

impl From<MotionSample> for PointingReport {
    fn from(sample: MotionSample) -> Self {
        PointingReport {
            buttons: sample.buttons,
            x: sample.dx,
            y: sample.dy,
            h: 0,
            v: 0,
        }
    }
}

/// Emulation replacing the motion of a trackball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Emulation {
    Arrow,
    Scroll,
}

/// Layer forcing arrow emulation on both trackballs
pub const ARROW_LAYER: u8 = 1;
/// Layer forcing scroll emulation on both trackballs
pub const SCROLL_LAYER: u8 = 2;

/// Resolve the one emulation applied to a trackball this tick.
///
/// The trackball's own gesture wins, otherwise the highest layer decides.
pub fn resolve_emulation(mode: GestureMode, highest_layer: u8) -> Option<Emulation> {
    match (mode, highest_layer) {
        (GestureMode::Arrow, _) => Some(Emulation::Arrow),
        (GestureMode::Scroll, _) => Some(Emulation::Scroll),
        (_, ARROW_LAYER) => Some(Emulation::Arrow),
        (_, SCROLL_LAYER) => Some(Emulation::Scroll),
        _ => None,
    }
}

/// Everything kept between ticks for one trackball
#[derive(Debug, Clone, Copy)]
pub struct TrackballState {
    pub gesture: GestureState,
    pub scaler: Scaler,
    pub arrow: ArrowEmulator,
    pub scroll: ScrollEmulator,
}

impl TrackballState {
    pub fn new(config: &ScalerConfig) -> Self {
        Self {
            gesture: GestureState::new(),
            scaler: Scaler::new(config),
            arrow: ArrowEmulator::new(),
            scroll: ScrollEmulator::new(),
        }
    }
}
