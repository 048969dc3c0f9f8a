//! Seams to the surrounding keyboard firmware.
//!
//! The pipeline never owns the layer stack, the key reporter, the LED driver or
//! the split transport. It reaches them through these traits, which the
//! firmware implements and passes in on every call.

use pimtrack_types::indicator::Rgbw;
use pimtrack_types::keycode::HidKeyCode;

/// The firmware's layer stack
pub trait LayerState {
    fn layer_on(&mut self, layer: u8);
    fn layer_off(&mut self, layer: u8);
    /// The highest active layer, which wins key resolution
    fn highest_layer(&self) -> u8;
}

/// Sends discrete key taps to the host
pub trait KeyTapper {
    /// Press and release `key` immediately
    fn tap(&mut self, key: HidKeyCode);
}

/// Everything the pipeline needs from the keyboard during a tick
pub trait KeyboardHost: LayerState + KeyTapper {}

impl<T: LayerState + KeyTapper> KeyboardHost for T {}

/// The RGBW LED inside this half's trackball
pub trait IndicatorLed {
    fn set_rgbw(&mut self, color: Rgbw);
}

/// Send-only channel to the other half.
///
/// Delivery is best effort: there is no acknowledgement and no retry, a lost
/// message is corrected by the next state change.
pub trait SyncTransport {
    fn send(&mut self, message: [u8; 2]);
}
