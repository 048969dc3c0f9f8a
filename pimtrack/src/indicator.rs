//! Trackball indicator colour, kept in sync across both halves.
//!
//! The peripheral never derives its colour from local state. It shows
//! whatever index the central sent last, so both halves agree even though
//! only the central knows the layer stack and both trackball gestures.
//! Sync is best effort: after a lost message the peripheral stays stale until
//! the next colour change.

use pimtrack_types::indicator::IndicatorIndex;

use crate::config::SplitRole;
use crate::host::{IndicatorLed, SyncTransport};
use crate::split::LayerSyncMessage;

/// Which halves an indicator update reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncTarget {
    /// Only the other half, this half was already painted directly
    Remote,
    /// Only this half
    Local,
    Both,
}

pub struct ColorSync<L: IndicatorLed, S: SyncTransport> {
    led: L,
    transport: S,
    role: SplitRole,
    button_swap: bool,
    /// Index currently shown on this half
    current: Option<IndicatorIndex>,
}

impl<L: IndicatorLed, S: SyncTransport> ColorSync<L, S> {
    pub fn new(led: L, transport: S, role: SplitRole) -> Self {
        Self {
            led,
            transport,
            role,
            button_swap: false,
            current: None,
        }
    }

    pub fn is_central(&self) -> bool {
        self.role == SplitRole::Central
    }

    pub fn current(&self) -> Option<IndicatorIndex> {
        self.current
    }

    pub fn button_swap(&self) -> bool {
        self.button_swap
    }

    pub fn set_button_swap(&mut self, swap: bool) {
        self.button_swap = swap;
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    pub fn transport(&self) -> &S {
        &self.transport
    }

    /// Paint this half's LED
    pub fn apply(&mut self, index: IndicatorIndex) {
        self.led.set_rgbw(index.rgbw(self.button_swap));
        self.current = Some(index);
    }

    /// Update the indicator of the `target` halves.
    ///
    /// Only the central sends, and it sends on every call without comparing
    /// against the last index.
    pub fn sync(&mut self, index: IndicatorIndex, target: SyncTarget) {
        if self.is_central() && target != SyncTarget::Local {
            self.transport.send(LayerSyncMessage::Indicator(index as u8).to_bytes());
        }
        if target != SyncTarget::Remote {
            self.apply(index);
        }
    }

    /// Tell the peripheral the current swap flag
    pub fn broadcast_button_swap(&mut self) {
        if self.is_central() {
            self.transport
                .send(LayerSyncMessage::ButtonSwap(self.button_swap).to_bytes());
        }
    }

    /// Handle a message from the central, `highest_layer` is this half's top layer.
    ///
    /// Malformed payloads and unknown indices are dropped.
    pub fn on_sync_message(&mut self, bytes: &[u8], highest_layer: u8) {
        match LayerSyncMessage::from_bytes(bytes) {
            Ok(LayerSyncMessage::Indicator(value)) => match IndicatorIndex::from_repr(value) {
                Some(index) => self.apply(index),
                None => debug!("Ignore indicator index {}", value),
            },
            Ok(LayerSyncMessage::ButtonSwap(swap)) => {
                self.button_swap = swap;
                match IndicatorIndex::for_layer(highest_layer) {
                    Some(index) => self.apply(index),
                    None => debug!("No indicator for layer {}", highest_layer),
                }
            }
            Err(e) => debug!("Drop sync message: {:?}", e),
        }
    }
}
