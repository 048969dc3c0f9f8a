//! Keymap actions handled by the pointing pipeline.
//!
//! The firmware binds these to keys and forwards every press and release to
//! [`PointingPipeline::process_action`].

use embassy_time::{Duration, Instant};
use pimtrack_types::indicator::IndicatorIndex;
use pimtrack_types::keycode::HidKeyCode;

use crate::host::{IndicatorLed, LayerState, SyncTransport};
use crate::indicator::SyncTarget;
use crate::pipeline::PointingPipeline;
use crate::pointing::Hand;
use crate::pointing::gesture::GestureMode;

/// State deciding which key a [`PointingAction::MouseKey`] sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouseKeyGate {
    /// Mouse mode indicator is active
    MouseMode,
    /// Auto mouse layer is active
    AutoLayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointingAction {
    /// Swap the base and mouse layer colours, on both halves
    ToggleButtonSwap,
    /// Switch between the auto mouse layer and the mouse mode indicator
    ToggleAutoLayer,
    /// Halve the growth factor of the scalers
    GrowthDown,
    /// Double the growth factor of the scalers
    GrowthUp,
    /// Arrow emulation on one trackball while held
    HoldArrow(Hand),
    /// Sends `mouse` while `gate` is active, `normal` otherwise
    MouseKey {
        normal: HidKeyCode,
        mouse: HidKeyCode,
        gate: MouseKeyGate,
    },
}

impl<L: IndicatorLed, S: SyncTransport> PointingPipeline<L, S> {
    /// Process a press or release of a pointing action.
    ///
    /// Returns the key the firmware should register on press, or unregister
    /// on release. A dual key releases the key it resolved to on press.
    pub fn process_action<Ls: LayerState>(
        &mut self,
        action: PointingAction,
        pressed: bool,
        now: Instant,
        layers: &mut Ls,
    ) -> Option<HidKeyCode> {
        match action {
            PointingAction::ToggleButtonSwap => {
                if pressed {
                    let swap = !self.sync.button_swap();
                    info!("Button swap: {}", swap);
                    self.sync.set_button_swap(swap);
                    self.drop_jump_layers(layers);
                    self.sync.broadcast_button_swap();
                    self.sync.sync(IndicatorIndex::Base, SyncTarget::Both);
                }
                None
            }
            PointingAction::ToggleAutoLayer => {
                if pressed {
                    self.auto_layer_enabled = !self.auto_layer_enabled;
                    info!("Auto mouse layer enabled: {}", self.auto_layer_enabled);
                    self.drop_jump_layers(layers);
                    self.sync.sync(IndicatorIndex::Yellow, SyncTarget::Both);
                }
                None
            }
            PointingAction::GrowthDown => {
                if pressed {
                    self.growth_factor /= 2.0;
                    debug!("Growth factor: {}", self.growth_factor);
                }
                None
            }
            PointingAction::GrowthUp => {
                if pressed {
                    self.growth_factor *= 2.0;
                    debug!("Growth factor: {}", self.growth_factor);
                }
                None
            }
            PointingAction::HoldArrow(hand) => {
                let mode = if pressed { GestureMode::Arrow } else { GestureMode::Off };
                self.trackball_mut(hand).gesture.force(mode);
                None
            }
            PointingAction::MouseKey { normal, mouse, gate } => {
                if pressed {
                    Some(self.press_mouse_key(action, normal, mouse, gate, now))
                } else {
                    Some(self.release_mouse_key(action, normal))
                }
            }
        }
    }

    fn press_mouse_key(
        &mut self,
        action: PointingAction,
        normal: HidKeyCode,
        mouse: HidKeyCode,
        gate: MouseKeyGate,
        now: Instant,
    ) -> HidKeyCode {
        let gate_active = match gate {
            MouseKeyGate::MouseMode => self.mouse_mode.is_active(),
            MouseKeyGate::AutoLayer => self.auto_layer.is_active(),
        };
        let key = if gate_active {
            // Using the mouse keys counts as mouse activity
            let throttle = self.config.timer_throttle;
            self.mouse_mode.refresh(now, throttle);
            self.auto_layer.refresh(now, self.config.auto_layer.key_delay, throttle);
            mouse
        } else {
            normal
        };
        if self.held_keys.push((action, key)).is_err() {
            warn!("Held dual keys full, {:?} releases as its normal key", key);
        }
        key
    }

    fn release_mouse_key(&mut self, action: PointingAction, normal: HidKeyCode) -> HidKeyCode {
        match self.held_keys.iter().position(|(held, _)| *held == action) {
            Some(i) => self.held_keys.swap_remove(i).1,
            None => normal,
        }
    }

    /// A regular key was pressed, arrow keys keep the auto mouse layer alive
    pub fn note_key_press(&mut self, key: HidKeyCode, now: Instant) {
        if key.is_arrow() {
            self.auto_layer
                .refresh(now, Duration::from_ticks(0), self.config.timer_throttle);
        }
    }

    /// Leave any layer the layer-jump keys switched on
    fn drop_jump_layers<Ls: LayerState>(&mut self, layers: &mut Ls) {
        for layer in self.config.jump_layers {
            layers.layer_off(layer);
        }
        if self.config.jump_layers.contains(&self.config.auto_layer.layer) {
            self.auto_layer.release();
        }
    }
}
