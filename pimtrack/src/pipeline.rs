//! The per-tick pointing pipeline.
//!
//! [`PointingPipeline`] owns all state that outlives a tick: gesture states,
//! scaler and emulator accumulators of both trackballs, the user toggles, the
//! auto mouse layer and the indicator sync. The firmware calls
//! [`PointingPipeline::process`] once per polling tick with the raw samples of
//! both halves and sends the returned report to the host.
//!
//! Only the central half runs the pipeline. On the peripheral the samples are
//! combined unchanged, the central receives them over the split link and
//! makes every decision.

use embassy_time::Instant;
use heapless::Vec;
use pimtrack_types::indicator::IndicatorIndex;
use pimtrack_types::keycode::HidKeyCode;
use pimtrack_types::led_indicator::LedIndicator;
use pimtrack_types::mouse_button::MouseButtons;

use crate::action::PointingAction;
use crate::config::{ArrowConfig, PipelineConfig, ScalerConfig, ScrollConfig};
use crate::hid::PointingReport;
use crate::host::{IndicatorLed, KeyTapper, KeyboardHost, LayerState, SyncTransport};
use crate::indicator::{ColorSync, SyncTarget};
use crate::pointing::auto_layer::AutoLayer;
use crate::pointing::gesture::GestureMode;
use crate::pointing::mouse_mode::{MouseColors, MouseMode, mouse_indicator};
use crate::pointing::{Emulation, Hand, MotionSample, TrackballState, resolve_emulation};

pub struct PointingPipeline<L: IndicatorLed, S: SyncTransport> {
    pub(crate) config: PipelineConfig,
    pub(crate) sync: ColorSync<L, S>,
    left: TrackballState,
    right: TrackballState,
    /// Runtime growth factor of the scalers
    pub(crate) growth_factor: f32,
    /// Auto mouse layer toggle, mouse mode indicator is used when it's off
    pub(crate) auto_layer_enabled: bool,
    pub(crate) auto_layer: AutoLayer,
    pub(crate) mouse_mode: MouseMode,
    /// Host caps lock state
    caps_lock: bool,
    /// Time caps lock was switched on, cleared once it's released
    caps_since: Option<Instant>,
    /// Dual keys currently held, with the key they resolved to on press
    pub(crate) held_keys: Vec<(PointingAction, HidKeyCode), HELD_KEYS_SIZE>,
}

/// Maximum number of dual keys held at the same time
pub const HELD_KEYS_SIZE: usize = 8;

impl<L: IndicatorLed, S: SyncTransport> PointingPipeline<L, S> {
    pub fn new(config: PipelineConfig, led: L, transport: S) -> Self {
        Self {
            sync: ColorSync::new(led, transport, config.role),
            left: TrackballState::new(&config.scaler),
            right: TrackballState::new(&config.scaler),
            growth_factor: config.scaler.growth_factor,
            auto_layer_enabled: config.auto_layer.enabled,
            auto_layer: AutoLayer::new(),
            mouse_mode: MouseMode::new(),
            caps_lock: false,
            caps_since: None,
            held_keys: Vec::new(),
            config,
        }
    }

    /// Set the startup colour, the central also aligns the peripheral's swap flag
    pub fn init(&mut self) {
        info!("Pointing pipeline init, central: {}", self.sync.is_central());
        self.sync.apply(IndicatorIndex::Base);
        self.sync.broadcast_button_swap();
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn color_sync(&self) -> &ColorSync<L, S> {
        &self.sync
    }

    pub fn trackball(&self, hand: Hand) -> &TrackballState {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }

    pub(crate) fn trackball_mut(&mut self, hand: Hand) -> &mut TrackballState {
        match hand {
            Hand::Left => &mut self.left,
            Hand::Right => &mut self.right,
        }
    }

    pub fn gesture_mode(&self, hand: Hand) -> GestureMode {
        self.trackball(hand).gesture.mode()
    }

    pub fn growth_factor(&self) -> f32 {
        self.growth_factor
    }

    pub fn auto_layer_enabled(&self) -> bool {
        self.auto_layer_enabled
    }

    pub fn auto_layer_active(&self) -> bool {
        self.auto_layer.is_active()
    }

    pub fn mouse_mode_active(&self) -> bool {
        self.mouse_mode.is_active()
    }

    pub fn caps_lock(&self) -> bool {
        self.caps_lock
    }

    /// Run one polling tick and return the combined report for the host
    pub fn process<H: KeyboardHost>(
        &mut self,
        left: MotionSample,
        right: MotionSample,
        now: Instant,
        host: &mut H,
    ) -> PointingReport {
        let mut left_report = PointingReport::from(left);
        let mut right_report = PointingReport::from(right);
        if !self.sync.is_central() {
            return PointingReport::combine(left_report, right_report);
        }

        // Trackball buttons are gesture inputs
        for (state, report) in [(&mut self.left, &left_report), (&mut self.right, &right_report)] {
            if let Some(mode) = state
                .gesture
                .classify(report.buttons.button1(), now, &self.config.gesture)
            {
                self.sync.sync(mode.indicator(), SyncTarget::Both);
            }
        }

        if self.auto_layer_enabled {
            for report in [&left_report, &right_report] {
                let activated = self.auto_layer.update(
                    report.has_motion(),
                    now,
                    host,
                    &self.config.auto_layer,
                    self.config.timer_throttle,
                );
                if activated {
                    self.mouse_mode.deactivate();
                }
            }
        } else {
            let moving = PointingReport::combine(left_report, right_report).has_motion();
            let colors = self.mouse_colors(host.highest_layer());
            self.mouse_mode.update(
                moving,
                colors,
                now,
                &mut self.sync,
                &self.config.mouse_mode,
                self.config.timer_throttle,
            );
        }

        let highest_layer = host.highest_layer();
        let tuning = Tuning {
            arrow: &self.config.arrow,
            scroll: &self.config.scroll,
            scaler: &self.config.scaler,
            growth_factor: self.growth_factor,
        };
        shape(&mut self.left, &mut left_report, highest_layer, &tuning, host);
        shape(&mut self.right, &mut right_report, highest_layer, &tuning, host);

        PointingReport::combine(left_report, right_report)
    }

    /// Colours of mouse mode.
    ///
    /// Each half's LED shows the gesture of the trackball on the other hand.
    fn mouse_colors(&self, highest_layer: u8) -> MouseColors {
        let central_hand = self.config.central_hand;
        MouseColors {
            central: mouse_indicator(self.gesture_mode(central_hand.opposite())),
            peripheral: mouse_indicator(self.gesture_mode(central_hand)),
            resting: self.resting_indicator(highest_layer),
        }
    }

    /// Indicator when no pointing activity overrides it
    fn resting_indicator(&self, highest_layer: u8) -> Option<IndicatorIndex> {
        if self.caps_lock {
            Some(IndicatorIndex::Caps)
        } else {
            IndicatorIndex::for_layer(highest_layer)
        }
    }

    /// The highest active layer changed
    pub fn on_layer_change(&mut self, highest_layer: u8) {
        if !self.sync.is_central() {
            return;
        }
        // Caps lock only tints the base layer
        let index = if highest_layer == 0 && self.caps_lock {
            Some(IndicatorIndex::Caps)
        } else {
            IndicatorIndex::for_layer(highest_layer)
        };
        // Layers without a colour leave both LEDs as they are
        if let Some(index) = index {
            self.sync.sync(index, SyncTarget::Both);
        }
    }

    /// The host's LED state changed, only caps lock is shown
    pub fn on_led_indicator<Ls: LayerState>(&mut self, leds: LedIndicator, now: Instant, layers: &Ls) {
        if !self.sync.is_central() {
            return;
        }
        let caps = leds.caps_lock();
        if caps != self.caps_lock {
            info!("Caps lock: {}", caps);
            // The auto release counts from the moment caps lock turned on
            self.caps_since = if caps { Some(now) } else { None };
        }
        self.caps_lock = caps;
        self.caps_indicator(caps, layers.highest_layer());
    }

    /// Caps word was switched on or off
    pub fn on_caps_word<Ls: LayerState>(&mut self, active: bool, layers: &Ls) {
        if !self.sync.is_central() {
            return;
        }
        self.caps_indicator(active, layers.highest_layer());
    }

    fn caps_indicator(&mut self, active: bool, highest_layer: u8) {
        if highest_layer != 0 {
            return;
        }
        let index = if active {
            IndicatorIndex::Caps
        } else {
            IndicatorIndex::Base
        };
        self.sync.sync(index, SyncTarget::Both);
    }

    /// Housekeeping between ticks, releases caps lock after its timeout
    pub fn poll<K: KeyTapper>(&mut self, now: Instant, tapper: &mut K) {
        if !self.sync.is_central() {
            return;
        }
        if let (Some(since), Some(limit)) = (self.caps_since, self.config.caps.auto_release) {
            if now.saturating_duration_since(since) > limit {
                info!("Release caps lock after {}ms", limit.as_millis());
                tapper.tap(HidKeyCode::CapsLock);
                self.caps_since = None;
            }
        }
    }

    /// Handle a sync payload received from the central
    pub fn on_sync_message<Ls: LayerState>(&mut self, bytes: &[u8], layers: &Ls) {
        self.sync.on_sync_message(bytes, layers.highest_layer());
    }
}

/// Tuning shared by both trackballs during a tick
struct Tuning<'a> {
    arrow: &'a ArrowConfig,
    scroll: &'a ScrollConfig,
    scaler: &'a ScalerConfig,
    growth_factor: f32,
}

/// Emulate, scale and strip the buttons of one trackball's report
fn shape<K: KeyTapper>(
    state: &mut TrackballState,
    report: &mut PointingReport,
    highest_layer: u8,
    tuning: &Tuning,
    tapper: &mut K,
) {
    match resolve_emulation(state.gesture.mode(), highest_layer) {
        Some(Emulation::Arrow) => {
            state.arrow.process(report, tapper, tuning.arrow);
        }
        Some(Emulation::Scroll) => state.scroll.process(report, tuning.scroll),
        None => {}
    }

    let (x, y) = state
        .scaler
        .scale(report.x, report.y, tuning.growth_factor, tuning.scaler);
    report.x = x;
    report.y = y;

    // Buttons were consumed as gestures, the host never sees them as clicks
    report.buttons = MouseButtons::NONE;
}
