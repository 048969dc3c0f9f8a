//! Async task driving a [`PointingPipeline`] from the firmware's channels.
//!
//! ```text
//! MOTION_CHANNEL ──────────┐                ┌──► POINTING_REPORT_CHANNEL
//! KEYBOARD_EVENT_CHANNEL ──┼─► PointingTask ┼──► KEY_CHANNEL
//! poll timer ──────────────┘                └──► SYNC_MESSAGE_CHANNEL
//! ```
//!
//! Sync messages reach their channel through [`crate::split::ChannelSyncTransport`].

use core::cell::RefCell;

use embassy_futures::select::{Either3, select3};
use embassy_time::{Duration, Instant, Timer};
use pimtrack_types::keycode::HidKeyCode;
use pimtrack_types::led_indicator::LedIndicator;

use crate::action::PointingAction;
use crate::channel::{KEY_CHANNEL, KEYBOARD_EVENT_CHANNEL, MOTION_CHANNEL, POINTING_REPORT_CHANNEL};
use crate::hid::PointingReport;
use crate::host::{IndicatorLed, KeyboardHost, SyncTransport};
use crate::pipeline::PointingPipeline;
use crate::pointing::MotionSample;

/// Raw samples of both trackballs for one polling tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionFrame {
    pub left: MotionSample,
    pub right: MotionSample,
}

impl MotionFrame {
    pub const fn new(left: MotionSample, right: MotionSample) -> Self {
        Self { left, right }
    }
}

/// Keyboard state changes the pipeline reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyboardEvent {
    /// The highest active layer changed
    LayerChange(u8),
    /// The host sent new LED state
    LedIndicator(LedIndicator),
    CapsWord(bool),
    /// Payload received from the other half
    SyncMessage([u8; 2]),
    /// A regular key was pressed
    KeyPress(HidKeyCode),
    /// A key bound to a pointing action was pressed or released
    Action { action: PointingAction, pressed: bool },
}

/// Key the firmware should register or unregister
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyOutput {
    pub key: HidKeyCode,
    pub pressed: bool,
}

pub struct PointingTask<'a, L: IndicatorLed, S: SyncTransport, H: KeyboardHost> {
    pipeline: PointingPipeline<L, S>,
    host: &'a RefCell<H>,
    /// Interval of housekeeping between events
    poll_interval: Duration,
}

impl<'a, L: IndicatorLed, S: SyncTransport, H: KeyboardHost> PointingTask<'a, L, S, H> {
    pub fn new(pipeline: PointingPipeline<L, S>, host: &'a RefCell<H>, poll_interval: Duration) -> Self {
        Self {
            pipeline,
            host,
            poll_interval,
        }
    }

    pub fn pipeline(&self) -> &PointingPipeline<L, S> {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut PointingPipeline<L, S> {
        &mut self.pipeline
    }

    /// Run one pipeline tick
    pub fn process_frame(&mut self, frame: MotionFrame, now: Instant) -> PointingReport {
        let mut host = self.host.borrow_mut();
        self.pipeline.process(frame.left, frame.right, now, &mut *host)
    }

    /// Handle a keyboard event, returns the key to forward when there's one
    pub fn process_event(&mut self, event: KeyboardEvent, now: Instant) -> Option<KeyOutput> {
        let mut host = self.host.borrow_mut();
        match event {
            KeyboardEvent::LayerChange(layer) => self.pipeline.on_layer_change(layer),
            KeyboardEvent::LedIndicator(leds) => self.pipeline.on_led_indicator(leds, now, &*host),
            KeyboardEvent::CapsWord(active) => self.pipeline.on_caps_word(active, &*host),
            KeyboardEvent::SyncMessage(bytes) => self.pipeline.on_sync_message(&bytes, &*host),
            KeyboardEvent::KeyPress(key) => self.pipeline.note_key_press(key, now),
            KeyboardEvent::Action { action, pressed } => {
                return self
                    .pipeline
                    .process_action(action, pressed, now, &mut *host)
                    .map(|key| KeyOutput { key, pressed });
            }
        }
        None
    }

    /// Wait for the next input and handle it.
    ///
    /// Housekeeping runs after every input, the timer only covers idle periods
    /// so a steady stream of frames can't delay it.
    pub async fn step(&mut self) {
        match select3(
            MOTION_CHANNEL.receive(),
            KEYBOARD_EVENT_CHANNEL.receive(),
            Timer::after(self.poll_interval),
        )
        .await
        {
            Either3::First(frame) => {
                let report = self.process_frame(frame, Instant::now());
                POINTING_REPORT_CHANNEL.send(report).await;
            }
            Either3::Second(event) => {
                if let Some(output) = self.process_event(event, Instant::now()) {
                    KEY_CHANNEL.send(output).await;
                }
            }
            Either3::Third(_) => {}
        }
        self.poll(Instant::now());
    }

    /// Run the pipeline's housekeeping
    pub fn poll(&mut self, now: Instant) {
        let mut host = self.host.borrow_mut();
        self.pipeline.poll(now, &mut *host);
    }

    pub async fn run(&mut self) -> ! {
        self.pipeline.init();
        loop {
            self.step().await;
        }
    }
}
