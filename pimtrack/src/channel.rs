//! Channels between the pointing task and the rest of the firmware.

use embassy_sync::channel::Channel;

use crate::hid::PointingReport;
use crate::processor::{KeyOutput, KeyboardEvent, MotionFrame};
use crate::split::SYNC_MESSAGE_SIZE;
use crate::{
    EVENT_CHANNEL_SIZE, KEY_CHANNEL_SIZE, MOTION_CHANNEL_SIZE, REPORT_CHANNEL_SIZE, RawMutex, SYNC_CHANNEL_SIZE,
};

/// Raw trackball reports of both halves, one frame per polling tick
pub static MOTION_CHANNEL: Channel<RawMutex, MotionFrame, MOTION_CHANNEL_SIZE> = Channel::new();
/// Combined pointing reports to send to the host
pub static POINTING_REPORT_CHANNEL: Channel<RawMutex, PointingReport, REPORT_CHANNEL_SIZE> = Channel::new();
/// Encoded sync messages for the peripheral
pub static SYNC_MESSAGE_CHANNEL: Channel<RawMutex, [u8; SYNC_MESSAGE_SIZE], SYNC_CHANNEL_SIZE> = Channel::new();
/// Keyboard state changes and pointing actions for the pointing task
pub static KEYBOARD_EVENT_CHANNEL: Channel<RawMutex, KeyboardEvent, EVENT_CHANNEL_SIZE> = Channel::new();
/// Keys resolved by pointing actions, for the firmware to register
pub static KEY_CHANNEL: Channel<RawMutex, KeyOutput, KEY_CHANNEL_SIZE> = Channel::new();
