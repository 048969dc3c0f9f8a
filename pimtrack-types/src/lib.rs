//! # pimtrack types
//!
//! Plain data types shared by the pointing pipeline and the firmware that
//! hosts it.
//!
//! - [`keycode`] - HID keycodes emitted or resolved by the pipeline
//! - [`mouse_button`] - Raw trackball button bitmask
//! - [`led_indicator`] - Host keyboard LED state (caps lock)
//! - [`indicator`] - Trackball indicator colour indices

#![no_std]

pub mod indicator;
pub mod keycode;
pub mod led_indicator;
pub mod mouse_button;
