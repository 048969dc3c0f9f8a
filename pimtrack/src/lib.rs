//! Dual trackball pointing pipeline for a split keyboard.
//!
//! Every polling tick the central half hands the raw reports of both
//! trackballs to [`pipeline::PointingPipeline::process`], which classifies the
//! trackball buttons into gestures, switches the auto mouse layer, emulates
//! arrow keys or scrolling, applies adaptive scaling, and keeps the indicator
//! LEDs of both halves in sync.
//!
//! The surrounding firmware is reached only through the traits in [`host`].

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;

pub mod action;
pub mod channel;
pub mod config;
pub mod hid;
pub mod host;
pub mod indicator;
pub mod pipeline;
pub mod pointing;
pub mod processor;
pub mod split;

pub use pimtrack_types as types;

pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// Capacity of the motion frame channel
pub const MOTION_CHANNEL_SIZE: usize = 4;
/// Capacity of the outgoing report channel
pub const REPORT_CHANNEL_SIZE: usize = 8;
/// Capacity of the keyboard event channel
pub const EVENT_CHANNEL_SIZE: usize = 8;
/// Capacity of the resolved key channel
pub const KEY_CHANNEL_SIZE: usize = 4;
/// Capacity of the outgoing split sync channel
pub const SYNC_CHANNEL_SIZE: usize = 4;
