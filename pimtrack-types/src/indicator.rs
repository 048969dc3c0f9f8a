//! Trackball indicator colours.
//!
//! Both halves share one fixed table, so an index is all that needs to travel
//! over the split link.
use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// Colour index shown on a trackball LED
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorIndex {
    /// Base layer: blue, white when mouse buttons are swapped
    Base = 0,
    /// Layer 1 or arrow emulation
    Red = 1,
    /// Layer 2 or scroll emulation
    Green = 2,
    /// Layer 3, the auto mouse layer
    Yellow = 3,
    /// Mouse mode: white, blue when mouse buttons are swapped
    Alternate = 4,
    Off = 5,
    /// Caps lock or caps word on the base layer
    Caps = 6,
}

impl IndicatorIndex {
    /// Indicator of a layer, `None` for layers without a colour
    pub fn for_layer(layer: u8) -> Option<Self> {
        Self::from_repr(layer)
    }

    /// Resolve the colour, `swapped` is the mouse button swap flag
    pub const fn rgbw(self, swapped: bool) -> Rgbw {
        match self {
            IndicatorIndex::Base if swapped => Rgbw::WHITE,
            IndicatorIndex::Base => Rgbw::BLUE,
            IndicatorIndex::Red => Rgbw::new(192, 0, 64, 0),
            IndicatorIndex::Green => Rgbw::new(0, 192, 128, 0),
            IndicatorIndex::Yellow => Rgbw::new(153, 113, 0, 0),
            IndicatorIndex::Alternate if swapped => Rgbw::BLUE,
            IndicatorIndex::Alternate => Rgbw::WHITE,
            IndicatorIndex::Off => Rgbw::OFF,
            IndicatorIndex::Caps => Rgbw::new(138, 43, 226, 0),
        }
    }
}

/// RGBW value written to the trackball LED
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgbw {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl Rgbw {
    pub const OFF: Self = Self::new(0, 0, 0, 0);
    pub const BLUE: Self = Self::new(0, 0, 255, 0);
    pub const WHITE: Self = Self::new(255, 255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }
}
