//! Raw button bitmask reported by a trackball.
//!
//! Only button 1 is used as the gesture input; the rest are carried through
//! untouched until the pipeline clears the mask.
use core::ops::BitOr;

use bitfield_struct::bitfield;

#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct MouseButtons {
    /// Left, the trackball's own button
    pub button1: bool,
    /// Right
    pub button2: bool,
    /// Middle
    pub button3: bool,
    /// Back, forward and vendor buttons
    #[bits(5)]
    pub extra: u8,
}

/// Buttons of both halves are merged into one report
impl BitOr for MouseButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl MouseButtons {
    pub const NONE: Self = Self::new();
    pub const BUTTON1: Self = Self::new().with_button1(true);
    pub const BUTTON2: Self = Self::new().with_button2(true);
    pub const BUTTON3: Self = Self::new().with_button3(true);

    pub const fn is_empty(&self) -> bool {
        self.into_bits() == 0
    }
}
