//! Keyboard LED state sent by the host.
use bitfield_struct::bitfield;

/// Output report of the boot keyboard, one bit per LED (HID 1.11, appendix B)
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct LedIndicator {
    pub num_lock: bool,
    /// The only LED the trackball indicator reacts to
    pub caps_lock: bool,
    pub scroll_lock: bool,
    pub compose: bool,
    pub kana: bool,
    #[bits(3)]
    _reserved: u8,
}

impl LedIndicator {
    pub const CAPS_LOCK: Self = Self::new().with_caps_lock(true);
}
