use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// Key codes defined in HID spec that the pointing pipeline taps or resolves.
///
/// Mouse button codes follow RMK's layout above the HID keyboard page.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// Reserved, no-key.
    No = 0x00,
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    Z = 0x1D,
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    /// `CapsLock`
    CapsLock = 0x39,
    PageUp = 0x4B,
    PageDown = 0x4E,
    /// `RightArrow`
    Right = 0x4F,
    /// `LeftArrow`
    Left = 0x50,
    /// `DownArrow`
    Down = 0x51,
    /// `UpArrow`
    Up = 0x52,
    /// Mouse Button 1(Left)
    MouseBtn1 = 0xD1,
    /// Mouse Button 2(Right)
    MouseBtn2 = 0xD2,
    /// Mouse Button 3(Middle)
    MouseBtn3 = 0xD3,
    /// Mouse Button 4(Back)
    MouseBtn4 = 0xD4,
    /// Mouse Button 5(Forward)
    MouseBtn5 = 0xD5,
}

impl HidKeyCode {
    /// Returns `true` if the keycode is one of the four arrow keys
    pub fn is_arrow(self) -> bool {
        HidKeyCode::Right <= self && self <= HidKeyCode::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_range() {
        assert!(HidKeyCode::Right.is_arrow());
        assert!(HidKeyCode::Up.is_arrow());
        assert!(!HidKeyCode::PageDown.is_arrow());
        assert!(!HidKeyCode::MouseBtn1.is_arrow());
    }

    #[test]
    fn test_from_repr() {
        assert_eq!(HidKeyCode::from_repr(0x4F), Some(HidKeyCode::Right));
        assert_eq!(HidKeyCode::from_repr(0xD1), Some(HidKeyCode::MouseBtn1));
        assert_eq!(HidKeyCode::from_repr(0x39), Some(HidKeyCode::CapsLock));
    }
}
