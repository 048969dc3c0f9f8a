//! Indicator sync messages between the two halves.
//!
//! The central is the only half that sees both trackballs and the layer
//! stack, so it decides every colour and pushes it to the peripheral as a
//! 2-byte message `[type, value]`:
//!
//! | type | value                          |
//! | ---- | ------------------------------ |
//! | 1    | indicator index 0..=6          |
//! | 2    | mouse button swap flag, 0 or 1 |

use crate::channel::SYNC_MESSAGE_CHANNEL;
use crate::host::SyncTransport;

/// Size of an encoded sync message
pub const SYNC_MESSAGE_SIZE: usize = 2;

const TYPE_INDICATOR: u8 = 1;
const TYPE_BUTTON_SWAP: u8 = 2;

/// Message sent from the central to the peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerSyncMessage {
    /// Show this indicator index
    Indicator(u8),
    /// New mouse button swap flag, the peripheral recomputes its colour
    ButtonSwap(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncMessageError {
    /// Fewer than 2 bytes received
    TooShort(usize),
    UnknownType(u8),
}

impl LayerSyncMessage {
    pub fn to_bytes(self) -> [u8; SYNC_MESSAGE_SIZE] {
        match self {
            LayerSyncMessage::Indicator(index) => [TYPE_INDICATOR, index],
            LayerSyncMessage::ButtonSwap(swap) => [TYPE_BUTTON_SWAP, swap as u8],
        }
    }

    /// Decode a received payload, trailing bytes are ignored
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SyncMessageError> {
        match bytes {
            [TYPE_INDICATOR, index, ..] => Ok(LayerSyncMessage::Indicator(*index)),
            [TYPE_BUTTON_SWAP, swap, ..] => Ok(LayerSyncMessage::ButtonSwap(*swap != 0)),
            [typ, _, ..] => Err(SyncMessageError::UnknownType(*typ)),
            _ => Err(SyncMessageError::TooShort(bytes.len())),
        }
    }
}

/// [`SyncTransport`] publishing to [`SYNC_MESSAGE_CHANNEL`], drained by the split link task.
///
/// A full channel drops the message.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChannelSyncTransport;

impl SyncTransport for ChannelSyncTransport {
    fn send(&mut self, message: [u8; SYNC_MESSAGE_SIZE]) {
        if SYNC_MESSAGE_CHANNEL.try_send(message).is_err() {
            error!("Send sync message error, channel is full");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        assert_eq!(LayerSyncMessage::Indicator(6).to_bytes(), [1, 6]);
        assert_eq!(LayerSyncMessage::ButtonSwap(true).to_bytes(), [2, 1]);
        assert_eq!(LayerSyncMessage::ButtonSwap(false).to_bytes(), [2, 0]);
    }

    #[test]
    fn test_decode() {
        assert_eq!(LayerSyncMessage::from_bytes(&[1, 3]), Ok(LayerSyncMessage::Indicator(3)));
        assert_eq!(LayerSyncMessage::from_bytes(&[2, 7]), Ok(LayerSyncMessage::ButtonSwap(true)));
        assert_eq!(LayerSyncMessage::from_bytes(&[2, 0, 9]), Ok(LayerSyncMessage::ButtonSwap(false)));
        assert_eq!(LayerSyncMessage::from_bytes(&[1]), Err(SyncMessageError::TooShort(1)));
        assert_eq!(LayerSyncMessage::from_bytes(&[]), Err(SyncMessageError::TooShort(0)));
        assert_eq!(LayerSyncMessage::from_bytes(&[9, 1]), Err(SyncMessageError::UnknownType(9)));
    }

    #[test]
    fn test_channel_transport_drops_when_full() {
        SYNC_MESSAGE_CHANNEL.clear();
        let mut transport = ChannelSyncTransport;
        for i in 0..crate::SYNC_CHANNEL_SIZE + 2 {
            transport.send([1, i as u8]);
        }
        assert_eq!(SYNC_MESSAGE_CHANNEL.len(), crate::SYNC_CHANNEL_SIZE);
        assert_eq!(SYNC_MESSAGE_CHANNEL.try_receive(), Ok([1, 0]));
        SYNC_MESSAGE_CHANNEL.clear();
    }
}
