use bytes::{Buf, Bytes};
use tracing::debug;

use crate::constants::{FRAME_END, FRAME_START, IMEI_SIZE};
use crate::error::ProtocolError;

/// A packet with the envelope markers stripped and the identifier field
/// consumed, leaving the still-stuffed, still-encrypted payload bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFrame {
    /// Device hardware identifier (IMEI), read little-endian from the first
    /// 8 interior bytes.
    pub imei: u64,
    /// Everything after the identifier, exactly as it appeared on the wire.
    pub stuffed: Bytes,
}

impl RawFrame {
    /// Parse the wire hex text.
    ///
    /// The envelope markers are checked on the hex text itself, before any
    /// decoding, so an empty or unframed input is a framing failure rather
    /// than an encoding one. The interior is then hex-decoded and the
    /// identifier split off.
    pub fn parse(input: &str) -> Result<Self, ProtocolError> {
        let text = input.as_bytes();
        if text.len() < 4
            || !marker_matches(&text[..2], FRAME_START)
            || !marker_matches(&text[text.len() - 2..], FRAME_END)
        {
            return Err(ProtocolError::MissingFrameMarker);
        }

        let mut interior = Bytes::from(hex::decode(&text[2..text.len() - 2])?);
        if interior.len() < IMEI_SIZE {
            return Err(ProtocolError::InsufficientData {
                expected: IMEI_SIZE,
                actual: interior.len(),
            });
        }
        let imei = interior.get_u64_le();
        debug!("frame ok: imei={}, {} stuffed payload bytes", imei, interior.len());

        Ok(RawFrame {
            imei,
            stuffed: interior,
        })
    }
}

/// True if `pair` is the two-character hex spelling of `marker`, any case.
fn marker_matches(pair: &[u8], marker: u8) -> bool {
    let mut byte = [0u8; 1];
    hex::decode_to_slice(pair, &mut byte).is_ok() && byte[0] == marker
}
