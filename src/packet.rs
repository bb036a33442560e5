use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{BLOCK_SIZE, CHECKSUM_SIZE};
use crate::error::ProtocolError;
use crate::frame::RawFrame;
use crate::stuffing::destuff;
use crate::xtea::Xtea;

/// A fully decoded tracker packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedPacket {
    /// Device hardware identifier (IMEI).
    pub imei: u64,
    /// Decrypted payload as lowercase hex, trailing checksum removed.
    pub payload: String,
}

impl DecodedPacket {
    /// Decode one wire packet.
    ///
    /// `input` is the full packet as hex text, framed by the `c0`/`c2`
    /// markers. `crypto_key` is used byte-for-byte as the 128-bit XTEA key,
    /// not hex-decoded.
    ///
    /// The stages run strictly in order: envelope validation, hex decode,
    /// identifier extraction, destuffing, block decryption, checksum trim.
    /// The first violation aborts with the matching [`ProtocolError`]; no
    /// partial result is returned.
    pub fn decode(input: &str, crypto_key: &str) -> Result<Self, ProtocolError> {
        let frame = RawFrame::parse(input)?;
        let encrypted = destuff(&frame.stuffed);

        let cipher = Xtea::new(crypto_key.as_bytes())?;
        let mut cleartext = Vec::with_capacity(encrypted.len());
        // Each block decrypts standalone. A short final chunk means the
        // packet does not align to the cipher block size and is rejected.
        for block in encrypted.chunks(BLOCK_SIZE) {
            cleartext.extend_from_slice(&cipher.decrypt_block(block)?);
        }

        if cleartext.len() < CHECKSUM_SIZE {
            return Err(ProtocolError::ChecksumTooShort {
                actual: cleartext.len(),
            });
        }
        cleartext.truncate(cleartext.len() - CHECKSUM_SIZE);
        debug!(
            "decoded packet: imei={}, {} payload bytes",
            frame.imei,
            cleartext.len()
        );

        Ok(DecodedPacket {
            imei: frame.imei,
            payload: hex::encode(cleartext),
        })
    }
}

impl fmt::Display for DecodedPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "imei={} payload={}", self.imei, self.payload)
    }
}
