use bytes::Buf;

use crate::constants::{BLOCK_SIZE, KEY_SIZE, XTEA_ROUNDS};
use crate::error::ProtocolError;

/// XTEA round constant.
const DELTA: u32 = 0x9E37_79B9;

/// XTEA cipher with the key split into four little-endian 32-bit words.
///
/// The tracker serializes key and block words little-endian, unlike the
/// big-endian convention of the published reference vectors. Blocks are
/// processed standalone: no chaining, no IV.
#[derive(Debug)]
pub struct Xtea {
    key: [u32; 4],
}

impl Xtea {
    /// Build a cipher from exactly 16 key bytes.
    pub fn new(key: &[u8]) -> Result<Self, ProtocolError> {
        if key.len() != KEY_SIZE {
            return Err(ProtocolError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: key.len(),
            });
        }
        let mut buf = key;
        Ok(Xtea {
            key: [
                buf.get_u32_le(),
                buf.get_u32_le(),
                buf.get_u32_le(),
                buf.get_u32_le(),
            ],
        })
    }

    /// Decrypt one 8-byte block, 32 rounds, all arithmetic wrapping.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<[u8; 8], ProtocolError> {
        let (mut v0, mut v1) = split_block(block)?;
        let k = &self.key;
        let mut sum = DELTA.wrapping_mul(XTEA_ROUNDS);
        for _ in 0..XTEA_ROUNDS {
            v1 = v1.wrapping_sub(mix(v0, sum.wrapping_add(k[((sum >> 11) & 3) as usize])));
            sum = sum.wrapping_sub(DELTA);
            v0 = v0.wrapping_sub(mix(v1, sum.wrapping_add(k[(sum & 3) as usize])));
        }
        Ok(join_block(v0, v1))
    }

    /// Encrypt one 8-byte block; the exact inverse of [`Self::decrypt_block`].
    pub fn encrypt_block(&self, block: &[u8]) -> Result<[u8; 8], ProtocolError> {
        let (mut v0, mut v1) = split_block(block)?;
        let k = &self.key;
        let mut sum = 0u32;
        for _ in 0..XTEA_ROUNDS {
            v0 = v0.wrapping_add(mix(v1, sum.wrapping_add(k[(sum & 3) as usize])));
            sum = sum.wrapping_add(DELTA);
            v1 = v1.wrapping_add(mix(v0, sum.wrapping_add(k[((sum >> 11) & 3) as usize])));
        }
        Ok(join_block(v0, v1))
    }
}

/// The XTEA mix function: `(((v << 4) ^ (v >> 5)) + v) ^ keyed_sum`.
fn mix(v: u32, keyed_sum: u32) -> u32 {
    (((v << 4) ^ (v >> 5)).wrapping_add(v)) ^ keyed_sum
}

fn split_block(block: &[u8]) -> Result<(u32, u32), ProtocolError> {
    if block.len() != BLOCK_SIZE {
        return Err(ProtocolError::InvalidBlockLength {
            expected: BLOCK_SIZE,
            actual: block.len(),
        });
    }
    let mut buf = block;
    Ok((buf.get_u32_le(), buf.get_u32_le()))
}

fn join_block(v0: u32, v1: u32) -> [u8; 8] {
    let mut out = [0u8; 8];
    out[..4].copy_from_slice(&v0.to_le_bytes());
    out[4..].copy_from_slice(&v1.to_le_bytes());
    out
}
