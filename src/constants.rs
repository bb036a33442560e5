// Wire protocol constants for the tracker packet format

/// Start-of-packet marker byte
pub const FRAME_START: u8 = 0xC0;

/// End-of-packet marker byte
pub const FRAME_END: u8 = 0xC2;

/// Byte-stuffing escape byte
pub const ESCAPE: u8 = 0xC4;

/// Size of the little-endian device identifier field (8 bytes)
pub const IMEI_SIZE: usize = 8;

/// XTEA key size (128 bits)
pub const KEY_SIZE: usize = 16;

/// XTEA block size (64 bits)
pub const BLOCK_SIZE: usize = 8;

/// XTEA Feistel rounds
pub const XTEA_ROUNDS: u32 = 32;

/// Trailing checksum size in bytes (trimmed, never verified)
pub const CHECKSUM_SIZE: usize = 2;
