//! Decoder for the hex-framed, XTEA-encrypted wire packets emitted by GPS
//! tracking devices.
//!
//! A packet arrives as hex text framed by `c0`/`c2` marker bytes, carrying a
//! little-endian 64-bit IMEI followed by a byte-stuffed, block-encrypted
//! payload with a trailing checksum. [`DecodedPacket::decode`] runs the whole
//! pipeline and is the only entry point most callers need.

pub mod constants;
pub mod error;
pub mod frame;
pub mod packet;
pub mod stuffing;
pub mod xtea;


// Re-export the main entry points for easy access
pub use error::ProtocolError;
pub use packet::DecodedPacket;
