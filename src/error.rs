use thiserror::Error;

/// The primary error type for the `trackwire` library.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Missing start/end packet marker")]
    MissingFrameMarker,

    #[error("Malformed hex text: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Insufficient data: expected at least {expected} bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Invalid cipher block length: expected {expected} bytes, got {actual}")]
    InvalidBlockLength { expected: usize, actual: usize },

    #[error("Decrypted output too short to carry the checksum: {actual} bytes")]
    ChecksumTooShort { actual: usize },
}
