//! Error types for the fallible edges of the crate.
//!
//! Hashing and MAC computation are total over byte inputs and never fail.
//! Errors only arise when a MAC arrives in textual form and has to be decoded.

/// Error type for MAC decoding.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input was not valid hexadecimal.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The decoded value did not have the expected number of bytes.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
