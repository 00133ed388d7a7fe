//! Error types for the header extra-data core.

use thiserror::Error;

/// Failures surfaced while locating or decoding the extra-data payload.
///
/// None of these are transient: a caller that hits any of them must reject
/// the block (or the peer payload) outright. Nothing is retried here.
#[derive(Debug, Error)]
pub enum ExtraError {
    /// Extra-data is shorter than the fixed vanity prefix.
    #[error("extra-data too short for vanity prefix: {len} < {vanity}")]
    MissingVanity { len: usize, vanity: usize },

    /// Extra-data is shorter than vanity prefix plus seal suffix combined.
    #[error("extra-data too short for seal suffix: {len} < {min}")]
    MissingSignature { len: usize, min: usize },

    /// Compression framing is invalid or the stream ended abnormally.
    #[error("compressed envelope corrupt: {0}")]
    EnvelopeCorrupt(String),

    /// Decompressed bytes do not parse as the current payload schema.
    #[error("payload schema mismatch: {0}")]
    SchemaMismatch(String),
}
