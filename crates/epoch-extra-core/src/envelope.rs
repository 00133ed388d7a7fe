//! The compressed envelope around the payload, and where it sits inside
//! the header's extra-data field.
//!
//! Layout of extra-data: `vanity || gzip(canonical payload) || seal`. The
//! vanity and seal widths are consensus configuration owned by the caller;
//! they are threaded through [`HeaderLayout`] so the codec can be tested
//! against any header layout rather than one compiled-in constant pair.

use std::io::{Read, Write};

use flate2::bufread::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::canonical::{canonical_bytes, from_canonical_bytes};
use crate::error::ExtraError;
use crate::extra::HeaderExtra;

/// Chunk size for draining the decompression stream.
const READ_CHUNK: usize = 128;

/// Fixed boundary widths of the header extra-data field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Width of the leading vanity region.
    pub vanity_len: usize,

    /// Width of the trailing seal region.
    pub seal_len: usize,
}

impl HeaderLayout {
    /// Conventional vanity width: 32 bytes reserved for signer vanity.
    pub const DEFAULT_VANITY: usize = 32;

    /// Conventional seal width: 65-byte secp256k1 recoverable signature.
    pub const DEFAULT_SEAL: usize = 65;

    /// Create a layout with explicit boundary widths.
    pub const fn new(vanity_len: usize, seal_len: usize) -> Self {
        Self { vanity_len, seal_len }
    }

    /// Isolate the compressed payload between the vanity and seal regions.
    ///
    /// The returned slice may be empty. Fails with
    /// [`ExtraError::MissingVanity`] or [`ExtraError::MissingSignature`]
    /// when the blob cannot hold the respective boundary region.
    pub fn payload_slice<'a>(&self, extra: &'a [u8]) -> Result<&'a [u8], ExtraError> {
        if extra.len() < self.vanity_len {
            return Err(ExtraError::MissingVanity {
                len: extra.len(),
                vanity: self.vanity_len,
            });
        }
        if extra.len() < self.vanity_len + self.seal_len {
            return Err(ExtraError::MissingSignature {
                len: extra.len(),
                min: self.vanity_len + self.seal_len,
            });
        }
        Ok(&extra[self.vanity_len..extra.len() - self.seal_len])
    }
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VANITY, Self::DEFAULT_SEAL)
    }
}

/// Encode a payload into its on-wire form: canonical CBOR, gzip-compressed.
///
/// The compressor is finished before returning, so the output is always a
/// complete, decodable stream. Candidate lists can get long; compression is
/// what keeps them inside the header's limited extra-data space.
pub fn encode(extra: &HeaderExtra) -> Result<Vec<u8>, ExtraError> {
    let raw = canonical_bytes(extra);
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&raw)
        .map_err(|e| ExtraError::EnvelopeCorrupt(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| ExtraError::EnvelopeCorrupt(e.to_string()))
}

/// Decode a payload from its on-wire form.
///
/// Drains the gzip stream in bounded chunks until clean end-of-stream; any
/// framing or read failure is [`ExtraError::EnvelopeCorrupt`], and bytes
/// that decompress but do not parse are [`ExtraError::SchemaMismatch`].
/// The envelope must cover the whole input — bytes left over after the
/// stream's trailer are [`ExtraError::EnvelopeCorrupt`] too, so both sides
/// of the wire agree on exactly which blobs are acceptable.
pub fn decode(data: &[u8]) -> Result<HeaderExtra, ExtraError> {
    let mut decoder = GzDecoder::new(data);
    let mut raw = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        match decoder.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => raw.extend_from_slice(&chunk[..n]),
            Err(err) => return Err(ExtraError::EnvelopeCorrupt(err.to_string())),
        }
    }

    let rest = decoder.into_inner();
    if !rest.is_empty() {
        return Err(ExtraError::EnvelopeCorrupt(format!(
            "{} trailing bytes after compressed stream",
            rest.len()
        )));
    }
    from_canonical_bytes(&raw)
}

/// Extract and decode the payload from a full header extra-data blob.
pub fn decode_from_header(extra: &[u8], layout: &HeaderLayout) -> Result<HeaderExtra, ExtraError> {
    decode(layout.payload_slice(extra)?)
}
