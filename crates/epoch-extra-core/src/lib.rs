//! # Epoch Extra Core
//!
//! The structured payload a proof-of-stake header carries in its extra-data
//! field, between the fixed vanity prefix and the trailing seal: epoch
//! counters, candidate and validator lists, kick-out and cancellation
//! events, and digest summaries of the consensus state tables.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over byte slices and value types, and is safe to call
//! concurrently on distinct values.
//!
//! ## Key Types
//!
//! - [`HeaderExtra`] - The decoded payload, one per block
//! - [`Root`] - Digest bundle over the consensus state tables
//! - [`HeaderLayout`] - Injected vanity/seal boundary widths
//! - [`ExtraError`] - The four-failure error taxonomy
//!
//! ## Determinism
//!
//! The on-wire form is canonical CBOR inside a gzip envelope; encoding is
//! byte-identical across implementations so that payloads round-trip
//! exactly. [`HeaderExtra::equal`] is strictly order-sensitive: an address
//! reordering with identical membership is a divergence, because list order
//! reflects the deterministic construction order of the consensus layer.

pub mod address_set;
pub mod canonical;
pub mod config;
pub mod envelope;
pub mod error;
pub mod extra;
pub mod root;
pub mod types;

pub use canonical::{canonical_bytes, from_canonical_bytes};
pub use config::ChainConfig;
pub use envelope::{decode, decode_from_header, encode, HeaderLayout};
pub use error::ExtraError;
pub use extra::HeaderExtra;
pub use root::{Root, DIVERGENCE_BANNER};
pub use types::{Address, Digest};
