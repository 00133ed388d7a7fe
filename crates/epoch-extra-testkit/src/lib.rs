//! # Epoch Extra Testkit
//!
//! Testing utilities for the epoch extra-data payload.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Generators**: Proptest strategies for addresses, digests, roots,
//!   config snapshots, and whole payloads
//! - **Fixtures**: Deterministic helper values for scenario tests
//!
//! The law suite for the core (round-trip, boundary, equality, and
//! set-hygiene properties) lives under this crate's `tests/` directory so
//! it can lean on the generators without a dev-dependency cycle.
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use epoch_extra_testkit::generators::header_extra;
//!
//! proptest! {
//!     #[test]
//!     fn roundtrip(extra in header_extra()) {
//!         let wire = epoch_extra_core::encode(&extra).unwrap();
//!         prop_assert!(epoch_extra_core::decode(&wire).unwrap().equal(&extra));
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{addr, digest_of, genesis_config, random_addr, root_of, sample_extra};
pub use generators::{address, address_list, chain_config, colliding_address, digest, header_extra, root};
