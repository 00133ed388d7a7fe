//! Test fixtures and helpers.
//!
//! Deterministic payloads and digests for scenario tests.

use rand::RngCore;

use epoch_extra_core::{Address, ChainConfig, Digest, HeaderExtra, Root};

/// An address whose 20 bytes all equal `byte`.
pub fn addr(byte: u8) -> Address {
    Address::from_bytes([byte; 20])
}

/// A deterministic digest derived from a human-readable label.
///
/// Stands in for the table digests the state-computation step would
/// produce; same label, same digest, on every platform.
pub fn digest_of(label: &str) -> Digest {
    Digest::from_bytes(*blake3::hash(label.as_bytes()).as_bytes())
}

/// A random address, for tests that only need uniqueness.
pub fn random_addr() -> Address {
    let mut bytes = [0u8; 20];
    rand::thread_rng().fill_bytes(&mut bytes);
    Address::from_bytes(bytes)
}

/// A root with all four digests derived from `label`.
pub fn root_of(label: &str) -> Root {
    Root {
        epoch_hash: digest_of(&format!("{label}/epoch")),
        candidate_hash: digest_of(&format!("{label}/candidate")),
        mint_cnt_hash: digest_of(&format!("{label}/mint-cnt")),
        config_hash: digest_of(&format!("{label}/config")),
    }
}

/// The genesis config revision used across fixture payloads.
pub fn genesis_config() -> ChainConfig {
    ChainConfig {
        period: 3,
        epoch_interval: 200,
        max_validator_count: 21,
        min_candidate_stake: 1_000_000_000_000_000_000,
        effective_block: 0,
    }
}

/// A representative mid-chain payload.
pub fn sample_extra() -> HeaderExtra {
    HeaderExtra {
        root: root_of("block-1437"),
        epoch: 7,
        epoch_block: 1400,
        current_block_candidates: vec![addr(0x11), addr(0x12)],
        current_block_kick_out_candidates: vec![addr(0x13)],
        current_block_cancel_candidates: vec![],
        current_epoch_validators: vec![addr(0x11), addr(0x21), addr(0x22)],
        chain_config: vec![genesis_config()],
    }
}
