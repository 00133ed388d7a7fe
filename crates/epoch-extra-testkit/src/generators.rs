//! Proptest generators for property-based testing.

use proptest::prelude::*;

use epoch_extra_core::{Address, ChainConfig, Digest, HeaderExtra, Root};

/// Generate a random address.
pub fn address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from_bytes)
}

/// Generate an address from a small alphabet, to force duplicates.
pub fn colliding_address() -> impl Strategy<Value = Address> {
    (0u8..6).prop_map(|b| Address::from_bytes([b; 20]))
}

/// Generate a random digest.
pub fn digest() -> impl Strategy<Value = Digest> {
    any::<[u8; 32]>().prop_map(Digest::from_bytes)
}

/// Generate a random root.
pub fn root() -> impl Strategy<Value = Root> {
    (digest(), digest(), digest(), digest()).prop_map(
        |(epoch_hash, candidate_hash, mint_cnt_hash, config_hash)| Root {
            epoch_hash,
            candidate_hash,
            mint_cnt_hash,
            config_hash,
        },
    )
}

/// Generate a chain config snapshot.
pub fn chain_config() -> impl Strategy<Value = ChainConfig> {
    (
        1u64..=30,
        1u64..=10_000,
        1u64..=200,
        any::<u128>(),
        any::<u64>(),
    )
        .prop_map(
            |(period, epoch_interval, max_validator_count, min_candidate_stake, effective_block)| {
                ChainConfig {
                    period,
                    epoch_interval,
                    max_validator_count,
                    min_candidate_stake,
                    effective_block,
                }
            },
        )
}

/// Generate an address list of up to `max_len` entries.
pub fn address_list(max_len: usize) -> impl Strategy<Value = Vec<Address>> {
    prop::collection::vec(address(), 0..=max_len)
}

/// Generate a whole payload, lists bounded to keep cases fast.
pub fn header_extra() -> impl Strategy<Value = HeaderExtra> {
    (
        root(),
        any::<u64>(),
        any::<u64>(),
        address_list(16),
        address_list(8),
        (
            address_list(8),
            address_list(16),
            prop::collection::vec(chain_config(), 0..4),
        ),
    )
        .prop_map(
            |(root, epoch, epoch_block, candidates, kick_out, (cancel, validators, configs))| {
                HeaderExtra {
                    root,
                    epoch,
                    epoch_block,
                    current_block_candidates: candidates,
                    current_block_kick_out_candidates: kick_out,
                    current_block_cancel_candidates: cancel,
                    current_epoch_validators: validators,
                    chain_config: configs,
                }
            },
        )
}
