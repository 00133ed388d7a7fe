//! HeaderExtra: the decoded contents of the header's extra-data payload.
//!
//! One value per block, carried between the vanity prefix and the seal
//! suffix of the header extra-data field. Immutable once decoded; callers
//! compose a fresh value instead of mutating one in place.

use serde::{Deserialize, Serialize};

use crate::config::ChainConfig;
use crate::root::Root;
use crate::types::Address;

/// Per-block consensus state recorded in the header extra-data payload.
///
/// The four address lists are conceptually sets, but their order is the
/// deterministic construction order of the consensus algorithm and is part
/// of the value: two payloads with the same membership in a different order
/// are *not* equal. Duplicate-freedom is enforced upstream by the
/// [`address_set`](crate::address_set) helpers; this model trusts its inputs.
///
/// `PartialEq` is intentionally not derived — all comparisons go through
/// [`HeaderExtra::equal`] so the divergence semantics live in one place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeaderExtra {
    /// Digest summaries of the consensus state tables.
    pub root: Root,

    /// Current epoch number, non-decreasing across blocks.
    pub epoch: u64,

    /// Block number at which the current epoch began.
    pub epoch_block: u64,

    /// Candidates registered in this block.
    pub current_block_candidates: Vec<Address>,

    /// Candidates kicked out in this block.
    pub current_block_kick_out_candidates: Vec<Address>,

    /// Candidates that cancelled their registration in this block.
    pub current_block_cancel_candidates: Vec<Address>,

    /// Validator set active for the current epoch.
    pub current_epoch_validators: Vec<Address>,

    /// Every consensus config revision in effect so far, oldest first.
    pub chain_config: Vec<ChainConfig>,
}

impl HeaderExtra {
    /// Deep, order-sensitive comparison against another payload.
    ///
    /// Short-circuits left to right: root, epoch counters, config entries
    /// (each via its own [`ChainConfig::equal`] contract), then the four
    /// address lists element-wise in order. Used to detect divergence
    /// between two nodes' independently computed state for the same block.
    pub fn equal(&self, other: &HeaderExtra) -> bool {
        if self.root != other.root {
            return false;
        }
        if self.epoch != other.epoch {
            return false;
        }
        if self.epoch_block != other.epoch_block {
            return false;
        }

        if self.chain_config.len() != other.chain_config.len() {
            return false;
        }
        for (config, theirs) in self.chain_config.iter().zip(&other.chain_config) {
            if !config.equal(theirs) {
                return false;
            }
        }

        same_sequence(&self.current_block_candidates, &other.current_block_candidates)
            && same_sequence(
                &self.current_block_kick_out_candidates,
                &other.current_block_kick_out_candidates,
            )
            && same_sequence(
                &self.current_block_cancel_candidates,
                &other.current_block_cancel_candidates,
            )
            && same_sequence(&self.current_epoch_validators, &other.current_epoch_validators)
    }
}

/// Element-wise, order-sensitive address list comparison.
fn same_sequence(ours: &[Address], theirs: &[Address]) -> bool {
    if ours.len() != theirs.len() {
        return false;
    }
    ours.iter().zip(theirs).all(|(a, b)| a == b)
}
