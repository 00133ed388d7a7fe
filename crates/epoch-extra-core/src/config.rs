//! Per-chain consensus parameter snapshots carried inside the payload.
//!
//! The payload records every config revision that has taken effect so far;
//! the snapshot schema itself belongs to the ledger layer, this crate only
//! needs each entry to be serializable and comparable.

use serde::{Deserialize, Serialize};

/// One revision of the chain's consensus parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Target seconds between blocks.
    pub period: u64,

    /// Number of blocks per epoch.
    pub epoch_interval: u64,

    /// Maximum size of the active validator set.
    pub max_validator_count: u64,

    /// Minimum stake required to register as a candidate, in base units.
    pub min_candidate_stake: u128,

    /// Block number at which this revision took effect.
    pub effective_block: u64,
}

impl ChainConfig {
    /// Comparison contract used by the payload equality engine.
    ///
    /// Exact match on every field. Kept as an explicit method rather than
    /// relying on `PartialEq` at the call site so the engine treats config
    /// entries as an opaque comparable capability.
    pub fn equal(&self, other: &ChainConfig) -> bool {
        self.period == other.period
            && self.epoch_interval == other.epoch_interval
            && self.max_validator_count == other.max_validator_count
            && self.min_candidate_stake == other.min_candidate_stake
            && self.effective_block == other.effective_block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_matches_on_identical_fields() {
        let a = ChainConfig {
            period: 3,
            epoch_interval: 200,
            max_validator_count: 21,
            min_candidate_stake: 1_000_000_000_000_000_000,
            effective_block: 0,
        };
        let b = a.clone();
        assert!(a.equal(&b));
    }

    #[test]
    fn test_equal_rejects_any_field_change() {
        let base = ChainConfig {
            period: 3,
            epoch_interval: 200,
            max_validator_count: 21,
            min_candidate_stake: 10,
            effective_block: 100,
        };

        let mut changed = base.clone();
        changed.min_candidate_stake = 11;
        assert!(!base.equal(&changed));

        let mut changed = base.clone();
        changed.effective_block = 101;
        assert!(!base.equal(&changed));
    }
}
