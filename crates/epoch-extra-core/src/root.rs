//! Root: digest summaries of the consensus state tables as of one block.
//!
//! Two nodes that computed the same block state must arrive at identical
//! roots; the divergence report renders whatever disagrees.

use serde::{Deserialize, Serialize};

use crate::types::Digest;

/// Banner line emitted above a logged divergence report.
pub const DIVERGENCE_BANNER: &str = "######### Root Hash Difference #########";

/// Digest bundle over the four consensus state tables.
///
/// Equality is exact field-wise match; a `Root` is immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Root {
    /// Digest of the epoch table.
    pub epoch_hash: Digest,

    /// Digest of the candidate table.
    pub candidate_hash: Digest,

    /// Digest of the mint-count table.
    pub mint_cnt_hash: Digest,

    /// Digest of the config table.
    pub config_hash: Digest,
}

impl Root {
    /// Render the difference between two roots for the given block.
    ///
    /// The first line is always `BlockNumber: <number>`; each mismatching
    /// field adds a `"<Field>: <ours> ---- <theirs>"` line and matching
    /// fields are omitted. Intended for operator diagnostics, not parsing.
    pub fn divergence_report(&self, number: u64, other: &Root) -> String {
        let mut lines = vec![format!("BlockNumber: {}", number)];
        if self.epoch_hash != other.epoch_hash {
            lines.push(format!(
                "EpochHash: {} ---- {}",
                self.epoch_hash, other.epoch_hash
            ));
        }
        if self.candidate_hash != other.candidate_hash {
            lines.push(format!(
                "CandidateHash: {} ---- {}",
                self.candidate_hash, other.candidate_hash
            ));
        }
        if self.mint_cnt_hash != other.mint_cnt_hash {
            lines.push(format!(
                "MintCntHash: {} ---- {}",
                self.mint_cnt_hash, other.mint_cnt_hash
            ));
        }
        if self.config_hash != other.config_hash {
            lines.push(format!(
                "ConfigHash: {} ---- {}",
                self.config_hash, other.config_hash
            ));
        }
        lines.join("\n")
    }

    /// Log the divergence report at WARN under the fixed banner line.
    pub fn log_divergence(&self, number: u64, other: &Root) {
        tracing::warn!(
            block = number,
            "{}\n{}",
            DIVERGENCE_BANNER,
            self.divergence_report(number, other)
        );
    }
}
