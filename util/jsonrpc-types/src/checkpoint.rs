use crate::{CheckpointSequenceNumber, EpochNumber, Timestamp, Uint64};
use serde::{Deserialize, Serialize};

/// Gas costs accumulated up to a checkpoint.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct GasCostSummary {
    /// Cost of computation.
    #[serde(default)]
    pub computation_cost: Uint64,
    /// Cost of new storage.
    #[serde(default)]
    pub storage_cost: Uint64,
    /// Refund for freed storage.
    #[serde(default)]
    pub storage_rebate: Uint64,
}

impl GasCostSummary {
    /// Computation plus storage cost minus the rebate, it may be negative.
    pub fn net_gas_usage(&self) -> i128 {
        i128::from(self.computation_cost.value()) + i128::from(self.storage_cost.value())
            - i128::from(self.storage_rebate.value())
    }
}

/// JSON view of a checkpoint.
///
/// ## Examples
///
/// ```
/// # serde_json::from_str::<explorer_jsonrpc_types::CheckpointView>(r#"
/// {
///   "epoch": "12",
///   "sequence_number": "55159",
///   "timestampMs": 1670000000000,
///   "network_total_transactions": "4803777",
///   "content_digest": "9b2c1f0a",
///   "signature": "0f3e44d1",
///   "transaction_count": "12"
/// }
/// # "#).unwrap();
/// ```
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct CheckpointView {
    /// The epoch which contains the checkpoint.
    pub epoch: EpochNumber,
    /// Consecutive checkpoint number.
    pub sequence_number: CheckpointSequenceNumber,
    /// When the checkpoint was created.
    #[serde(alias = "timestampMs")]
    pub timestamp_ms: Timestamp,
    /// Transactions executed on the network up to this checkpoint.
    #[serde(default)]
    pub network_total_transactions: Uint64,
    /// Digest of the checkpoint contents.
    pub content_digest: String,
    /// Aggregated validator signature.
    #[serde(default)]
    pub signature: String,
    /// Digest of the previous checkpoint, missing for the first one.
    #[serde(default)]
    pub previous_digest: Option<String>,
    /// Gas costs of the epoch up to this checkpoint.
    #[serde(default)]
    pub epoch_rolling_gas_cost_summary: GasCostSummary,
    /// Transactions in this checkpoint.
    #[serde(default)]
    pub transaction_count: Uint64,
    /// Digests of the transactions in this checkpoint.
    #[serde(default)]
    pub transactions: Vec<String>,
}
