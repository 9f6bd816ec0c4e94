use crate::{Amount, CheckpointSequenceNumber, EpochNumber, Timestamp, Uint64};
use serde::{Deserialize, Serialize};

/// The first and the last checkpoint sequence numbers of an epoch.
///
/// It is a two elements array in JSON.
#[derive(Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct CheckpointSet(pub CheckpointSequenceNumber, pub CheckpointSequenceNumber);

impl CheckpointSet {
    /// The first checkpoint of the epoch.
    pub fn first(&self) -> u64 {
        self.0.value()
    }

    /// The last checkpoint of the epoch.
    pub fn last(&self) -> u64 {
        self.1.value()
    }
}

/// Gas income of an epoch.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct EpochGasSummary {
    /// Gas paid for computation.
    #[serde(default, alias = "gasRevenue")]
    pub gas_revenue: Amount,
    /// All gas income.
    #[serde(default, alias = "totalRevenue")]
    pub total_revenue: Amount,
    /// Gas paid for storage.
    #[serde(default, alias = "storageRevenue")]
    pub storage_revenue: Amount,
    /// Rewards paid to stakers.
    #[serde(default, alias = "stakeRewards")]
    pub stake_rewards: Amount,
}

/// JSON view of an epoch.
///
/// Every field but `epoch` may be missing and defaults to zero or `None`.
///
/// ## Examples
///
/// ```
/// # let epoch = serde_json::from_str::<explorer_jsonrpc_types::EpochView>(r#"
/// {
///   "epoch": 5,
///   "transaction_count": "4803777",
///   "checkpoint_set": [55159, 29804],
///   "startTimestamp": 1670000000000,
///   "endTimestamp": "1670086400000",
///   "storage_size": 512.25
/// }
/// # "#).unwrap();
/// # assert_eq!(epoch.start_timestamp_ms(), Some(1_670_000_000_000));
/// ```
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Debug)]
pub struct EpochView {
    /// Consecutive epoch number starting from 0.
    pub epoch: EpochNumber,
    /// Transactions executed in the epoch.
    #[serde(default, alias = "transactionCount")]
    pub transaction_count: Uint64,
    /// The checkpoints of the epoch.
    #[serde(default, alias = "checkpointSet")]
    pub checkpoint_set: Option<CheckpointSet>,
    /// When the epoch started.
    #[serde(default, alias = "startTimestamp")]
    pub start_timestamp: Option<Timestamp>,
    /// When the epoch ends or ended.
    #[serde(default, alias = "endTimestamp")]
    pub end_timestamp: Option<Timestamp>,
    /// Storage used at the end of the epoch, in GB.
    #[serde(default, alias = "storageSize")]
    pub storage_size: f64,
    /// All rewards distributed in the epoch.
    #[serde(default, alias = "totalRewards")]
    pub total_rewards: Amount,
    /// Rewards distributed to stakers.
    #[serde(default, alias = "totalStakeRewards")]
    pub total_stake_rewards: Amount,
    /// Subsidies added to the stake rewards.
    #[serde(default, alias = "stakeSubsidies")]
    pub stake_subsidies: Amount,
    /// Earnings of the storage fund.
    #[serde(default, alias = "storageFundEarnings")]
    pub storage_fund_earnings: Amount,
    /// Coins which flowed into the storage fund.
    #[serde(default, alias = "storageFundInflows")]
    pub storage_fund_inflows: Amount,
    /// Coins which flowed out of the storage fund.
    #[serde(default, alias = "storageFundOutflows")]
    pub storage_fund_outflows: Amount,
    /// Gas income, missing for epochs still in progress.
    #[serde(default, alias = "gasCostSummary")]
    pub gas_cost_summary: Option<EpochGasSummary>,
}

impl EpochView {
    /// The epoch number.
    pub fn number(&self) -> u64 {
        self.epoch.value()
    }

    /// The start timestamp in millis, if known.
    pub fn start_timestamp_ms(&self) -> Option<u64> {
        self.start_timestamp.map(Timestamp::value)
    }

    /// The end timestamp in millis, if known.
    pub fn end_timestamp_ms(&self) -> Option<u64> {
        self.end_timestamp.map(Timestamp::value)
    }
}
