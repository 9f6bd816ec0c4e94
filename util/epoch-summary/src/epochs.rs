use explorer_jsonrpc_types::EpochView;
use std::borrow::Cow;
use tabled::{Style, Table, Tabled};
use thousands::Separable;

use crate::{format_amount, format_signed_amount, format_timestamp};

/// Headers of the epochs table.
pub const EPOCH_COLUMNS: [&str; 6] = [
    "Time",
    "Epoch",
    "Transactions",
    "Checkpoint Set",
    "Stake Rewards",
    "Storage Revenue",
];

/// Net storage fund flow of an epoch, inflows minus outflows.
///
/// Differences beyond the `i128` range saturate.
pub fn storage_revenue(epoch: &EpochView) -> i128 {
    let inflows = epoch.storage_fund_inflows.value();
    let outflows = epoch.storage_fund_outflows.value();
    if inflows >= outflows {
        i128::try_from(inflows - outflows).unwrap_or(i128::MAX)
    } else {
        i128::try_from(outflows - inflows)
            .map(|deficit| -deficit)
            .unwrap_or(i128::MIN)
    }
}

/// One line of the epochs table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpochRow {
    /// Start of the epoch.
    pub time: Option<u64>,
    /// Epoch number.
    pub epoch: u64,
    /// Transactions in the epoch.
    pub transactions: u64,
    /// `"first - last"`, empty when unknown.
    pub checkpoint_set: String,
    /// Rewards paid to stakers.
    pub stake_rewards: u128,
    /// See [`storage_revenue`].
    pub storage_revenue: i128,
}

impl From<&EpochView> for EpochRow {
    fn from(epoch: &EpochView) -> Self {
        EpochRow {
            time: epoch.start_timestamp_ms(),
            epoch: epoch.number(),
            transactions: epoch.transaction_count.value(),
            checkpoint_set: epoch
                .checkpoint_set
                .map(|set| format!("{} - {}", set.first(), set.last()))
                .unwrap_or_default(),
            stake_rewards: epoch.total_stake_rewards.value(),
            storage_revenue: storage_revenue(epoch),
        }
    }
}

impl Tabled for EpochRow {
    const LENGTH: usize = EPOCH_COLUMNS.len();

    fn fields(&self) -> Vec<Cow<'_, str>> {
        [
            self.time.map(format_timestamp).unwrap_or_default(),
            self.epoch.to_string(),
            self.transactions.separate_with_commas(),
            self.checkpoint_set.clone(),
            format_amount(self.stake_rewards),
            format_signed_amount(self.storage_revenue),
        ]
        .map(Into::into)
        .to_vec()
    }

    fn headers() -> Vec<Cow<'static, str>> {
        EPOCH_COLUMNS.map(Into::into).to_vec()
    }
}

/// Builds the epochs table, in the given order.
pub fn epochs_table(epochs: &[EpochView]) -> Table {
    let mut table = Table::new(epochs.iter().map(EpochRow::from));
    table.with(Style::psql());
    table
}
