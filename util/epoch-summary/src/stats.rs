use explorer_jsonrpc_types::EpochView;
use std::fmt;
use thousands::Separable;

use crate::{format_amount, format_signed_amount, storage_revenue};

const MISSING: &str = "--";

/// The detail of one epoch: activity and rewards.
#[derive(Clone, Debug, PartialEq)]
pub struct EpochStats {
    pub epoch: u64,
    pub transactions: u64,
    /// Storage size in GB.
    pub storage_size: f64,
    /// Gas figures are missing while the epoch is in progress.
    pub gas_revenue: Option<u128>,
    pub gas_storage_revenue: Option<u128>,
    pub stake_rewards: Option<u128>,
    /// Net storage fund flow.
    pub storage_fund_revenue: i128,
    pub total_rewards: u128,
    pub stake_subsidies: u128,
    pub storage_fund_earnings: u128,
}

impl From<&EpochView> for EpochStats {
    fn from(epoch: &EpochView) -> Self {
        let gas = epoch.gas_cost_summary.as_ref();
        EpochStats {
            epoch: epoch.number(),
            transactions: epoch.transaction_count.value(),
            storage_size: epoch.storage_size,
            gas_revenue: gas.map(|gas| gas.gas_revenue.value()),
            gas_storage_revenue: gas.map(|gas| gas.storage_revenue.value()),
            stake_rewards: gas.map(|gas| gas.stake_rewards.value()),
            storage_fund_revenue: storage_revenue(epoch),
            total_rewards: epoch.total_rewards.value(),
            stake_subsidies: epoch.stake_subsidies.value(),
            storage_fund_earnings: epoch.storage_fund_earnings.value(),
        }
    }
}

fn optional_amount(amount: Option<u128>) -> String {
    amount.map(format_amount).unwrap_or_else(|| MISSING.to_owned())
}

impl EpochStats {
    /// Labelled activity figures.
    pub fn activity(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Transactions", self.transactions.separate_with_commas()),
            ("Storage Size", format!("{:.2} GB", self.storage_size)),
            ("Gas Revenue", optional_amount(self.gas_revenue)),
            ("Storage Revenue", optional_amount(self.gas_storage_revenue)),
            ("Storage Fund Revenue", format_signed_amount(self.storage_fund_revenue)),
        ]
    }

    /// Labelled reward figures.
    pub fn rewards(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total Rewards", format_amount(self.total_rewards)),
            ("Stake Rewards", optional_amount(self.stake_rewards)),
            ("Stake Subsidies", format_amount(self.stake_subsidies)),
            ("Storage Fund Earnings", format_amount(self.storage_fund_earnings)),
        ]
    }
}

fn write_section(
    f: &mut fmt::Formatter,
    title: &str,
    items: &[(&'static str, String)],
) -> fmt::Result {
    let width = items.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    writeln!(f, "{title}")?;
    for (label, value) in items {
        writeln!(f, "  {label:<width$}  {value}")?;
    }
    Ok(())
}

impl fmt::Display for EpochStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Epoch {}", self.epoch)?;
        writeln!(f)?;
        write_section(f, "Activity", &self.activity())?;
        writeln!(f)?;
        write_section(f, "Rewards", &self.rewards())
    }
}
