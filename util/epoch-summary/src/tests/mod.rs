mod rows;
mod timer;

use explorer_jsonrpc_types::{CheckpointSet, EpochGasSummary, EpochView};

fn finished_epoch() -> EpochView {
    EpochView {
        epoch: 4u64.into(),
        transaction_count: 4_803_777u64.into(),
        checkpoint_set: Some(CheckpointSet(80u64.into(), 99u64.into())),
        start_timestamp: Some(1_670_000_000_000u64.into()),
        end_timestamp: Some(1_670_086_400_000u64.into()),
        storage_size: 512.5,
        total_rewards: 9_000u128.into(),
        total_stake_rewards: 1_234_567u128.into(),
        stake_subsidies: 300u128.into(),
        storage_fund_earnings: 42u128.into(),
        storage_fund_inflows: 1_000u128.into(),
        storage_fund_outflows: 2_500u128.into(),
        gas_cost_summary: Some(EpochGasSummary {
            gas_revenue: 7_000u128.into(),
            total_revenue: 8_000u128.into(),
            storage_revenue: 1_000u128.into(),
            stake_rewards: 6_000u128.into(),
        }),
    }
}
