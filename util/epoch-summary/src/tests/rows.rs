use explorer_jsonrpc_types::{CheckpointView, EpochView};
use pretty_assertions::assert_eq;
use tabled::Tabled;

use super::finished_epoch;
use crate::{
    CHECKPOINT_COLUMNS, CheckpointRow, EPOCH_COLUMNS, EpochRow, EpochStats, checkpoints_table,
    epochs_table, storage_revenue,
};

#[test]
fn epoch_row_from_view() {
    let row = EpochRow::from(&finished_epoch());

    assert_eq!(
        row,
        EpochRow {
            time: Some(1_670_000_000_000),
            epoch: 4,
            transactions: 4_803_777,
            checkpoint_set: "80 - 99".to_owned(),
            stake_rewards: 1_234_567,
            storage_revenue: -1_500,
        }
    );
    assert_eq!(
        row.fields(),
        vec![
            "2022-12-02 16:53:20 UTC",
            "4",
            "4,803,777",
            "80 - 99",
            "1,234,567 SUI",
            "-1,500 SUI",
        ]
    );
}

#[test]
fn epoch_row_with_missing_fields() {
    let epoch = EpochView {
        epoch: 7u64.into(),
        ..Default::default()
    };
    let row = EpochRow::from(&epoch);

    assert_eq!(row.time, None);
    assert_eq!(row.checkpoint_set, "");
    assert_eq!(row.fields()[0], "");
}

fn flows(inflows: u128, outflows: u128) -> EpochView {
    EpochView {
        storage_fund_inflows: inflows.into(),
        storage_fund_outflows: outflows.into(),
        ..Default::default()
    }
}

#[test]
fn storage_revenue_saturates() {
    assert_eq!(storage_revenue(&flows(u128::MAX, 0)), i128::MAX);
    assert_eq!(storage_revenue(&flows(0, u128::MAX)), i128::MIN);
    assert_eq!(storage_revenue(&flows(0, 1u128 << 127)), i128::MIN);
}

#[test]
fn storage_revenue_of_huge_flows() {
    assert_eq!(storage_revenue(&flows(u128::MAX, u128::MAX - 7)), 7);
    assert_eq!(storage_revenue(&flows(u128::MAX - 7, u128::MAX)), -7);
    assert_eq!(storage_revenue(&flows(u128::MAX, u128::MAX)), 0);
}

#[test]
fn epochs_table_keeps_order() {
    let newer = EpochView {
        epoch: 5u64.into(),
        ..Default::default()
    };
    let rendered = epochs_table(&[newer, finished_epoch()]).to_string();
    let lines = rendered.lines().collect::<Vec<_>>();

    assert_eq!(EpochRow::headers(), EPOCH_COLUMNS);
    assert_eq!(lines.len(), 4);
    assert!(EPOCH_COLUMNS.iter().all(|column| lines[0].contains(column)));
    assert!(lines[2].contains("| 5 "));
    assert!(lines[3].contains("| 4 "));
    assert!(lines[3].contains("-1,500 SUI"));
}

#[test]
fn checkpoint_rows() {
    let checkpoint = CheckpointView {
        epoch: 4u64.into(),
        sequence_number: 81u64.into(),
        timestamp_ms: 0u64.into(),
        content_digest: "9b2c".to_owned(),
        signature: "0f3e".to_owned(),
        transaction_count: 1_200u64.into(),
        ..Default::default()
    };

    assert_eq!(
        CheckpointRow::from(&checkpoint).fields(),
        vec!["1970-01-01 00:00:00 UTC", "81", "1,200", "9b2c", "0f3e"]
    );
    assert_eq!(CheckpointRow::headers(), CHECKPOINT_COLUMNS);

    let rendered = checkpoints_table(&[checkpoint]).to_string();
    assert_eq!(rendered.lines().count(), 3);
    assert!(rendered.lines().nth(2).is_some_and(|line| line.contains("9b2c")));
}

#[test]
fn stats_of_finished_epoch() {
    let stats = EpochStats::from(&finished_epoch());

    assert_eq!(stats.gas_revenue, Some(7_000));
    assert_eq!(stats.stake_rewards, Some(6_000));
    assert_eq!(stats.storage_fund_revenue, -1_500);
    assert_eq!(
        stats.activity(),
        vec![
            ("Transactions", "4,803,777".to_owned()),
            ("Storage Size", "512.50 GB".to_owned()),
            ("Gas Revenue", "7,000 SUI".to_owned()),
            ("Storage Revenue", "1,000 SUI".to_owned()),
            ("Storage Fund Revenue", "-1,500 SUI".to_owned()),
        ]
    );
    assert_eq!(stats.rewards()[0], ("Total Rewards", "9,000 SUI".to_owned()));
}

#[test]
fn stats_without_gas_summary() {
    let epoch = EpochView {
        gas_cost_summary: None,
        ..finished_epoch()
    };
    let stats = EpochStats::from(&epoch);

    assert_eq!(stats.gas_revenue, None);
    assert_eq!(stats.activity()[2], ("Gas Revenue", "--".to_owned()));
    assert_eq!(stats.rewards()[1], ("Stake Rewards", "--".to_owned()));

    let text = stats.to_string();
    assert!(text.starts_with("Epoch 4\n\nActivity\n"));
    assert!(text.contains("\nRewards\n"));
    assert!(text.contains("  Total Rewards          9,000 SUI\n"));
}
