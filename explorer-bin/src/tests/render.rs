use explorer_epoch_progress::{EpochProgressCalculator, LabelStyle, ProgressConfig};
use explorer_jsonrpc_types::{CheckpointView, EpochView};
use explorer_systemtime::FixedClock;
use pretty_assertions::assert_eq;

use super::{HOUR, epoch_in_window};
use crate::subcommand::{render_checkpoints, render_epoch, render_epochs, render_progress};

#[test]
fn progress_of_current_epoch() {
    let calculator = EpochProgressCalculator::with_config(
        FixedClock(HOUR / 4),
        ProgressConfig {
            style: LabelStyle::Compound,
            ..Default::default()
        },
    );
    let epoch = epoch_in_window(5, 0, HOUR + 30 * 60_000);

    assert_eq!(
        render_progress(&calculator, Some(&epoch), 10),
        "Epoch 5\n\
         Start:  1970-01-01 00:00:00 UTC\n\
         End:    1970-01-01 01:30:00 UTC\n\
         Status: in progress\n\
         [#---------] 16%\n\
         1h 15m left\n"
    );
}

#[test]
fn progress_of_ended_and_unknown_epochs() {
    let calculator = EpochProgressCalculator::new(FixedClock(2 * HOUR));
    let ended = render_progress(&calculator, Some(&epoch_in_window(5, 0, HOUR)), 4);
    assert!(ended.ends_with("Status: ended\n[####] 100%\nEpoch ended\n"));

    let missing_end = EpochView {
        end_timestamp: None,
        ..epoch_in_window(5, 0, HOUR)
    };
    let unknown = render_progress(&calculator, Some(&missing_end), 4);
    assert!(unknown.contains("End:    -\nStatus: unknown\n[----] 0%\n"));
    assert!(!unknown.ends_with("\n\n"));

    assert_eq!(
        render_progress(&calculator, None, 4),
        "Epoch -\nStatus: unknown\n[----] 0%\n"
    );
}

#[test]
fn epochs_listing_respects_limit() {
    let epochs = vec![
        epoch_in_window(6, 2 * HOUR, 3 * HOUR),
        epoch_in_window(5, HOUR, 2 * HOUR),
        epoch_in_window(4, 0, HOUR),
    ];

    let all = render_epochs(&epochs, None);
    assert_eq!(all.lines().count(), 2 + 3);
    assert!(all.trim_start().starts_with("Time |"));
    assert!(all.ends_with('\n'));

    let limited = render_epochs(&epochs, Some(2));
    assert_eq!(limited.lines().count(), 2 + 2);
    assert!(limited.contains("1970-01-01 02:00:00 UTC | 6 "));
    assert!(!limited.contains("| 4 "));

    assert_eq!(render_epochs(&epochs, Some(10)), all);
    assert_eq!(render_epochs(&[], None), "No epochs\n");
}

#[test]
fn epoch_detail() {
    let detail = render_epoch(&epoch_in_window(5, 0, HOUR));
    assert!(detail.starts_with(
        "Epoch 5\n\
         Started: 1970-01-01 00:00:00 UTC\n\
         End:     1970-01-01 01:00:00 UTC\n\
         Checkpoints: 100 - 119\n\
         \n\
         Activity\n"
    ));
    assert!(detail.contains("Gas Revenue"));
    assert!(detail.contains("\nRewards\n"));

    let bare = render_epoch(&EpochView {
        epoch: 9u64.into(),
        ..Default::default()
    });
    assert!(bare.starts_with("Epoch 9\n\nActivity\n"));
}

#[test]
fn checkpoints_listing() {
    let checkpoints = (0..3u64)
        .map(|i| CheckpointView {
            epoch: 5u64.into(),
            sequence_number: (100 + i).into(),
            timestamp_ms: (i * 1_000).into(),
            content_digest: format!("digest{i}"),
            ..Default::default()
        })
        .collect::<Vec<_>>();

    let table = render_checkpoints(5, &checkpoints, Some(1));
    assert_eq!(table.lines().count(), 3);
    assert!(table.contains("digest0"));
    assert!(!table.contains("digest1"));

    assert_eq!(
        render_checkpoints(5, &[], None),
        "No checkpoints in epoch 5\n"
    );
}
