use explorer_epoch_progress::{EpochProgressCalculator, compute};
use explorer_jsonrpc_types::EpochView;
use explorer_systemtime::MockClock;
use indicatif::ProgressDrawTarget;

use super::finished_epoch;
use crate::{MAX_BAR_WIDTH, epoch_progress, progress_bar, progress_widget, show_progress, timer_line};

#[test]
fn timer_line_with_number() {
    let progress = compute(Some(0), Some(3_600_000), 900_000);
    assert_eq!(timer_line(Some(5), &progress), "Epoch 5 in progress. 45m left");
}

#[test]
fn timer_line_without_number_or_label() {
    let progress = compute(None, Some(3_600_000), 900_000);
    assert_eq!(timer_line(None, &progress), "Epoch - in progress.");
}

#[test]
fn timer_line_of_ended_epoch() {
    let progress = compute(Some(0), Some(3_600_000), 3_600_000);
    assert_eq!(timer_line(Some(2), &progress), "Epoch 2. Epoch ended");

    let inverted = compute(Some(3_600_000), Some(0), 0);
    assert_eq!(timer_line(Some(2), &inverted), "Epoch 2. 0s left");
}

#[test]
fn progress_of_epoch_view() {
    let epoch = finished_epoch();
    let start = epoch.start_timestamp_ms().unwrap_or_default();
    let calculator = EpochProgressCalculator::new(MockClock::new(start + 43_200_000));

    let progress = epoch_progress(&calculator, &epoch);
    assert_eq!(progress.fraction, 0.5);
    assert_eq!(progress.label, "12h left");

    calculator.clock().set(start + 86_400_000);
    assert!(epoch_progress(&calculator, &epoch).is_ended());
    assert_eq!(
        epoch_progress(&calculator, &EpochView::default()).label,
        ""
    );
}

#[test]
fn draws_progress_bar() {
    assert_eq!(
        progress_bar(&compute(Some(0), Some(100), 50), 10),
        "[#####-----] 50%"
    );
    assert_eq!(
        progress_bar(&compute(Some(0), Some(100), 100), 4),
        "[####] 100%"
    );
    assert_eq!(progress_bar(&compute(None, None, 0), 3), "[---] 0%");
}

#[test]
fn progress_bar_width_is_bounded() {
    let half = compute(Some(0), Some(1_000), 500);

    let widest = progress_bar(&half, usize::MAX);
    assert_eq!(widest.len(), MAX_BAR_WIDTH + "[] 50%".len());
    assert_eq!(widest, progress_bar(&half, MAX_BAR_WIDTH));
    assert_eq!(progress_bar(&half, 0), "[] 50%");
}

#[test]
fn widget_follows_progress() {
    let bar = progress_widget(usize::MAX, ProgressDrawTarget::hidden());
    assert!(bar.is_hidden());
    assert_eq!(bar.position(), 0);

    let progress = compute(Some(0), Some(1_000), 250);
    show_progress(&bar, &progress, progress.label.clone());
    assert_eq!(bar.position(), 25);

    show_progress(&bar, &compute(Some(0), Some(1_000), 1_000), String::new());
    assert_eq!(bar.position(), 100);
}
