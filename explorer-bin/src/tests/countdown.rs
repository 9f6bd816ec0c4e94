use explorer_epoch_progress::{EpochProgressCalculator, ProgressConfig};
use explorer_systemtime::{Clock, MockClock};
use indicatif::ProgressBar;
use pretty_assertions::assert_eq;

use super::epoch_in_window;
use crate::subcommand::Countdown;

fn run(countdown: &Countdown<MockClock>, watch: bool) -> (String, ProgressBar) {
    let bar = ProgressBar::hidden();
    let mut out = Vec::new();
    countdown
        .run(&mut out, &bar, watch, || countdown.clock().advance(1_000))
        .expect("write into vec");
    (String::from_utf8(out).expect("utf8 output"), bar)
}

fn output(countdown: &Countdown<MockClock>, watch: bool) -> String {
    run(countdown, watch).0
}

#[test]
fn prints_once_without_watch() {
    let calculator = EpochProgressCalculator::new(MockClock::new(7_000));
    let countdown = Countdown::new(calculator, Some(epoch_in_window(5, 0, 10_000)));

    assert_eq!(output(&countdown, false), "Epoch 5 in progress. 3s left\n");

    let calculator = EpochProgressCalculator::new(MockClock::new(5_000));
    let countdown = Countdown::new(calculator, Some(epoch_in_window(5, 0, 10_000)));
    let (_, bar) = run(&countdown, false);
    assert_eq!(bar.position(), 50);
}

#[test]
fn watch_until_the_epoch_ends() {
    let calculator = EpochProgressCalculator::new(MockClock::new(7_000));
    let countdown = Countdown::new(calculator, Some(epoch_in_window(5, 0, 10_000)));

    assert_eq!(
        output(&countdown, true),
        "Epoch 5 in progress. 3s left\n\
         Epoch 5 in progress. 2s left\n\
         Epoch 5 in progress. 1s left\n\
         Epoch 5. Epoch ended\n"
    );
    assert_eq!(countdown.clock().now_millis(), 10_000);
}

#[test]
fn watch_moves_the_bar_to_the_end() {
    let calculator = EpochProgressCalculator::new(MockClock::new(8_000));
    let countdown = Countdown::new(calculator, Some(epoch_in_window(5, 0, 10_000)));

    let (output, bar) = run(&countdown, true);
    assert_eq!(output.lines().count(), 3);
    assert_eq!(bar.position(), 100);
}

#[test]
fn watch_stops_on_unknown_epoch() {
    let calculator = EpochProgressCalculator::with_config(
        MockClock::new(0),
        ProgressConfig {
            unknown_label: "Loading".to_owned(),
            ..Default::default()
        },
    );
    let countdown = Countdown::new(calculator, None);

    assert_eq!(output(&countdown, true), "Epoch - in progress. Loading\n");
}
