use explorer_systemtime::MockClock;
use explorer_traits::{CheckpointProvider, EpochProvider};

use crate::{CHECKPOINTS_PER_EPOCH, MOCK_EPOCH_COUNT, MOCK_EPOCH_DURATION, MockSource};

const ANCHOR: u64 = 1_670_000_000_000;

#[test]
fn same_seed_same_history() {
    let clock = MockClock::new(ANCHOR);
    let a = MockSource::new(7, &clock);
    let b = MockSource::new(7, &clock);
    assert_eq!(a.get_epochs().unwrap(), b.get_epochs().unwrap());
    assert_eq!(a.get_checkpoints(3).unwrap(), b.get_checkpoints(3).unwrap());

    let c = MockSource::with_anchor(8, ANCHOR);
    assert_ne!(a.get_epochs().unwrap(), c.get_epochs().unwrap());
}

#[test]
fn current_epoch_surrounds_the_anchor() {
    let source = MockSource::with_anchor(1, ANCHOR);
    let current = source.current_epoch().unwrap().unwrap();
    assert_eq!(current.number(), MOCK_EPOCH_COUNT - 1);

    let start = current.start_timestamp_ms().unwrap();
    let end = current.end_timestamp_ms().unwrap();
    assert!(start <= ANCHOR && ANCHOR - start < MOCK_EPOCH_DURATION);
    assert!(end > ANCHOR && end - ANCHOR <= MOCK_EPOCH_DURATION);
    assert!(current.gas_cost_summary.is_none());
}

#[test]
fn past_epochs_are_back_to_back() {
    let source = MockSource::with_anchor(1, ANCHOR);
    let epochs = source.get_epochs().unwrap();
    assert_eq!(epochs.len() as u64, MOCK_EPOCH_COUNT);
    assert_eq!(epochs[0], source.current_epoch().unwrap().unwrap());

    for pair in epochs[1..].windows(2) {
        let (newer, older) = (&pair[0], &pair[1]);
        assert_eq!(newer.number(), older.number() + 1);
        assert_eq!(older.end_timestamp_ms(), newer.start_timestamp_ms());
        assert!(older.gas_cost_summary.is_some());
    }
    assert_eq!(
        epochs[1].end_timestamp_ms(),
        epochs[0].start_timestamp_ms()
    );
}

#[test]
fn get_epoch_matches_the_listing() {
    let source = MockSource::with_anchor(3, ANCHOR);
    let epochs = source.get_epochs().unwrap();
    for epoch in &epochs {
        assert_eq!(source.get_epoch(epoch.number()).unwrap().as_ref(), Some(epoch));
    }
    assert!(source.get_epoch(MOCK_EPOCH_COUNT).unwrap().is_none());
}

#[test]
fn checkpoints_are_chained() {
    let source = MockSource::with_anchor(5, ANCHOR);
    let epoch = source.get_epoch(4).unwrap().unwrap();
    let checkpoints = source.get_checkpoints(4).unwrap();
    assert_eq!(checkpoints.len() as u64, CHECKPOINTS_PER_EPOCH);

    let set = epoch.checkpoint_set.unwrap();
    assert_eq!(checkpoints.first().unwrap().sequence_number.value(), set.first());
    assert_eq!(checkpoints.last().unwrap().sequence_number.value(), set.last());

    for pair in checkpoints.windows(2) {
        assert_eq!(
            pair[1].previous_digest.as_deref(),
            Some(pair[0].content_digest.as_str())
        );
        assert!(pair[0].timestamp_ms <= pair[1].timestamp_ms);
    }
    let previous = source.get_checkpoints(3).unwrap();
    assert_eq!(
        checkpoints[0].previous_digest.as_deref(),
        Some(previous.last().unwrap().content_digest.as_str())
    );
    assert_eq!(checkpoints[0].content_digest.len(), 40);

    let genesis = source.get_checkpoints(0).unwrap();
    assert!(genesis[0].previous_digest.is_none());
    assert!(source.get_checkpoints(MOCK_EPOCH_COUNT).unwrap().is_empty());
}

#[test]
fn current_checkpoints_are_not_in_the_future() {
    let source = MockSource::with_anchor(9, ANCHOR);
    let current = source.current_epoch_number();
    for checkpoint in source.get_checkpoints(current).unwrap() {
        assert!(checkpoint.timestamp_ms.value() <= ANCHOR);
    }
}
