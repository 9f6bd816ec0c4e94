use explorer_jsonrpc_types::{CheckpointView, EpochView};
use explorer_traits::{CheckpointProvider, EpochProvider};

use crate::{Fixture, FixtureSource};

fn epoch(number: u64) -> EpochView {
    EpochView {
        epoch: number.into(),
        ..Default::default()
    }
}

fn checkpoint(epoch: u64, sequence_number: u64) -> CheckpointView {
    CheckpointView {
        epoch: epoch.into(),
        sequence_number: sequence_number.into(),
        content_digest: format!("digest-{sequence_number}"),
        ..Default::default()
    }
}

#[test]
fn epochs_are_served_newest_first() {
    let source = FixtureSource::new(Fixture {
        epochs: vec![epoch(1), epoch(3), epoch(2)],
        ..Default::default()
    });
    let numbers = source
        .get_epochs()
        .unwrap()
        .iter()
        .map(EpochView::number)
        .collect::<Vec<_>>();
    assert_eq!(numbers, vec![3, 2, 1]);
}

#[test]
fn current_epoch_falls_back_to_the_newest() {
    let source = FixtureSource::new(Fixture {
        epochs: vec![epoch(1), epoch(4)],
        ..Default::default()
    });
    assert_eq!(source.current_epoch().unwrap().unwrap().number(), 4);

    let explicit = FixtureSource::new(Fixture {
        current_epoch: Some(epoch(5)),
        epochs: vec![epoch(4)],
        ..Default::default()
    });
    assert_eq!(explicit.current_epoch().unwrap().unwrap().number(), 5);
    assert_eq!(explicit.get_epoch(5).unwrap().unwrap().number(), 5);
    assert!(explicit.get_epoch(6).unwrap().is_none());

    let empty = FixtureSource::new(Fixture::default());
    assert!(empty.current_epoch().unwrap().is_none());
}

#[test]
fn checkpoints_are_filtered_and_ordered() {
    let source = FixtureSource::new(Fixture {
        checkpoints: vec![checkpoint(2, 41), checkpoint(1, 20), checkpoint(2, 40)],
        ..Default::default()
    });
    let sequence_numbers = source
        .get_checkpoints(2)
        .unwrap()
        .iter()
        .map(|checkpoint| checkpoint.sequence_number.value())
        .collect::<Vec<_>>();
    assert_eq!(sequence_numbers, vec![40, 41]);
    assert!(source.get_checkpoints(9).unwrap().is_empty());
}
