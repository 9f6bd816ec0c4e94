mod countdown;
mod render;

use explorer_jsonrpc_types::{CheckpointSet, EpochView};

const HOUR: u64 = 3_600_000;

fn epoch_in_window(number: u64, start: u64, end: u64) -> EpochView {
    EpochView {
        epoch: number.into(),
        transaction_count: 1_200u64.into(),
        checkpoint_set: Some(CheckpointSet(100u64.into(), 119u64.into())),
        start_timestamp: Some(start.into()),
        end_timestamp: Some(end.into()),
        ..Default::default()
    }
}
