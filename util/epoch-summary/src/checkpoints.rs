use explorer_jsonrpc_types::CheckpointView;
use std::borrow::Cow;
use tabled::{Style, Table, Tabled};
use thousands::Separable;

use crate::format_timestamp;

/// Headers of the checkpoints table.
pub const CHECKPOINT_COLUMNS: [&str; 5] = [
    "Time",
    "Sequence Number",
    "Transaction Count",
    "Digest",
    "Signature",
];

/// One line of the checkpoints table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckpointRow {
    pub time: u64,
    pub sequence_number: u64,
    pub transaction_count: u64,
    pub digest: String,
    pub signature: String,
}

impl From<&CheckpointView> for CheckpointRow {
    fn from(checkpoint: &CheckpointView) -> Self {
        CheckpointRow {
            time: checkpoint.timestamp_ms.value(),
            sequence_number: checkpoint.sequence_number.value(),
            transaction_count: checkpoint.transaction_count.value(),
            digest: checkpoint.content_digest.clone(),
            signature: checkpoint.signature.clone(),
        }
    }
}

impl Tabled for CheckpointRow {
    const LENGTH: usize = CHECKPOINT_COLUMNS.len();

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            format_timestamp(self.time).into(),
            self.sequence_number.to_string().into(),
            self.transaction_count.separate_with_commas().into(),
            Cow::Borrowed(self.digest.as_str()),
            Cow::Borrowed(self.signature.as_str()),
        ]
    }

    fn headers() -> Vec<Cow<'static, str>> {
        CHECKPOINT_COLUMNS.map(Into::into).to_vec()
    }
}

/// Builds the checkpoints table, in the given order.
pub fn checkpoints_table(checkpoints: &[CheckpointView]) -> Table {
    let mut table = Table::new(checkpoints.iter().map(CheckpointRow::from));
    table.with(Style::psql());
    table
}
