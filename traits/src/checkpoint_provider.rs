use explorer_error::Error;
use explorer_jsonrpc_types::CheckpointView;

/// Trait for checkpoint storage.
pub trait CheckpointProvider {
    /// Get the checkpoints of an epoch, ordered by sequence number.
    fn get_checkpoints(&self, epoch: u64) -> Result<Vec<CheckpointView>, Error>;
}
