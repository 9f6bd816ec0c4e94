use explorer_error::Error;
use explorer_jsonrpc_types::EpochView;

/// Trait for epoch storage.
pub trait EpochProvider {
    /// Get the epoch in progress, `None` while it is not known.
    fn current_epoch(&self) -> Result<Option<EpochView>, Error>;

    /// Get an epoch by its number.
    fn get_epoch(&self, number: u64) -> Result<Option<EpochView>, Error>;

    /// Get all known epochs, newest first.
    fn get_epochs(&self) -> Result<Vec<EpochView>, Error>;
}
