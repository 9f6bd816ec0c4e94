//! Collaborator traits of the epoch explorer.
//!
//! Any data source, a fixture file, a mock generator or an RPC client, can back the explorer as
//! long as it implements these traits.
mod checkpoint_provider;
mod epoch_provider;

pub use crate::checkpoint_provider::CheckpointProvider;
pub use crate::epoch_provider::EpochProvider;

/// A source of both epochs and checkpoints.
pub trait DataSource: EpochProvider + CheckpointProvider {}

impl<T: EpochProvider + CheckpointProvider> DataSource for T {}
