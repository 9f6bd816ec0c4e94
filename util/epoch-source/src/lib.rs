//! Epoch and checkpoint data sources.
//!
//! * [`FixtureSource`] serves a JSON document loaded from disk.
//! * [`MockSource`] generates a deterministic chain history from a seed, anchored at the
//!   instant it is created.
mod error;
mod fixture;
mod mock;

#[cfg(test)]
mod tests;

pub use error::SourceError;
pub use fixture::{Fixture, FixtureSource};
pub use mock::{CHECKPOINTS_PER_EPOCH, MOCK_EPOCH_COUNT, MOCK_EPOCH_DURATION, MockSource};
