use crate::{Uint64, Uint128};

pub type EpochNumber = Uint64;
pub type CheckpointSequenceNumber = Uint64;
/// Milliseconds since the unix epoch.
pub type Timestamp = Uint64;
/// An amount of the native coin, in its smallest unit.
pub type Amount = Uint128;
