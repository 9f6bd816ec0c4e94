//! Epoch explorer common types for JSON serialization.
//!
//! The views keep absent upstream fields as `Option` instead of loosely typed objects, and
//! accept the camelCase spellings used by the explorer mocks as aliases.
mod checkpoint;
mod epoch;
mod primitive;
mod uints;


pub use self::checkpoint::{CheckpointView, GasCostSummary};
pub use self::epoch::{CheckpointSet, EpochGasSummary, EpochView};
pub use self::uints::{JsonUint, Uint, Uint32, Uint64, Uint128};
pub use primitive::{Amount, CheckpointSequenceNumber, EpochNumber, Timestamp};
pub use serde::{Deserialize, Serialize};
