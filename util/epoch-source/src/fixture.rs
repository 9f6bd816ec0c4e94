use explorer_error::Error;
use explorer_jsonrpc_types::{CheckpointView, EpochView};
use explorer_logger::debug;
use explorer_traits::{CheckpointProvider, EpochProvider};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::SourceError;

/// The JSON document behind a [`FixtureSource`].
///
/// ```json
/// {
///   "current_epoch": { "epoch": 5, "startTimestamp": 1000, "endTimestamp": 2000 },
///   "epochs": [{ "epoch": 4 }],
///   "checkpoints": []
/// }
/// ```
///
/// All three keys are optional.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixture {
    /// The epoch in progress. When absent, the highest numbered entry of `epochs` is used.
    pub current_epoch: Option<EpochView>,
    /// Known epochs in any order.
    pub epochs: Vec<EpochView>,
    /// Known checkpoints of all epochs, in any order.
    pub checkpoints: Vec<CheckpointView>,
}

/// A data source serving a [`Fixture`].
#[derive(Clone, Debug)]
pub struct FixtureSource {
    fixture: Fixture,
}

impl FixtureSource {
    /// Creates a source from an in-memory fixture.
    pub fn new(mut fixture: Fixture) -> Self {
        fixture
            .epochs
            .sort_by(|a, b| b.number().cmp(&a.number()));
        fixture
            .checkpoints
            .sort_by_key(|checkpoint| checkpoint.sequence_number);
        FixtureSource { fixture }
    }

    /// Loads the fixture at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixture: Fixture =
            serde_json::from_slice(&content).map_err(|source| SourceError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            "loaded fixture {}: {} epochs, {} checkpoints",
            path.display(),
            fixture.epochs.len(),
            fixture.checkpoints.len()
        );
        Ok(Self::new(fixture))
    }

    /// The served fixture, epochs newest first and checkpoints by sequence number.
    pub fn fixture(&self) -> &Fixture {
        &self.fixture
    }
}

impl EpochProvider for FixtureSource {
    fn current_epoch(&self) -> Result<Option<EpochView>, Error> {
        Ok(self
            .fixture
            .current_epoch
            .clone()
            .or_else(|| self.fixture.epochs.first().cloned()))
    }

    fn get_epoch(&self, number: u64) -> Result<Option<EpochView>, Error> {
        Ok(self
            .fixture
            .epochs
            .iter()
            .chain(self.fixture.current_epoch.as_ref())
            .find(|epoch| epoch.number() == number)
            .cloned())
    }

    fn get_epochs(&self) -> Result<Vec<EpochView>, Error> {
        Ok(self.fixture.epochs.clone())
    }
}

impl CheckpointProvider for FixtureSource {
    fn get_checkpoints(&self, epoch: u64) -> Result<Vec<CheckpointView>, Error> {
        Ok(self
            .fixture
            .checkpoints
            .iter()
            .filter(|checkpoint| checkpoint.epoch.value() == epoch)
            .cloned()
            .collect())
    }
}
