//! # Epoch explorer AppConfig
//!
//! The config file `explorer.toml` lives in the config directory. Every table and key is
//! optional, a missing file means all defaults.
//!
//! ```toml
//! [logger]
//! filter = "info,explorer-epoch-source=debug"
//! log_to_file = true
//! file = "logs/explorer.log"
//!
//! [progress]
//! style = "compound"
//! ended_label = "Epoch ended"
//!
//! [source]
//! fixture = "fixtures/epochs.json"
//! ```
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use explorer_epoch_progress::ProgressConfig;
use explorer_error::{Error, ErrorKind};
use explorer_logger_config::Config as LogConfig;

/// Name of the config file in the config directory.
pub const APP_CONFIG_FILE_NAME: &str = "explorer.toml";

/// The whole `explorer.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logger options.
    pub logger: LogConfig,
    /// Progress label options.
    pub progress: ProgressConfig,
    /// Where epochs and checkpoints come from.
    pub source: SourceConfig,
}

/// The `[source]` table.
///
/// A fixture file wins over the mock generator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// A JSON fixture to serve.
    pub fixture: Option<PathBuf>,
    /// Seed of the mock generator, a random one is picked when absent.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Loads `explorer.toml` from `root_dir`, relative paths in it are resolved against
    /// `root_dir`.
    ///
    /// A missing directory, an unreadable file or a malformed table is an error of kind
    /// [`ErrorKind::Config`].
    pub fn load(root_dir: &Path) -> Result<AppConfig, Error> {
        if !root_dir.is_dir() {
            return Err(ErrorKind::Config.other(format!(
                "config directory {} does not exist",
                root_dir.display()
            )));
        }
        let path = root_dir.join(APP_CONFIG_FILE_NAME);
        let config = if path.is_file() {
            let content =
                fs::read_to_string(&path).map_err(|err| ErrorKind::Config.because(err))?;
            Self::from_toml(&content).map_err(|err| ErrorKind::Config.because(err))?
        } else {
            AppConfig::default()
        };
        Ok(config.derive_options(root_dir))
    }

    /// Parses the content of `explorer.toml`, paths are kept as written.
    pub fn from_toml(content: &str) -> Result<AppConfig, toml::de::Error> {
        toml::from_str(content)
    }

    fn derive_options(mut self, root_dir: &Path) -> Self {
        self.logger.file = resolve_path(root_dir, &self.logger.file);
        self.source.fixture = self
            .source
            .fixture
            .map(|fixture| resolve_path(root_dir, &fixture));
        self
    }
}

pub(crate) fn resolve_path(root_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        PathBuf::from(path_clean::clean(&root_dir.join(path).to_string_lossy()))
    }
}
