//! Epoch explorer logger configurations.
//!
//! This crate is used to configure the [logging service].
//!
//! [logging service]: ../explorer_logger_service/index.html


use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The whole logger configuration.
///
/// This struct is used to build [`Logger`].
///
/// [`Logger`]: ../explorer_logger_service/struct.Logger.html
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// An optional string which is used to build [env_logger::Filter].
    ///
    /// If the value is `None`, only errors are logged. The environment variable `EXPLORER_LOG`
    /// takes precedence over this value.
    ///
    /// [env_logger::Filter]: https://docs.rs/env_logger/*/env_logger/filter/struct.Filter.html
    pub filter: Option<String>,
    /// Colorize the output which was written into the stderr.
    pub color: bool,
    /// The log file, relative paths are resolved against the config directory.
    pub file: PathBuf,
    /// Output the log records into a file or not.
    pub log_to_file: bool,
    /// Output the log records into the stderr or not.
    ///
    /// Stdout is kept for the command output.
    pub log_to_stderr: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            filter: None,
            color: !cfg!(windows),
            file: PathBuf::from("explorer.log"),
            log_to_file: false,
            log_to_stderr: true,
        }
    }
}
