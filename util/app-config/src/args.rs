use crate::AppConfig;

/// Parsed command line arguments for `epoch-explorer timer`.
pub struct TimerArgs {
    /// Parsed `explorer.toml`.
    pub config: Box<AppConfig>,
    /// Refresh the countdown every second.
    pub watch: bool,
}

/// Parsed command line arguments for `epoch-explorer progress`.
pub struct ProgressArgs {
    /// Parsed `explorer.toml`.
    pub config: Box<AppConfig>,
    /// The instant to compute at, now when absent.
    pub at: Option<u64>,
    /// Progress bar width.
    pub width: usize,
}

/// Parsed command line arguments for `epoch-explorer epochs`.
pub struct EpochsArgs {
    /// Parsed `explorer.toml`.
    pub config: Box<AppConfig>,
    /// Maximum number of rows.
    pub limit: Option<usize>,
}

/// Parsed command line arguments for `epoch-explorer epoch`.
pub struct EpochArgs {
    /// Parsed `explorer.toml`.
    pub config: Box<AppConfig>,
    /// The epoch number.
    pub number: u64,
}

/// Parsed command line arguments for `epoch-explorer checkpoints`.
pub struct CheckpointsArgs {
    /// Parsed `explorer.toml`.
    pub config: Box<AppConfig>,
    /// The epoch which contains the checkpoints.
    pub epoch: u64,
    /// Maximum number of rows.
    pub limit: Option<usize>,
}
