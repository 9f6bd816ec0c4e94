//! Epoch progress.
//!
//! Given the start and the end of an epoch and the current instant, this crate computes how much
//! of the epoch has passed as a fraction in `[0, 1]`, and a label such as `"3h left"`.
//!
//! All instants are milliseconds since the unix epoch. The functions [`compute`] and
//! [`compute_with`] are pure: the current instant is a parameter and they never fail, missing or
//! inverted windows degrade to defined results. [`EpochProgressCalculator`] pairs them with a
//! [`Clock`](explorer_systemtime::Clock).
//!
//! ## Examples
//!
//! ```
//! use explorer_epoch_progress::{compute, ProgressStatus};
//!
//! let progress = compute(Some(0), Some(3_600_000), 900_000);
//! assert_eq!(progress.fraction, 0.25);
//! assert_eq!(progress.label, "45m left");
//! assert_eq!(progress.status, ProgressStatus::InProgress);
//! ```
mod calculator;
mod config;
mod label;
mod window;


pub use calculator::EpochProgressCalculator;
pub use config::{DEFAULT_ENDED_LABEL, DEFAULT_UNKNOWN_LABEL, ProgressConfig};
pub use label::{
    DAY_MILLIS, HOUR_MILLIS, INVERTED_WINDOW_LABEL, LabelStyle, MINUTE_MILLIS, SECOND_MILLIS,
    format_remaining,
};
pub use window::EpochWindow;

/// Where the current instant stands relative to an epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProgressStatus {
    /// The start or the end of the epoch is not known yet.
    Unknown,
    /// The epoch has not reached its end.
    InProgress,
    /// The epoch has reached its end, or its window is empty or inverted.
    Ended,
}

/// The progress of an epoch at some instant.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressResult {
    /// Completion in `[0, 1]`.
    pub fraction: f64,
    /// Remaining or terminal time label.
    pub label: String,
    /// Where the instant stands.
    pub status: ProgressStatus,
}

impl ProgressResult {
    pub(crate) fn unknown(config: &ProgressConfig) -> Self {
        ProgressResult {
            fraction: 0.0,
            label: config.unknown_label.clone(),
            status: ProgressStatus::Unknown,
        }
    }

    /// Completion as a whole percentage, rounded down.
    pub fn percent(&self) -> u8 {
        (self.fraction * 100.0).floor() as u8
    }

    /// Returns true if the epoch has ended.
    pub fn is_ended(&self) -> bool {
        self.status == ProgressStatus::Ended
    }
}

/// Computes the progress of the epoch `[start, end]` at `now` with the default label policy.
///
/// See [`compute_with`].
pub fn compute(start: Option<u64>, end: Option<u64>, now: u64) -> ProgressResult {
    compute_with(start, end, now, &ProgressConfig::default())
}

/// Computes the progress of the epoch `[start, end]` at `now`.
///
/// * Either bound missing: fraction 0 and `config.unknown_label`.
/// * `end <= start`: fraction 1 and [`INVERTED_WINDOW_LABEL`].
/// * `now >= end`: fraction 1 and `config.ended_label`.
/// * Otherwise the elapsed part of the window, clamped into `[0, 1]`, and the remaining time
///   rendered by `config.style`.
pub fn compute_with(
    start: Option<u64>,
    end: Option<u64>,
    now: u64,
    config: &ProgressConfig,
) -> ProgressResult {
    match EpochWindow::from_optional(start, end) {
        Some(window) => window.progress_at(now, config),
        None => ProgressResult::unknown(config),
    }
}
