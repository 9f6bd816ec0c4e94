use crate::label::{INVERTED_WINDOW_LABEL, format_remaining};
use crate::{ProgressConfig, ProgressResult, ProgressStatus};

/// The time span of an epoch, as millisecond timestamps.
///
/// `end >= start` is expected but not enforced; an empty or inverted window is treated as an
/// epoch which has already ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EpochWindow {
    start: u64,
    end: u64,
}

impl EpochWindow {
    /// Creates a window from its bounds.
    pub const fn new(start: u64, end: u64) -> Self {
        EpochWindow { start, end }
    }

    /// Creates a window when both bounds are known.
    pub fn from_optional(start: Option<u64>, end: Option<u64>) -> Option<Self> {
        Some(EpochWindow::new(start?, end?))
    }

    /// The start timestamp.
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// The end timestamp.
    pub const fn end(&self) -> u64 {
        self.end
    }

    /// Returns true if the window is empty or ends before it starts.
    pub const fn is_inverted(&self) -> bool {
        self.end <= self.start
    }

    /// The window length, zero for inverted windows.
    pub const fn duration(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Time passed since the start at `now`, clamped to `[0, duration]`.
    pub fn elapsed_at(&self, now: u64) -> u64 {
        now.saturating_sub(self.start).min(self.duration())
    }

    /// Time left until the end at `now`, zero once the end is reached.
    pub const fn remaining_at(&self, now: u64) -> u64 {
        self.end.saturating_sub(now)
    }

    /// Returns true if `now` is at or after the end.
    pub const fn has_ended_at(&self, now: u64) -> bool {
        now >= self.end
    }

    /// The completed fraction at `now`, in `[0, 1]`.
    pub fn fraction_at(&self, now: u64) -> f64 {
        if self.is_inverted() {
            return 1.0;
        }
        let fraction = self.elapsed_at(now) as f64 / self.duration() as f64;
        fraction.clamp(0.0, 1.0)
    }

    /// The full progress at `now`.
    pub fn progress_at(&self, now: u64, config: &ProgressConfig) -> ProgressResult {
        if self.is_inverted() {
            return ProgressResult {
                fraction: 1.0,
                label: INVERTED_WINDOW_LABEL.to_owned(),
                status: ProgressStatus::Ended,
            };
        }
        if self.has_ended_at(now) {
            return ProgressResult {
                fraction: 1.0,
                label: config.ended_label.clone(),
                status: ProgressStatus::Ended,
            };
        }
        ProgressResult {
            fraction: self.fraction_at(now),
            label: format_remaining(self.remaining_at(now), config.style),
            status: ProgressStatus::InProgress,
        }
    }
}
