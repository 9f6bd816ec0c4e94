use explorer_logger::{debug, trace};
use explorer_systemtime::Clock;

use crate::{EpochWindow, ProgressConfig, ProgressResult, compute_with};

/// Computes epoch progress against an injected clock.
///
/// Recomputing periodically, e.g. every second for a countdown, is left to the caller.
#[derive(Clone, Debug)]
pub struct EpochProgressCalculator<C> {
    clock: C,
    config: ProgressConfig,
}

impl<C: Clock> EpochProgressCalculator<C> {
    /// Creates a calculator with the default label policy.
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, ProgressConfig::default())
    }

    /// Creates a calculator with the given label policy.
    pub fn with_config(clock: C, config: ProgressConfig) -> Self {
        EpochProgressCalculator { clock, config }
    }

    /// The label policy.
    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// The clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The progress of the epoch `[start, end]` now.
    pub fn progress(&self, start: Option<u64>, end: Option<u64>) -> ProgressResult {
        let now = self.clock.now_millis();
        match (start, end) {
            (Some(start), Some(end)) if end <= start => {
                debug!(
                    "inverted epoch window: start {} end {}, treated as ended",
                    start, end
                );
            }
            (Some(_), Some(_)) => {}
            _ => {
                debug!("epoch window is incomplete: start {:?} end {:?}", start, end);
            }
        }
        let result = compute_with(start, end, now, &self.config);
        trace!(
            "epoch progress at {}: {:.4} {:?} {:?}",
            now, result.fraction, result.status, result.label
        );
        result
    }

    /// The progress of `window` now.
    pub fn window_progress(&self, window: EpochWindow) -> ProgressResult {
        self.progress(Some(window.start()), Some(window.end()))
    }
}
