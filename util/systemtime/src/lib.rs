//! explorer_systemtime provides the wall clock behind the [`Clock`] trait.
//!
//! Time-dependent code takes a `Clock` instead of reading the system time, so
//! tests can drive it with a [`MockClock`].

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
use web_time::{SystemTime, UNIX_EPOCH};

#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
use std::time::{SystemTime, UNIX_EPOCH};

// A clock set before the unix epoch reads as 0.
fn system_time_as_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs() * 1000 + u64::from(duration.subsec_millis()))
        .unwrap_or_default()
}

/// Get system's timestamp in millis
pub fn unix_time_as_millis() -> u64 {
    system_time_as_millis()
}

/// A source of the current instant, as milliseconds since the unix epoch.
pub trait Clock {
    /// Returns the current instant in millis.
    fn now_millis(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

/// The real wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        unix_time_as_millis()
    }
}

/// A clock stopped at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

/// A clock which only moves when told to.
///
/// It can be shared between threads behind an `Arc`.
#[derive(Debug, Default)]
pub struct MockClock {
    now: AtomicU64,
}

impl MockClock {
    /// Creates a clock stopped at `now` millis.
    pub fn new(now: u64) -> Self {
        MockClock {
            now: AtomicU64::new(now),
        }
    }

    /// Moves the clock to `now` millis, backwards moves are allowed.
    pub fn set(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Moves the clock forward by `millis`, saturating at `u64::MAX`.
    pub fn advance(&self, millis: u64) {
        let _ = self
            .now
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                Some(now.saturating_add(millis))
            });
    }
}

impl Clock for MockClock {
    fn now_millis(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
