//! Epoch explorer logging facade.
//!
//! This crate is a wrapper of the crate [`log`].
//!
//! [`log`]: https://docs.rs/log/*/log/index.html
//!
//! The basic macros log with the default target, the module path of the call site. `target: `
//! is not accepted in them since it is unfriendly to `cargo fmt`; use the `*_target!` group
//! instead, for example `debug_target!("progress", "message")`.
pub use log::{self as internal, Level, LevelFilter, SetLoggerError};

/// Logs a message at the trace level using the default target.
///
/// # Examples
///
/// ```
/// use explorer_logger::trace;
///
/// let (epoch, fraction) = (5, 0.25);
/// trace!("epoch {} is {:.2} done", epoch, fraction);
/// ```
#[macro_export(local_inner_macros)]
macro_rules! trace {
    ($( $args:tt )*) => {
        $crate::internal::trace!($( $args )*);
    }
}

/// Logs a message at the debug level using the default target.
///
/// # Examples
///
/// ```
/// use explorer_logger::debug;
///
/// let (start, end) = (100, 50);
/// debug!("inverted epoch window: start {} end {}", start, end);
/// ```
#[macro_export(local_inner_macros)]
macro_rules! debug {
    ($( $args:tt )*) => {
        $crate::internal::debug!($( $args )*);
    }
}

/// Logs a message at the info level using the default target.
#[macro_export(local_inner_macros)]
macro_rules! info {
    ($( $args:tt )*) => {
        $crate::internal::info!($( $args )*);
    }
}

/// Logs a message at the warn level using the default target.
#[macro_export(local_inner_macros)]
macro_rules! warn {
    ($( $args:tt )*) => {
        $crate::internal::warn!($( $args )*);
    }
}

/// Logs a message at the error level using the default target.
///
/// # Examples
///
/// ```
/// use explorer_logger::error;
///
/// let path = "epochs.json";
/// error!("failed to load fixture {}", path);
/// ```
#[macro_export(local_inner_macros)]
macro_rules! error {
    ($( $args:tt )*) => {
        $crate::internal::error!($( $args )*);
    }
}

/// Determines if a message logged at the specified level and with the default target will be
/// logged.
///
/// ## Examples
///
/// ```
/// use explorer_logger::Level::Debug;
/// use explorer_logger::{debug, log_enabled};
///
/// # fn expensive_call() -> usize { 0 }
/// if log_enabled!(Debug) {
///     debug!("rows: {}", expensive_call());
/// }
/// ```
#[macro_export(local_inner_macros)]
macro_rules! log_enabled {
    ($level:expr) => {
        $crate::internal::log_enabled!($level)
    };
}

/// Logs a message at the trace level using the specified target.
#[macro_export(local_inner_macros)]
macro_rules! trace_target {
    ($target:expr, $( $args:tt )*) => {
        $crate::internal::trace!(target: $target, $( $args )*);
    }
}

/// Logs a message at the debug level using the specified target.
///
/// # Examples
///
/// ```
/// use explorer_logger::debug_target;
///
/// debug_target!("source", "loaded {} epochs", 20);
/// ```
#[macro_export(local_inner_macros)]
macro_rules! debug_target {
    ($target:expr, $( $args:tt )*) => {
        $crate::internal::debug!(target: $target, $( $args )*);
    }
}

/// Logs a message at the info level using the specified target.
#[macro_export(local_inner_macros)]
macro_rules! info_target {
    ($target:expr, $( $args:tt )*) => {
        $crate::internal::info!(target: $target, $( $args )*);
    }
}

/// Logs a message at the warn level using the specified target.
#[macro_export(local_inner_macros)]
macro_rules! warn_target {
    ($target:expr, $( $args:tt )*) => {
        $crate::internal::warn!(target: $target, $( $args )*);
    }
}

/// Logs a message at the error level using the specified target.
#[macro_export(local_inner_macros)]
macro_rules! error_target {
    ($target:expr, $( $args:tt )*) => {
        $crate::internal::error!(target: $target, $( $args )*);
    }
}
