//! Underlying error types used over explorer crates.

use std::{error::Error as StdError, fmt, ops::Deref, sync::Arc};

mod internal;
pub mod util;


use derive_more::Display;
pub use internal::{OtherError, SilentError};

/// A wrapper around a dynamic error type.
#[derive(Debug, Clone)]
pub struct AnyError(Arc<anyhow::Error>);

/// A list specifying categories of explorer error.
///
/// This list is intended to grow over time and it is not recommended to exhaustively match against
/// it.
///
/// It is used with [`Error`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Display)]
pub enum ErrorKind {
    /// It indicates that the underlying error comes from an epoch or checkpoint data source.
    Source,
    /// It indicates that the underlying error is a bad configuration.
    Config,
}

def_error_base_on_kind!(Error, ErrorKind, "Top-level explorer error type.");

impl AnyError {
    /// Views the wrapped error as a plain standard error.
    pub fn as_std(&self) -> &(dyn StdError + 'static) {
        let error: &anyhow::Error = &self.0;
        let error: &(dyn StdError + Send + Sync + 'static) = error.as_ref();
        error
    }
}

impl<E> From<E> for AnyError
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self(Arc::new(error.into()))
    }
}

impl Deref for AnyError {
    type Target = Arc<anyhow::Error>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Defines an error struct made of a kind enum and a dynamic cause.
///
/// The macro generates:
///
/// * the struct `$error` with `kind()`, `downcast_ref()` and `root_cause()`;
/// * `$error_kind::because(cause)` and `$error_kind::other(message)` constructors;
/// * `From<$error_kind> for $error`, with a [`SilentError`] cause.
///
/// ## Examples
///
/// ```
/// use explorer_error::def_error_base_on_kind;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
/// pub enum FetchErrorKind {
///     Timeout,
/// }
///
/// def_error_base_on_kind!(FetchError, FetchErrorKind, "Fetch error.");
///
/// let error = FetchErrorKind::Timeout.other("after 3 tries");
/// assert_eq!(error.kind(), FetchErrorKind::Timeout);
/// assert_eq!(error.to_string(), "Timeout(after 3 tries)");
/// ```
#[macro_export]
macro_rules! def_error_base_on_kind {
    ($error:ident, $error_kind:ty, $comment_error:expr) => {
        #[doc = $comment_error]
        #[derive(Debug, Clone)]
        pub struct $error {
            kind: $error_kind,
            inner: $crate::AnyError,
        }

        impl ::std::fmt::Display for $error {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}({})", self.kind, self.inner)
            }
        }

        impl ::std::error::Error for $error {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                Some(self.inner.as_std())
            }
        }

        impl From<$error_kind> for $error {
            fn from(kind: $error_kind) -> Self {
                kind.because($crate::SilentError)
            }
        }

        impl $error_kind {
            /// Creates an error of this kind caused by `reason`.
            pub fn because<E>(self, reason: E) -> $error
            where
                E: ::std::error::Error + Send + Sync + 'static,
            {
                $error {
                    kind: self,
                    inner: reason.into(),
                }
            }

            /// Creates an error of this kind with a plain message as its cause.
            pub fn other<T>(self, reason: T) -> $error
            where
                T: ::std::fmt::Display,
            {
                $error {
                    kind: self,
                    inner: $crate::OtherError::new(reason).into(),
                }
            }
        }

        impl $error {
            /// Returns the kind of this error.
            pub fn kind(&self) -> $error_kind {
                self.kind
            }

            /// Downcasts the cause to a concrete type.
            pub fn downcast_ref<T>(&self) -> Option<&T>
            where
                T: ::std::fmt::Display + ::std::fmt::Debug + Send + Sync + 'static,
            {
                self.inner.downcast_ref::<T>()
            }

            /// Returns the lowest level cause.
            pub fn root_cause(&self) -> &(dyn ::std::error::Error + 'static) {
                self.inner.root_cause()
            }
        }
    };
}
