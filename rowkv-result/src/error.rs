use std::{fmt, io};
use thiserror::Error;

/// Unified error type for all rowkv operations.
///
/// This enum encompasses every failure mode across the scan core, from
/// malformed planner inputs to store-side scan failures. Each variant
/// includes context-specific information so the host runtime can tell a
/// caller bug from a store outage from corrupt data.
///
/// # Error Handling Strategy
///
/// Errors propagate upward through the call stack using Rust's `?` operator.
/// None are swallowed: a failure anywhere in the split-to-row path surfaces
/// to the immediate caller, and the row set that produced it is left closed.
///
/// # Thread Safety
///
/// `Error` implements `Send` and `Sync`, allowing errors to cross the
/// boundaries between concurrently executing splits.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from a store implementation.
    ///
    /// This wraps standard library I/O errors raised by store clients while
    /// talking to the underlying service (connection resets, timeouts at the
    /// socket level, and the like). Scan-layer code re-wraps these into
    /// [`Error::ScanExecution`] before they reach the host runtime, so the
    /// original cause stays attached.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed split descriptor.
    ///
    /// Raised when a split carries no key ranges, or a range whose lower
    /// bound exceeds its upper bound. This indicates a bug in the planner
    /// that produced the split; it is fatal to that split's execution and is
    /// never retried.
    #[error("invalid split: {0}")]
    InvalidSplit(String),

    /// Zero output columns were requested.
    ///
    /// A caller contract violation: an engine asking for no columns gets an
    /// error, not an empty row shape.
    #[error("projection requires at least one column")]
    EmptyProjection,

    /// Store-side failure opening or reading a scan.
    ///
    /// The underlying cause is attached as the error source. This layer
    /// performs no retry: retrying may require re-resolving splits or
    /// re-authenticating, both of which belong to the host runtime.
    #[error("scan execution failed: {source}")]
    ScanExecution {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// A cell's bytes do not match its column's declared type.
    ///
    /// Fatal to that row set's consumption, since skipping the row would
    /// silently corrupt query results. `row` is the offending row identifier
    /// (rendered lossily if not UTF-8) and `column` the output column name,
    /// so the bad cell can be located in the store.
    #[error("cannot decode column '{column}' of row '{row}': {reason}")]
    RowDecode {
        row: String,
        column: String,
        reason: String,
    },

    /// Internal error indicating a bug or unexpected state.
    ///
    /// This error should never occur during normal operation. If you
    /// encounter it, it likely indicates a bug in rowkv that should be
    /// reported with reproduction steps.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    /// Wrap a store-side failure as a scan execution error.
    ///
    /// The original error is preserved as the source so diagnostics can
    /// reach the root cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowkv_result::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer reset");
    /// let err = Error::scan_execution(io);
    /// assert!(matches!(err, Error::ScanExecution { .. }));
    /// ```
    #[inline]
    pub fn scan_execution<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::ScanExecution {
            source: Box::new(source),
        }
    }

    /// Build a row decode error with row and column context.
    ///
    /// Row identifiers are raw bytes in the store; they are rendered lossily
    /// here so the error stays printable.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowkv_result::Error;
    ///
    /// let err = Error::row_decode(b"row-7", "price", "not enough data");
    /// assert!(err.to_string().contains("price"));
    /// assert!(err.to_string().contains("row-7"));
    /// ```
    #[inline]
    pub fn row_decode<C, R>(row: &[u8], column: C, reason: R) -> Self
    where
        C: Into<String>,
        R: fmt::Display,
    {
        Error::RowDecode {
            row: String::from_utf8_lossy(row).into_owned(),
            column: column.into(),
            reason: reason.to_string(),
        }
    }
}
