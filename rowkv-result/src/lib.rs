//! Error types and result definitions for the rowkv scan core.
//!
//! This crate provides the unified error type ([`Error`]) and result type
//! alias ([`Result<T>`]) used throughout the rowkv crates. All operations
//! that can fail return `Result<T>`, where the error variant carries enough
//! context to identify the split and column involved.
//!
//! # Error Philosophy
//!
//! rowkv uses a single error enum ([`Error`]) rather than crate-specific
//! error types.
//!
//! This approach:
//! - Simplifies error handling across crate boundaries
//! - Allows errors to propagate naturally with the `?` operator
//! - Provides clear error messages for the host query engine
//! - Enables structured error matching for programmatic handling
//!
//! # Error Categories
//!
//! - **Caller contract violations** ([`Error::InvalidSplit`],
//!   [`Error::EmptyProjection`]): malformed inputs from the planner; fatal to
//!   that split, never retried.
//! - **Store failures** ([`Error::ScanExecution`]): the store could not open
//!   or read a scan; the underlying cause is attached.
//! - **Data format errors** ([`Error::RowDecode`]): cell bytes incompatible
//!   with a column's declared type.
//! - **I/O errors** ([`Error::Io`]): raw I/O failures from store
//!   implementations.
//! - **Internal errors** ([`Error::Internal`]): bugs or unexpected states.

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
