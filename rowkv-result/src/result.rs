use crate::error::Error;

/// Result type alias used throughout the rowkv crates.
///
/// This is a type alias for `std::result::Result<T, Error>`, providing a
/// convenient shorthand for functions that return rowkv errors. All rowkv
/// operations that can fail should return this type.
pub type Result<T> = std::result::Result<T, Error>;
