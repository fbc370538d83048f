//! Store-client capability for the rowkv scan core.
//!
//! This crate defines the narrow downstream interface the scan path runs
//! against: open a scan over one or more key ranges under an authorization
//! scope, pull raw cells from a cursor, close it. The wire protocol behind a
//! production implementation belongs to the store's client library; the
//! in-memory implementation in [`mem_store`] provides the same contract with
//! no network dependency, so everything above it is testable in-process.

#![forbid(unsafe_code)]

use std::sync::Arc;

use rowkv_result::Result;
use rustc_hash::FxHashSet;

pub mod failing_store;
pub mod mem_store;

/// One unit read from the store.
///
/// Ephemeral: produced by a cursor, consumed immediately by the decoder,
/// never retained across rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCell {
    pub row: Vec<u8>,
    pub family: Vec<u8>,
    pub qualifier: Vec<u8>,
    pub timestamp: i64,
    pub value: Vec<u8>,
}

/// A lower/upper bound pair over the store's sorted key space.
///
/// The lower bound is inclusive, the upper bound exclusive; either may be
/// absent, meaning unbounded on that side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRange {
    pub lower: Option<Vec<u8>>,
    pub upper: Option<Vec<u8>>,
}

impl KeyRange {
    /// Range covering the entire key space.
    pub fn all() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    /// Range over `[lower, upper)`.
    pub fn new(lower: impl Into<Vec<u8>>, upper: impl Into<Vec<u8>>) -> Self {
        Self {
            lower: Some(lower.into()),
            upper: Some(upper.into()),
        }
    }

    /// True unless both bounds are present with lower > upper.
    pub fn is_well_formed(&self) -> bool {
        match (&self.lower, &self.upper) {
            (Some(lower), Some(upper)) => lower <= upper,
            _ => true,
        }
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        if let Some(lower) = &self.lower {
            if key < lower.as_slice() {
                return false;
            }
        }
        if let Some(upper) = &self.upper {
            if key >= upper.as_slice() {
                return false;
            }
        }
        true
    }
}

/// The set of (family, qualifier) pairs a scan must fetch.
///
/// An empty set means no column restriction: the store returns every column
/// it holds for the scanned rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchSet {
    pub columns: Vec<(Vec<u8>, Vec<u8>)>,
}

impl FetchSet {
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn push(&mut self, family: Vec<u8>, qualifier: Vec<u8>) {
        self.columns.push((family, qualifier));
    }

    pub fn is_unrestricted(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether a cell with this (family, qualifier) passes the restriction.
    pub fn admits(&self, family: &[u8], qualifier: &[u8]) -> bool {
        self.is_unrestricted()
            || self
                .columns
                .iter()
                .any(|(f, q)| f.as_slice() == family && q.as_slice() == qualifier)
    }
}

/// The set of visibility labels a scan is permitted to read.
///
/// The store enforces this: a cell carrying labels outside the scope is
/// never returned. `Unrestricted` defers entirely to what the store grants
/// the principal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthScope {
    #[default]
    Unrestricted,
    Labels(FxHashSet<String>),
}

impl AuthScope {
    pub fn labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Labels(labels.into_iter().map(Into::into).collect())
    }

    /// Whether a cell requiring `required` labels is visible in this scope.
    pub fn permits(&self, required: &FxHashSet<String>) -> bool {
        match self {
            AuthScope::Unrestricted => true,
            AuthScope::Labels(scope) => required.is_subset(scope),
        }
    }
}

/// Everything a store needs to open one scan.
#[derive(Debug, Clone)]
pub struct ScanSpec {
    /// Key ranges to cover, in the order they should be scanned.
    pub ranges: Vec<KeyRange>,
    pub fetch: FetchSet,
    pub auth: AuthScope,
    /// Identity the scan runs as.
    pub principal: String,
}

/// Pull-based cursor over one open scan.
///
/// Implementations must release the underlying scan resource when dropped,
/// whether or not [`CellCursor::close`] was called explicitly.
pub trait CellCursor: Send {
    /// Pull the next cell. `Ok(None)` signals end-of-scan. Cells arrive in
    /// ascending key order within each range, at most one per
    /// (row, family, qualifier).
    fn next_cell(&mut self) -> Result<Option<RawCell>>;

    /// Release the scan resource. Calling this more than once is a no-op.
    fn close(&mut self);
}

impl std::fmt::Debug for dyn CellCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn CellCursor")
    }
}

/// Capability to open scans against a cell store.
///
/// Shared read-only across all concurrently executing splits; one cursor per
/// split keeps the scan state isolated by construction.
pub trait CellStore: Send + Sync {
    fn open_scan(&self, spec: ScanSpec) -> Result<Box<dyn CellCursor>>;
}

impl<T: CellStore + ?Sized> CellStore for Arc<T> {
    fn open_scan(&self, spec: ScanSpec) -> Result<Box<dyn CellCursor>> {
        (**self).open_scan(spec)
    }
}

impl<T: CellStore + ?Sized> CellStore for &T {
    fn open_scan(&self, spec: ScanSpec) -> Result<Box<dyn CellCursor>> {
        (**self).open_scan(spec)
    }
}
