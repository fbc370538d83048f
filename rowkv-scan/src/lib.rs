//! Split-to-row scan execution.
//!
//! This crate turns one unit of table work (a [`Split`]) plus a column
//! projection into a stream of typed rows read from a sorted cell store.
//! The pipeline:
//!
//! * [`split::resolve_split`] validates the split and produces ordered key
//!   ranges plus the authorization scope the scan must carry.
//! * [`projection::project_columns`] turns column handles into the store
//!   fetch set and the output order of decoded rows.
//! * [`session::ScanSession`] owns the store cursor and guarantees it is
//!   released exactly once, on every exit path.
//! * [`decode::RowAssembler`] and [`decode::RowDecoder`] group the cell
//!   stream into per-row runs and decode them into typed values.
//!
//! [`row_set::RowSet`] wires the stages together behind a single
//! `next_row` loop, and [`provider::RowSetProvider`] constructs row sets
//! with per-session principal and label overrides applied.

#![forbid(unsafe_code)]

pub mod decode;
pub mod projection;
pub mod provider;
pub mod row_set;
pub mod session;
pub mod split;

pub use decode::{Row, RowAssembler, RowDecoder};
pub use projection::{ColumnHandle, ColumnMapping, Projection, project_columns};
pub use provider::RowSetProvider;
pub use row_set::{RowSet, RowSetPhase};
pub use session::ScanSession;
pub use split::{ResolvedScan, Split, resolve_split};

/// Per-session overrides a query engine attaches to its requests.
///
/// Everything here is optional; an empty context means "use the
/// provider's defaults and the split's own labels".
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// Principal to run the scan as, overriding the provider default.
    pub principal: Option<String>,
    /// Visibility labels to scan under when the split carries none.
    pub auth_labels: Option<Vec<String>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_principal(mut self, principal: impl Into<String>) -> Self {
        self.principal = Some(principal.into());
        self
    }

    pub fn with_auth_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.auth_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }
}
