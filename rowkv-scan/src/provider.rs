use std::sync::Arc;

use rowkv_store::CellStore;

use crate::SessionContext;
use crate::projection::ColumnHandle;
use crate::row_set::RowSet;
use crate::split::Split;

/// Builds [`RowSet`]s for incoming splits.
///
/// Scans run as the session's principal when the context names one and as
/// the configured default otherwise.
pub struct RowSetProvider<S: CellStore> {
    store: Arc<S>,
    default_principal: String,
}

impl<S: CellStore> RowSetProvider<S> {
    pub fn new(store: Arc<S>, default_principal: impl Into<String>) -> Self {
        Self {
            store,
            default_principal: default_principal.into(),
        }
    }

    pub fn row_set(
        &self,
        split: Split,
        columns: Vec<ColumnHandle>,
        ctx: SessionContext,
    ) -> RowSet<S> {
        let principal = ctx
            .principal
            .clone()
            .unwrap_or_else(|| self.default_principal.clone());
        tracing::debug!(
            "building row set for principal '{}' with {} column(s) over {} range(s)",
            principal,
            columns.len(),
            split.ranges().len()
        );
        RowSet::new(Arc::clone(&self.store), principal, split, columns, ctx)
    }
}

impl<S: CellStore> Clone for RowSetProvider<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            default_principal: self.default_principal.clone(),
        }
    }
}
