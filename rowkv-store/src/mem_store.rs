use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use rowkv_result::{Error, Result};
use rustc_hash::FxHashSet;

use crate::{CellCursor, CellStore, KeyRange, RawCell, ScanSpec};

/// (row, family, qualifier), ordered row-major so one row's cells are
/// contiguous and rows ascend in key order.
type CellCoord = (Vec<u8>, Vec<u8>, Vec<u8>);

#[derive(Debug, Clone)]
struct StoredCell {
    timestamp: i64,
    value: Vec<u8>,
    labels: FxHashSet<String>,
}

/// In-memory cell store used for tests/benchmarks.
///
/// Implements the full scan contract: ascending key order within a range,
/// ranges scanned in the order given, at most one (latest) cell per
/// coordinate, fetch-set restriction, and conjunctive visibility labels. A
/// cursor snapshots its matching cells at open time, so writes made after a
/// scan opens do not affect it.
///
/// Per-principal grants are not modeled; `ScanSpec::principal` is accepted
/// and ignored, and an [`crate::AuthScope::Unrestricted`] scan sees every
/// cell.
pub struct MemCellStore {
    cells: RwLock<BTreeMap<CellCoord, StoredCell>>,
    next_ts: AtomicI64,
    open_scans: Arc<AtomicUsize>,
}

impl Default for MemCellStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemCellStore {
    pub fn new() -> Self {
        Self {
            cells: RwLock::new(BTreeMap::new()),
            next_ts: AtomicI64::new(1),
            open_scans: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Write one unlabeled cell. Replaces any prior version at the same
    /// coordinate; the scan surface only ever sees the latest write.
    pub fn put(&self, row: &[u8], family: &[u8], qualifier: &[u8], value: &[u8]) {
        self.put_labeled(row, family, qualifier, value, &[]);
    }

    /// Write one cell guarded by visibility labels. A scan sees it only if
    /// its auth scope covers every label.
    pub fn put_labeled(
        &self,
        row: &[u8],
        family: &[u8],
        qualifier: &[u8],
        value: &[u8],
        labels: &[&str],
    ) {
        let timestamp = self.next_ts.fetch_add(1, Ordering::Relaxed);
        let stored = StoredCell {
            timestamp,
            value: value.to_vec(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        };
        let mut cells = self
            .cells
            .write()
            .expect("MemCellStore cells write lock poisoned");
        cells.insert(
            (row.to_vec(), family.to_vec(), qualifier.to_vec()),
            stored,
        );
    }

    /// Number of scans currently open against this store. Reaches zero only
    /// when every cursor has been closed or dropped.
    pub fn open_scan_count(&self) -> usize {
        self.open_scans.load(Ordering::Relaxed)
    }

    fn collect_range(
        cells: &BTreeMap<CellCoord, StoredCell>,
        spec: &ScanSpec,
        range: &KeyRange,
        out: &mut Vec<RawCell>,
    ) {
        let lower = match &range.lower {
            Some(l) => Bound::Included((l.clone(), Vec::new(), Vec::new())),
            None => Bound::Unbounded,
        };
        let upper = match &range.upper {
            Some(u) => Bound::Excluded((u.clone(), Vec::new(), Vec::new())),
            None => Bound::Unbounded,
        };

        for ((row, family, qualifier), stored) in cells.range((lower, upper)) {
            if !spec.fetch.admits(family, qualifier) {
                continue;
            }
            if !spec.auth.permits(&stored.labels) {
                continue;
            }
            out.push(RawCell {
                row: row.clone(),
                family: family.clone(),
                qualifier: qualifier.clone(),
                timestamp: stored.timestamp,
                value: stored.value.clone(),
            });
        }
    }
}

impl CellStore for MemCellStore {
    fn open_scan(&self, spec: ScanSpec) -> Result<Box<dyn CellCursor>> {
        for range in &spec.ranges {
            if !range.is_well_formed() {
                return Err(Error::Internal(
                    "malformed key range reached the store".to_string(),
                ));
            }
        }

        let cells = self
            .cells
            .read()
            .expect("MemCellStore cells read lock poisoned");
        let mut matched = Vec::new();
        for range in &spec.ranges {
            Self::collect_range(&cells, &spec, range, &mut matched);
        }

        self.open_scans.fetch_add(1, Ordering::Relaxed);
        Ok(Box::new(MemCellCursor {
            cells: matched.into_iter(),
            gauge: Some(Arc::clone(&self.open_scans)),
        }))
    }
}

struct MemCellCursor {
    cells: std::vec::IntoIter<RawCell>,
    /// Present while the scan is open; taken exactly once on release.
    gauge: Option<Arc<AtomicUsize>>,
}

impl CellCursor for MemCellCursor {
    fn next_cell(&mut self) -> Result<Option<RawCell>> {
        if self.gauge.is_none() {
            return Ok(None);
        }
        Ok(self.cells.next())
    }

    fn close(&mut self) {
        if let Some(gauge) = self.gauge.take() {
            gauge.fetch_sub(1, Ordering::Relaxed);
        }
    }
}

impl Drop for MemCellCursor {
    fn drop(&mut self) {
        self.close();
    }
}
