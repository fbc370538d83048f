use std::io;

use rowkv_result::{Error, Result};

use crate::{CellCursor, CellStore, RawCell, ScanSpec};

#[derive(Debug, Clone, Copy)]
enum FailureMode {
    /// Fail every `open_scan` call before it reaches the inner store.
    OpenScan,
    /// Open normally, then fail the cursor after `after` successful
    /// `next_cell` calls.
    NextCell { after: usize },
}

/// Wrapper that injects store failures at a chosen point in the scan
/// lifecycle. Exists so callers can exercise their error paths against a
/// real [`CellStore`] without a misbehaving backend on hand.
pub struct FailingStore<S> {
    inner: S,
    mode: FailureMode,
}

impl<S: CellStore> FailingStore<S> {
    /// Every scan open fails; the inner store is never consulted.
    pub fn failing_open(inner: S) -> Self {
        Self {
            inner,
            mode: FailureMode::OpenScan,
        }
    }

    /// Scans open normally, then the cursor fails after `after` cells have
    /// been returned.
    pub fn failing_after(inner: S, after: usize) -> Self {
        Self {
            inner,
            mode: FailureMode::NextCell { after },
        }
    }
}

fn injected_error() -> Error {
    Error::Io(io::Error::new(
        io::ErrorKind::ConnectionReset,
        "injected store failure",
    ))
}

impl<S: CellStore> CellStore for FailingStore<S> {
    fn open_scan(&self, spec: ScanSpec) -> Result<Box<dyn CellCursor>> {
        match self.mode {
            FailureMode::OpenScan => Err(injected_error()),
            FailureMode::NextCell { after } => {
                let inner = self.inner.open_scan(spec)?;
                Ok(Box::new(FailingCursor {
                    inner,
                    remaining: after,
                }))
            }
        }
    }
}

struct FailingCursor {
    inner: Box<dyn CellCursor>,
    remaining: usize,
}

impl CellCursor for FailingCursor {
    fn next_cell(&mut self) -> Result<Option<RawCell>> {
        if self.remaining == 0 {
            return Err(injected_error());
        }
        self.remaining -= 1;
        self.inner.next_cell()
    }

    fn close(&mut self) {
        self.inner.close();
    }
}
