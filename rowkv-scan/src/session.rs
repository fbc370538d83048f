use rowkv_result::{Error, Result};
use rowkv_store::{CellCursor, CellStore, RawCell, ScanSpec};

/// Owns one open store cursor for the lifetime of a scan.
///
/// The session guarantees the cursor is released exactly once, whether the
/// scan ends by exhaustion, by failure, by an explicit [`close`], or by
/// being dropped. Store errors surface as
/// [`Error::ScanExecution`] with the cause attached; this layer never
/// retries.
///
/// [`close`]: ScanSession::close
pub struct ScanSession {
    cursor: Option<Box<dyn CellCursor>>,
}

impl ScanSession {
    pub fn open<S>(store: &S, spec: ScanSpec) -> Result<Self>
    where
        S: CellStore + ?Sized,
    {
        tracing::debug!(
            "opening scan for principal '{}' over {} range(s)",
            spec.principal,
            spec.ranges.len()
        );
        let cursor = store.open_scan(spec).map_err(into_scan_error)?;
        Ok(Self {
            cursor: Some(cursor),
        })
    }

    /// Pull the next cell. After [`close`] this always returns `Ok(None)`.
    ///
    /// [`close`]: ScanSession::close
    pub fn next_cell(&mut self) -> Result<Option<RawCell>> {
        match &mut self.cursor {
            Some(cursor) => cursor.next_cell().map_err(into_scan_error),
            None => Ok(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.cursor.is_some()
    }

    /// Release the scan. Calling this more than once is a no-op.
    pub fn close(&mut self) {
        if let Some(mut cursor) = self.cursor.take() {
            cursor.close();
            tracing::debug!("scan session closed");
        }
    }
}

impl std::fmt::Debug for ScanSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanSession")
            .field("open", &self.is_open())
            .finish()
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        self.close();
    }
}

fn into_scan_error(err: Error) -> Error {
    let wrapped = match err {
        Error::ScanExecution { .. } => err,
        other => Error::scan_execution(other),
    };
    tracing::warn!("store scan failed: {}", wrapped);
    wrapped
}
