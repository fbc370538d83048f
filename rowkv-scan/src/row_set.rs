use std::mem;
use std::sync::Arc;

use rowkv_result::{Error, Result};
use rowkv_store::{CellStore, ScanSpec};

use crate::SessionContext;
use crate::decode::{Row, RowAssembler, RowDecoder};
use crate::projection::{ColumnHandle, project_columns};
use crate::session::ScanSession;
use crate::split::{Split, resolve_split};

/// Externally observable position of a row set in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSetPhase {
    Created,
    Open,
    Exhausted,
    Failed,
    Closed,
}

enum State {
    Created {
        split: Split,
        columns: Vec<ColumnHandle>,
        ctx: SessionContext,
    },
    Open {
        session: ScanSession,
        assembler: RowAssembler,
        decoder: RowDecoder,
    },
    Exhausted,
    Failed,
    Closed,
}

/// Streams typed rows for one split.
///
/// The underlying scan opens lazily on the first [`next_row`] call and is
/// released on every exit path: exhaustion, failure, explicit [`close`],
/// or drop. Any error retires the row set; errors are not retried here,
/// and polling again after one reports a usage error instead of touching
/// the store.
///
/// [`next_row`]: RowSet::next_row
/// [`close`]: RowSet::close
pub struct RowSet<S: CellStore> {
    store: Arc<S>,
    principal: String,
    state: State,
}

impl<S: CellStore> RowSet<S> {
    pub fn new(
        store: Arc<S>,
        principal: impl Into<String>,
        split: Split,
        columns: Vec<ColumnHandle>,
        ctx: SessionContext,
    ) -> Self {
        Self {
            store,
            principal: principal.into(),
            state: State::Created {
                split,
                columns,
                ctx,
            },
        }
    }

    pub fn phase(&self) -> RowSetPhase {
        match self.state {
            State::Created { .. } => RowSetPhase::Created,
            State::Open { .. } => RowSetPhase::Open,
            State::Exhausted => RowSetPhase::Exhausted,
            State::Failed => RowSetPhase::Failed,
            State::Closed => RowSetPhase::Closed,
        }
    }

    /// Pull the next decoded row. `Ok(None)` signals exhaustion, and so do
    /// later calls on an exhausted or closed row set.
    pub fn next_row(&mut self) -> Result<Option<Row>> {
        loop {
            // Failure is the default resting state: any `?` below leaves
            // the row set failed with no scan open.
            match mem::replace(&mut self.state, State::Failed) {
                State::Created {
                    split,
                    columns,
                    ctx,
                } => {
                    let resolved = resolve_split(&split, &ctx)?;
                    let projection = project_columns(&columns)?;
                    let spec = ScanSpec {
                        ranges: resolved.ranges,
                        fetch: projection.fetch,
                        auth: resolved.auth,
                        principal: self.principal.clone(),
                    };
                    let session = ScanSession::open(self.store.as_ref(), spec)?;
                    self.state = State::Open {
                        session,
                        assembler: RowAssembler::new(),
                        decoder: RowDecoder::new(projection.output),
                    };
                }
                State::Open {
                    mut session,
                    mut assembler,
                    decoder,
                } => {
                    let group = match assembler.next_group(|| session.next_cell()) {
                        Ok(group) => group,
                        Err(err) => {
                            session.close();
                            return Err(err);
                        }
                    };
                    match group {
                        Some(cells) => match decoder.decode_row(&cells) {
                            Ok(row) => {
                                self.state = State::Open {
                                    session,
                                    assembler,
                                    decoder,
                                };
                                return Ok(Some(row));
                            }
                            Err(err) => {
                                session.close();
                                return Err(err);
                            }
                        },
                        None => {
                            session.close();
                            self.state = State::Exhausted;
                            return Ok(None);
                        }
                    }
                }
                State::Exhausted => {
                    self.state = State::Exhausted;
                    return Ok(None);
                }
                State::Failed => {
                    return Err(Error::Internal(
                        "row set polled after failure".to_string(),
                    ));
                }
                State::Closed => {
                    self.state = State::Closed;
                    return Ok(None);
                }
            }
        }
    }

    /// Release the scan and retire the row set. Safe from any state and
    /// more than once.
    pub fn close(&mut self) {
        if let State::Open { mut session, .. } = mem::replace(&mut self.state, State::Closed) {
            session.close();
        }
    }
}

impl<S: CellStore> Drop for RowSet<S> {
    fn drop(&mut self) {
        self.close();
    }
}
