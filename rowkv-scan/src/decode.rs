use rowkv_result::{Error, Result};
use rowkv_store::RawCell;
use rowkv_types::{Value, decode_value};

use crate::projection::{ColumnHandle, ColumnMapping};

/// One decoded row, in projection output order.
pub type Row = Vec<Value>;

/// Groups an ascending cell stream into per-row runs.
///
/// The store contract orders cells by key, so every row's cells arrive as
/// one contiguous run. The assembler holds at most one cell of lookahead,
/// the first cell of the following row.
#[derive(Default)]
pub struct RowAssembler {
    pending: Option<RawCell>,
}

impl RowAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull the next complete row's cells from `next_cell`. `Ok(None)`
    /// means the stream is exhausted.
    pub fn next_group<F>(&mut self, mut next_cell: F) -> Result<Option<Vec<RawCell>>>
    where
        F: FnMut() -> Result<Option<RawCell>>,
    {
        let first = match self.pending.take() {
            Some(cell) => cell,
            None => match next_cell()? {
                Some(cell) => cell,
                None => return Ok(None),
            },
        };

        let mut group = vec![first];
        loop {
            match next_cell()? {
                Some(cell) => {
                    if cell.row == group[0].row {
                        group.push(cell);
                    } else {
                        self.pending = Some(cell);
                        break;
                    }
                }
                None => break,
            }
        }
        Ok(Some(group))
    }
}

/// Decodes one row's cell group into output-ordered typed values.
pub struct RowDecoder {
    output: Vec<ColumnHandle>,
}

impl RowDecoder {
    pub fn new(output: Vec<ColumnHandle>) -> Self {
        Self { output }
    }

    pub fn output(&self) -> &[ColumnHandle] {
        &self.output
    }

    /// Projected cells absent from the group decode as [`Value::Null`];
    /// cells the projection never asked for are ignored. Decode failures
    /// name the row and column they happened in.
    pub fn decode_row(&self, cells: &[RawCell]) -> Result<Row> {
        let first = cells
            .first()
            .ok_or_else(|| Error::Internal("cannot decode an empty cell group".to_string()))?;
        let row_key = first.row.as_slice();

        let mut row = Vec::with_capacity(self.output.len());
        for column in &self.output {
            let value = match &column.mapping {
                ColumnMapping::RowId => decode_value(row_key, column.value_type)
                    .map_err(|e| Error::row_decode(row_key, column.name.as_str(), e))?,
                ColumnMapping::Cell { family, qualifier } => {
                    let found = cells.iter().find(|c| {
                        c.family.as_slice() == family.as_bytes()
                            && c.qualifier.as_slice() == qualifier.as_bytes()
                    });
                    match found {
                        Some(cell) => decode_value(&cell.value, column.value_type)
                            .map_err(|e| Error::row_decode(row_key, column.name.as_str(), e))?,
                        None => Value::Null,
                    }
                }
            };
            row.push(value);
        }
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: &[u8], qualifier: &[u8]) -> RawCell {
        RawCell {
            row: row.to_vec(),
            family: b"f".to_vec(),
            qualifier: qualifier.to_vec(),
            timestamp: 0,
            value: Vec::new(),
        }
    }

    #[test]
    fn assembler_groups_contiguous_rows() {
        let cells = vec![cell(b"a", b"q1"), cell(b"a", b"q2"), cell(b"b", b"q1")];
        let mut iter = cells.into_iter();
        let mut next = || -> Result<Option<RawCell>> { Ok(iter.next()) };
        let mut assembler = RowAssembler::new();

        let first = assembler.next_group(&mut next).unwrap().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].row, b"a");

        let second = assembler.next_group(&mut next).unwrap().unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].row, b"b");

        assert!(assembler.next_group(&mut next).unwrap().is_none());
        assert!(assembler.next_group(&mut next).unwrap().is_none());
    }

    #[test]
    fn assembler_propagates_source_errors() {
        let mut assembler = RowAssembler::new();
        let mut next =
            || -> Result<Option<RawCell>> { Err(Error::Internal("boom".to_string())) };
        assert!(assembler.next_group(&mut next).is_err());
    }
}
