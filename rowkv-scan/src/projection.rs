use rowkv_result::{Error, Result};
use rowkv_store::FetchSet;
use rowkv_types::ValueType;
use rustc_hash::FxHashSet;

/// Where a projected column's bytes live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnMapping {
    /// The row key itself, surfaced as a column. Never fetched from the
    /// store; decoded straight from the key bytes.
    RowId,
    /// A stored cell under (family, qualifier).
    Cell { family: String, qualifier: String },
}

/// One column the engine asked for: its name, the type its bytes decode
/// to, and where those bytes come from.
#[derive(Debug, Clone)]
pub struct ColumnHandle {
    pub name: String,
    pub value_type: ValueType,
    pub mapping: ColumnMapping,
}

impl ColumnHandle {
    pub fn row_id(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            mapping: ColumnMapping::RowId,
        }
    }

    pub fn cell(
        name: impl Into<String>,
        value_type: ValueType,
        family: impl Into<String>,
        qualifier: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value_type,
            mapping: ColumnMapping::Cell {
                family: family.into(),
                qualifier: qualifier.into(),
            },
        }
    }
}

/// Store-facing fetch set plus the order decoded rows come back in.
#[derive(Debug, Clone)]
pub struct Projection {
    pub fetch: FetchSet,
    pub output: Vec<ColumnHandle>,
}

/// Turn the engine's column list into scan inputs.
///
/// Duplicate (family, qualifier) pairs are fetched once, in first-seen
/// order. Row-id columns contribute nothing to the fetch set; a
/// projection of only row-id columns leaves it unrestricted, and the
/// decoder ignores whatever cells come back.
pub fn project_columns(columns: &[ColumnHandle]) -> Result<Projection> {
    if columns.is_empty() {
        return Err(Error::EmptyProjection);
    }

    let mut fetch = FetchSet::unrestricted();
    let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();
    for column in columns {
        if let ColumnMapping::Cell { family, qualifier } = &column.mapping {
            if seen.insert((family.as_str(), qualifier.as_str())) {
                fetch.push(family.clone().into_bytes(), qualifier.clone().into_bytes());
            }
        }
    }

    Ok(Projection {
        fetch,
        output: columns.to_vec(),
    })
}
