use rowkv_result::{Error, Result};
use rowkv_store::{AuthScope, KeyRange};

use crate::SessionContext;

/// One unit of table work handed down by the query engine: the key ranges
/// to cover, optional visibility labels baked in at planning time, and
/// hosts that hold the data locally.
#[derive(Debug, Clone)]
pub struct Split {
    ranges: Vec<KeyRange>,
    auth_labels: Option<Vec<String>>,
    host_hints: Vec<String>,
}

impl Split {
    pub fn new(ranges: Vec<KeyRange>) -> Self {
        Self {
            ranges,
            auth_labels: None,
            host_hints: Vec::new(),
        }
    }

    /// Pin this split to the given visibility labels. Labels set here win
    /// over any session-level scope.
    pub fn with_auth_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.auth_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Advisory placement only; execution never depends on the hints.
    pub fn with_host_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.host_hints = hints.into_iter().map(Into::into).collect();
        self
    }

    pub fn ranges(&self) -> &[KeyRange] {
        &self.ranges
    }

    pub fn auth_labels(&self) -> Option<&[String]> {
        self.auth_labels.as_deref()
    }

    pub fn host_hints(&self) -> &[String] {
        &self.host_hints
    }
}

/// What a validated split asks of the store: ordered ranges plus the
/// authorization scope the scan must carry.
#[derive(Debug, Clone)]
pub struct ResolvedScan {
    pub ranges: Vec<KeyRange>,
    pub auth: AuthScope,
}

/// Validate `split` and produce the store-facing scan inputs.
///
/// Ranges come back sorted by lower bound, unbounded-from-start first, so
/// downstream consumers always see an ordered sequence. The auth scope is
/// the split's own labels if present, else the session's, else
/// [`AuthScope::Unrestricted`].
pub fn resolve_split(split: &Split, ctx: &SessionContext) -> Result<ResolvedScan> {
    if split.ranges.is_empty() {
        return Err(Error::InvalidSplit("split carries no key ranges".to_string()));
    }
    for range in &split.ranges {
        if !range.is_well_formed() {
            let lower = range.lower.as_deref().unwrap_or(b"");
            let upper = range.upper.as_deref().unwrap_or(b"");
            return Err(Error::InvalidSplit(format!(
                "range lower bound '{}' sorts above its upper bound '{}'",
                String::from_utf8_lossy(lower),
                String::from_utf8_lossy(upper),
            )));
        }
    }

    let mut ranges = split.ranges.clone();
    ranges.sort_by(|a, b| a.lower.cmp(&b.lower));

    let auth = if let Some(labels) = &split.auth_labels {
        AuthScope::labels(labels.iter().cloned())
    } else if let Some(labels) = &ctx.auth_labels {
        AuthScope::labels(labels.iter().cloned())
    } else {
        AuthScope::Unrestricted
    };

    Ok(ResolvedScan { ranges, auth })
}
