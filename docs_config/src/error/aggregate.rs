//! Container for the violations collected by one validation pass.

use std::{error::Error, fmt, sync::Arc};

use super::DocsError;

/// Every [`DocsError`] found while validating resolved settings, in the
/// order the checks ran.
///
/// # Examples
///
/// ```
/// use docs_config::DocsError;
///
/// let err = DocsError::try_aggregate(vec![
///     DocsError::validation("project", "must not be empty"),
///     DocsError::validation("release", "must not be empty"),
/// ]);
/// if let Some(DocsError::Aggregate(agg)) = err {
///     assert_eq!(agg.len(), 2);
/// }
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<Arc<DocsError>>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<Arc<DocsError>>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &DocsError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the aggregation holds no errors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}
