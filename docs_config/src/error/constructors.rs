//! Constructors and aggregation helpers for `DocsError`.

use std::sync::Arc;

use figment::Error as FigmentError;

use super::{AggregatedErrors, DocsError};

impl DocsError {
    /// Tries to build a [`DocsError`] from an iterator of errors.
    ///
    /// Returns `None` when no errors are supplied, the error itself when a
    /// single uniquely owned error is supplied, and [`Self::Aggregate`]
    /// otherwise.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.len() > 1 {
            return Some(Self::Aggregate(Box::new(AggregatedErrors::new(arcs))));
        }
        let last = arcs.pop()?;
        Some(match Arc::try_unwrap(last) {
            Ok(err) => err,
            Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared]))),
        })
    }

    /// Construct a [`Self::MalformedLayer`] error.
    ///
    /// # Examples
    ///
    /// ```
    /// use docs_config::DocsError;
    ///
    /// let err = DocsError::malformed("oslo", Some("redoc"), "expected a sequence");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "malformed layer 'oslo' (setting 'redoc'): expected a sequence"
    /// );
    /// ```
    #[must_use]
    pub fn malformed(layer: &str, setting: Option<&str>, message: impl Into<String>) -> Self {
        Self::MalformedLayer {
            layer: layer.to_owned(),
            setting: setting.map(str::to_owned),
            message: message.into(),
        }
    }

    /// Construct a [`Self::Validation`] error.
    #[must_use]
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Construct a gathering error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use docs_config::DocsError;
    /// let e = DocsError::gathering(figment::Error::from("boom"));
    /// assert!(matches!(e, DocsError::Gathering(_)));
    /// ```
    #[must_use]
    pub fn gathering(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }

    /// Returns `true` for the errors the layer contract calls configuration
    /// errors: empty input or a malformed layer.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::EmptyLayers | Self::MalformedLayer { .. })
    }
}
