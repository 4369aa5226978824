//! Trait-based conversions between external error types and `DocsError`.

use figment::Error as FigmentError;

use super::DocsError;

/// Convert JSON decoding failures into [`DocsError::Deserialize`].
impl From<serde_json::Error> for DocsError {
    fn from(source: serde_json::Error) -> Self {
        Self::Deserialize { source }
    }
}

impl From<FigmentError> for DocsError {
    fn from(e: FigmentError) -> Self {
        Self::Gathering(e.into())
    }
}
