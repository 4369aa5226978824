//! Extensions for mapping errors to `DocsResult` concisely.
//!
//! These helpers replace repetitive `.map_err(|e| Arc::new(DocsError::from(e)))`
//! chains when converting external error types into the crate's
//! `DocsResult<T>` alias (`Result<T, Arc<DocsError>>`).
//!
//! # Examples
//!
//! ```
//! use docs_config::{DocsResult, DocsResultExt};
//!
//! fn parse() -> DocsResult<serde_json::Value> {
//!     serde_json::from_str("{\"project\": \"onap\"}").into_docs()
//! }
//! # assert!(parse().is_ok());
//! ```

use std::sync::Arc;

use crate::{DocsError, DocsResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<DocsError>`
/// into a `DocsResult<T>`.
pub trait DocsResultExt<T, E> {
    /// Convert `Result<T, E>` into `DocsResult<T>` using `Into<DocsError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<DocsError>`.
    fn into_docs(self) -> DocsResult<T>;
}

impl<T, E> DocsResultExt<T, E> for Result<T, E>
where
    E: Into<DocsError>,
{
    fn into_docs(self) -> DocsResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
