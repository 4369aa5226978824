//! Layered configuration for documentation sites.
//!
//! A documentation build declares its settings (project metadata, theme,
//! extensions, Redoc pages, cross-reference maps) in a base layer and
//! overrides them with branch- or release-specific layers. [`resolve`]
//! applies the layers in order with last-write-wins semantics and returns a
//! [`ConfigStore`] that the external renderer consumes, either raw or through
//! the typed [`DocsSettings`] view.
//!
//! ```rust
//! use docs_config::{ConfigLayer, resolve};
//! use serde_json::json;
//!
//! let base = ConfigLayer::base(json!({
//!     "project": "onap",
//!     "extensions": ["sphinx.ext.intersphinx", "sphinx.ext.graphviz"],
//! }));
//! let branch = ConfigLayer::branch("oslo", json!({"extensions": ["sphinxcontrib.redoc"]}));
//!
//! let store = resolve([base, branch])?;
//! assert_eq!(store.get("extensions"), Some(&json!(["sphinxcontrib.redoc"])));
//! assert_eq!(store.origin("project"), Some("base"));
//! # Ok::<_, std::sync::Arc<docs_config::DocsError>>(())
//! ```

use std::sync::Arc;

mod bootstrap;
mod env;
mod error;
pub mod file;
pub mod layer;
mod loader;
mod references;
mod resolve;
mod result_ext;
pub mod settings;

pub use bootstrap::{AssetRegistry, bootstrap};
pub use env::{DEFAULT_ENV_PREFIX, environment_layer};
pub use error::{AggregatedErrors, DocsError};
pub use layer::{ConfigLayer, LayerComposer, LayerProvenance};
pub use loader::LayerLoader;
pub use references::{ReferenceMissing, check_references};
pub use resolve::{ConfigStore, resolve};
pub use result_ext::DocsResultExt;
pub use settings::{DocsSettings, RedocEntry};

/// Result type used throughout the crate. Errors are shared so aggregated
/// diagnostics can hold them without cloning.
pub type DocsResult<T> = Result<T, Arc<DocsError>>;
