//! Advisory checks for documents referenced by the configuration.

use std::fmt;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use tracing::warn;

use crate::DocsSettings;

/// A Redoc entry whose OpenAPI document does not exist.
///
/// Advisory only: the renderer or link checker decides whether it matters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceMissing {
    /// Name of the Redoc entry.
    pub entry: String,
    /// Declared spec path.
    pub spec: String,
}

impl fmt::Display for ReferenceMissing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "redoc entry '{}' references missing document '{}'",
            self.entry, self.spec
        )
    }
}

/// Report Redoc entries whose `spec` is not a file under `source_dir`.
///
/// Spec paths are resolved inside `source_dir` only; absolute paths and
/// paths escaping the directory count as missing. Every advisory is also
/// logged at `warn` level.
///
/// This is an early hint, not validation: the renderer and link checker
/// remain the authority on whether a document can be used, and an empty
/// result says nothing about the document's contents.
#[must_use]
pub fn check_references(settings: &DocsSettings, source_dir: &Utf8Path) -> Vec<ReferenceMissing> {
    let dir = match Dir::open_ambient_dir(source_dir, ambient_authority()) {
        Ok(dir) => Some(dir),
        Err(err) => {
            warn!(%source_dir, %err, "cannot open documentation source directory");
            None
        }
    };
    settings
        .redoc
        .iter()
        .filter(|entry| !dir.as_ref().is_some_and(|d| d.is_file(&entry.spec)))
        .map(|entry| {
            let missing = ReferenceMissing {
                entry: entry.name.clone(),
                spec: entry.spec.clone(),
            };
            warn!(entry = %missing.entry, spec = %missing.spec, "{missing}");
            missing
        })
        .collect()
}
