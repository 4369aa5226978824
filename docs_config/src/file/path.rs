//! Filesystem path helpers used while following `extends` references.

use crate::{DocsError, DocsResult};

use std::path::{Path, PathBuf};

use super::error::{file_error, invalid_input, not_found};

/// Canonicalise `p`, resolving symlinks into an absolute path.
///
/// On Windows [`dunce`](https://docs.rs/dunce/latest/dunce/) is used so
/// diagnostics do not carry UNC prefixes.
///
/// # Errors
///
/// Returns a [`DocsError::File`] if canonicalisation fails.
pub fn canonicalise(p: &Path) -> DocsResult<PathBuf> {
    #[cfg(windows)]
    {
        dunce::canonicalize(p).map_err(|e| file_error(p, e))
    }
    #[cfg(not(windows))]
    {
        std::fs::canonicalize(p).map_err(|e| file_error(p, e))
    }
}

/// Normalise a canonical path for cycle detection on case-insensitive
/// filesystems. Case-sensitive platforms get the path back unchanged.
pub(super) fn normalise_cycle_key(path: &Path) -> PathBuf {
    #[cfg(any(windows, target_os = "macos"))]
    {
        path.to_str()
            .map_or_else(|| path.to_path_buf(), |text| PathBuf::from(text.to_ascii_lowercase()))
    }

    #[cfg(not(any(windows, target_os = "macos")))]
    {
        path.to_path_buf()
    }
}

/// Resolve an `extends` path relative to the directory of `current_path`
/// and canonicalise it.
///
/// # Errors
///
/// Returns a [`DocsError::File`] when `current_path` has no parent, and a
/// not-found error naming both files when the parent file is missing.
pub(super) fn resolve_base_path(current_path: &Path, base: PathBuf) -> DocsResult<PathBuf> {
    let parent = current_path.parent().ok_or_else(|| {
        invalid_input(
            current_path,
            "cannot determine parent directory of layer file when resolving 'extends'",
        )
    })?;
    let resolved_base = if base.is_absolute() {
        base
    } else {
        canonicalise(parent)?.join(base)
    };
    match canonicalise(&resolved_base) {
        Ok(path) => Ok(path),
        Err(err) => {
            let DocsError::File { source, .. } = err.as_ref() else {
                return Err(err);
            };
            let is_missing = source
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound);
            if !is_missing {
                return Err(err);
            }
            Err(not_found(
                &resolved_base,
                format!(
                    "extended layer file '{}' does not exist (referenced from '{}')",
                    resolved_base.display(),
                    current_path.display()
                ),
            ))
        }
    }
}
