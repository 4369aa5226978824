//! Loading entrypoint for layer files and their `extends` chains.

use camino::Utf8PathBuf;
use tracing::debug;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{ConfigLayer, DocsError, DocsResult};

use super::error::{file_error, invalid_input, not_found};
use super::extends::{get_extends, strip_extends_key};
use super::parser::parse_layer_by_format;
use super::path::{canonicalise, normalise_cycle_key, resolve_base_path};

/// Load the layer file at `path` together with the files it extends.
///
/// Layers are returned ancestor-first: the root of the `extends` chain comes
/// first and the file at `path` last, each as its own
/// [`crate::LayerProvenance::File`] layer. The `extends` key itself is
/// stripped from every layer.
///
/// # Examples
///
/// ```rust,no_run
/// use docs_config::{file::load_layer_file, resolve};
/// use std::path::Path;
///
/// # fn run() -> docs_config::DocsResult<()> {
/// let layers = load_layer_file(Path::new("docs/conf/oslo.toml"))?;
/// let store = resolve(layers)?;
/// println!("building {} docs", store.settings()?.project);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns a [`DocsError::File`] when a file is missing, unreadable or fails
/// to parse, or when `extends` is malformed, and
/// [`DocsError::CyclicExtends`] when the chain loops.
pub fn load_layer_file(path: &Path) -> DocsResult<Vec<ConfigLayer>> {
    if !path.is_file() {
        return Err(not_found(path, "layer file does not exist"));
    }
    let mut visited = HashSet::new();
    let mut stack = Vec::new();
    let mut layers = Vec::new();
    load_chain(path, &mut visited, &mut stack, &mut layers)?;
    Ok(layers)
}

fn load_chain(
    path: &Path,
    visited: &mut HashSet<PathBuf>,
    stack: &mut Vec<PathBuf>,
    layers: &mut Vec<ConfigLayer>,
) -> DocsResult<()> {
    let canonical = canonicalise(path)?;
    let normalised = normalise_cycle_key(&canonical);
    if !visited.insert(normalised.clone()) {
        let mut cycle: Vec<String> = stack.iter().map(|p| p.display().to_string()).collect();
        cycle.push(canonical.display().to_string());
        return Err(Arc::new(DocsError::CyclicExtends {
            cycle: cycle.join(" -> "),
        }));
    }
    stack.push(canonical.clone());
    let result = load_file_and_parents(&canonical, visited, stack, layers);
    visited.remove(&normalised);
    stack.pop();
    result
}

fn load_file_and_parents(
    canonical: &Path,
    visited: &mut HashSet<PathBuf>,
    stack: &mut Vec<PathBuf>,
    layers: &mut Vec<ConfigLayer>,
) -> DocsResult<()> {
    let data = std::fs::read_to_string(canonical).map_err(|e| file_error(canonical, e))?;
    let mut value = parse_layer_by_format(canonical, &data)?;

    if let Some(base) = get_extends(&value, canonical)? {
        let parent = resolve_base_path(canonical, base)?;
        if !parent.is_file() {
            return Err(invalid_input(
                &parent,
                "extended path is not a regular file",
            ));
        }
        load_chain(&parent, visited, stack, layers)?;
    }
    strip_extends_key(&mut value);

    let utf8_path = to_utf8_path(canonical);
    debug!(path = %utf8_path, depth = stack.len(), "loaded layer file");
    layers.push(ConfigLayer::file(value, utf8_path));
    Ok(())
}

/// Convert a canonical path to a UTF-8 path, falling back to lossy conversion.
fn to_utf8_path(canonical: &Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(canonical.to_path_buf())
        .unwrap_or_else(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()))
}
