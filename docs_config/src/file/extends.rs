//! Parsing of the `extends` key.

use serde_json::Value;

use std::path::{Path, PathBuf};

use crate::{DocsResult, layer::json_type_name};

use super::error::invalid_data;

/// Key naming the parent of a layer file.
pub(super) const EXTENDS_KEY: &str = "extends";

/// Validate and extract the `extends` value from a parsed layer.
///
/// Returns `Ok(None)` when the layer is not a mapping or has no `extends`
/// key. Empty strings and non-string values are rejected.
pub(super) fn get_extends(layer: &Value, current_path: &Path) -> DocsResult<Option<PathBuf>> {
    let Some(declared) = layer.get(EXTENDS_KEY) else {
        return Ok(None);
    };
    let base = declared.as_str().ok_or_else(|| {
        invalid_data(
            current_path,
            format!(
                "'extends' key must be a string, but found type: {}",
                json_type_name(declared)
            ),
        )
    })?;
    if base.is_empty() {
        return Err(invalid_data(
            current_path,
            "'extends' key must be a non-empty string",
        ));
    }
    Ok(Some(PathBuf::from(base)))
}

/// Remove the `extends` key so it does not surface as a setting.
pub(super) fn strip_extends_key(layer: &mut Value) {
    if let Value::Object(map) = layer {
        map.remove(EXTENDS_KEY);
    }
}
