//! Format-specific parsing of layer files.

use figment::{
    Figment,
    providers::{Format, Toml},
};
use serde_json::Value;

use std::path::Path;

use crate::DocsResult;

use super::error::file_error;

/// Parse layer contents according to the file extension.
///
/// `.json` parses as JSON, `.yaml`/`.yml` as YAML (feature `yaml`), and
/// anything else as TOML.
///
/// # Errors
///
/// Returns a [`crate::DocsError::File`] when the contents fail to parse or
/// the format's feature is disabled.
pub(super) fn parse_layer_by_format(path: &Path, data: &str) -> DocsResult<Value> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => serde_json::from_str(data).map_err(|e| file_error(path, e)),
        Some("yaml" | "yml") => parse_yaml(path, data),
        _ => {
            // Validate with `toml` first so syntax errors carry this file's path.
            toml::from_str::<toml::Value>(data).map_err(|e| file_error(path, e))?;
            Figment::from(Toml::string(data))
                .extract()
                .map_err(|e| file_error(path, e))
        }
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml(path: &Path, data: &str) -> DocsResult<Value> {
    serde_saphyr::from_str_with_options(
        data,
        serde_saphyr::Options {
            strict_booleans: true,
            ..serde_saphyr::Options::default()
        },
    )
    .map_err(|e| file_error(path, e))
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(path: &Path, _data: &str) -> DocsResult<Value> {
    Err(file_error(
        path,
        std::io::Error::other(
            "yaml feature disabled: enable the 'yaml' feature to support this file format",
        ),
    ))
}
