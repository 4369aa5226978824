//! Primary error enum for layer resolution flows.

use figment::Error as FigmentError;
use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors that can occur while loading or resolving configuration layers.
///
/// Every variant is fatal to the documentation build: a partially resolved
/// configuration is never returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocsError {
    /// Resolution was asked to run without any layers.
    #[error("cannot resolve configuration: no layers were supplied")]
    EmptyLayers,

    /// A layer is not a mapping, or one of its settings has an unsupported shape.
    #[error("malformed layer '{layer}'{}: {message}", setting_suffix(.setting))]
    MalformedLayer {
        /// Name of the offending layer.
        layer: String,
        /// Setting that failed classification, when the failure is per-setting.
        setting: Option<String>,
        /// Human-readable explanation of the failure.
        message: String,
    },

    /// Error originating from a layer file.
    #[error("configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: std::path::PathBuf,
        /// Underlying error reported while reading or parsing the file.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Cycle detected while following `extends` references.
    #[error("cyclic extends detected: {cycle}")]
    CyclicExtends {
        /// Chain of files participating in the cycle.
        cycle: String,
    },

    /// Error while gathering a layer from a Figment provider.
    #[error("failed to gather configuration: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// The resolved mapping could not be converted into typed settings.
    #[error("failed to build settings from resolved configuration: {source}")]
    Deserialize {
        /// Underlying deserialisation failure.
        #[source]
        source: serde_json::Error,
    },

    /// A resolved setting holds a value the renderer cannot use.
    #[error("validation failed for '{key}': {message}")]
    Validation {
        /// Setting that failed validation.
        key: String,
        /// Human-readable explanation of the validation failure.
        message: String,
    },

    /// Multiple errors were collected in a single pass.
    #[error("multiple configuration errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}

#[expect(
    clippy::ref_option,
    reason = "thiserror passes fields to format helpers by reference"
)]
fn setting_suffix(setting: &Option<String>) -> String {
    setting
        .as_ref()
        .map_or_else(String::new, |name| format!(" (setting '{name}')"))
}
