//! Configuration layers and the values they carry.
//!
//! A layer is one source's declarations: the base configuration, a branch or
//! release override, a file in an `extends` chain, or the environment. Layers
//! transport their settings as a [`serde_json::Value`] mapping so tests and
//! callers can compose deterministic inputs without touching the filesystem.

mod composer;
mod kind;

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};

pub use composer::LayerComposer;
pub use kind::SettingKind;
pub(crate) use kind::json_type_name;

/// Where a layer's settings came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum LayerProvenance {
    /// The shared base configuration.
    Base,
    /// A branch- or release-specific override.
    Branch,
    /// Settings read from a layer file.
    File,
    /// Settings collected from environment variables.
    Environment,
    /// Settings assembled in code.
    Inline,
}

/// One source of configuration settings, applied in a defined order.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigLayer {
    provenance: LayerProvenance,
    name: String,
    value: Value,
    path: Option<Utf8PathBuf>,
}

impl ConfigLayer {
    fn new(provenance: LayerProvenance, name: impl Into<String>, value: Value) -> Self {
        Self {
            provenance,
            name: name.into(),
            value,
            path: None,
        }
    }

    /// Construct the base layer.
    #[must_use]
    pub fn base(value: Value) -> Self {
        Self::new(LayerProvenance::Base, "base", value)
    }

    /// Construct an override layer for the named branch.
    #[must_use]
    pub fn branch(branch: impl Into<String>, value: Value) -> Self {
        Self::new(LayerProvenance::Branch, branch, value)
    }

    /// Construct a layer read from `path`. The layer is named after the path.
    #[must_use]
    pub fn file(value: Value, path: Utf8PathBuf) -> Self {
        Self {
            provenance: LayerProvenance::File,
            name: path.to_string(),
            value,
            path: Some(path),
        }
    }

    /// Construct a layer from environment variables.
    #[must_use]
    pub fn environment(value: Value) -> Self {
        Self::new(LayerProvenance::Environment, "environment", value)
    }

    /// Construct a named layer assembled in code.
    #[must_use]
    pub fn inline(name: impl Into<String>, value: Value) -> Self {
        Self::new(LayerProvenance::Inline, name, value)
    }

    /// Build a layer by applying `assignments` in order.
    ///
    /// Assigning the same setting twice keeps the later value, exactly as
    /// sequential assignment in a single source file would.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docs_config::ConfigLayer;
    /// use serde_json::json;
    ///
    /// let layer = ConfigLayer::from_assignments(
    ///     "conf",
    ///     [("redoc_uri", json!("first")), ("redoc_uri", json!("second"))],
    /// );
    /// assert_eq!(layer.value(), &json!({"redoc_uri": "second"}));
    /// ```
    #[must_use]
    pub fn from_assignments<I, K>(name: impl Into<String>, assignments: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut settings = Map::new();
        for (key, assigned) in assignments {
            settings.insert(key.into(), assigned);
        }
        Self::new(LayerProvenance::Inline, name, Value::Object(settings))
    }

    /// Returns the provenance of the layer.
    #[must_use]
    pub const fn provenance(&self) -> LayerProvenance {
        self.provenance
    }

    /// Returns the layer's name, used in diagnostics and origin tracking.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the associated path if this layer was read from a file.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Borrow the layer's raw value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Consume the layer, returning its name and raw value.
    #[must_use]
    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.value)
    }
}

#[cfg(test)]
mod tests;
