//! The resolved configuration mapping.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{DocsResult, DocsResultExt, settings::DocsSettings};

/// Final mapping from setting name to value, produced by [`crate::resolve`].
///
/// Each setting holds the value from the last layer that defined it, and the
/// store remembers which layer that was.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigStore {
    settings: Map<String, Value>,
    origins: BTreeMap<String, String>,
}

impl ConfigStore {
    /// Look up the final value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.settings.get(name)
    }

    /// Name of the layer that supplied the final value of `name`.
    #[must_use]
    pub fn origin(&self, name: &str) -> Option<&str> {
        self.origins.get(name).map(String::as_str)
    }

    /// Returns `true` when `name` was defined by any layer.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.settings.contains_key(name)
    }

    /// Number of resolved settings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Returns `true` when no layer defined any setting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Iterate over resolved settings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.settings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Borrow the resolved mapping.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.settings
    }

    /// Consume the store, returning the resolved mapping as a JSON object.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.settings)
    }

    /// Deserialise the resolved mapping into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DocsError::Deserialize`] when the mapping does not fit `T`.
    pub fn extract<T: DeserializeOwned>(&self) -> DocsResult<T> {
        serde_json::from_value(Value::Object(self.settings.clone())).into_docs()
    }

    /// Build the typed [`DocsSettings`] view of this store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DocsError::Deserialize`] when a required setting is
    /// missing or has the wrong shape.
    pub fn settings(&self) -> DocsResult<DocsSettings> {
        self.extract()
    }

    /// Build the typed view and run [`DocsSettings::validate`] on it.
    ///
    /// # Errors
    ///
    /// Returns the deserialisation error, or every validation violation.
    pub fn validated_settings(&self) -> DocsResult<DocsSettings> {
        let settings = self.settings()?;
        settings.validate()?;
        Ok(settings)
    }

    pub(super) fn insert(&mut self, name: String, value: Value, origin: &str) -> Option<Value> {
        self.origins.insert(name.clone(), origin.to_owned());
        self.settings.insert(name, value)
    }
}
