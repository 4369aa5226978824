//! Post-resolution checks on the typed settings.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use crate::{DocsError, DocsResult};

use super::DocsSettings;

/// Extension that renders Redoc pages.
pub const REDOC_EXTENSION: &str = "sphinxcontrib.redoc";

impl DocsSettings {
    /// Check the settings a renderer cannot work without.
    ///
    /// Every violation is collected before returning so one build run
    /// reports all of them.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::Validation`] for a single violation and
    /// [`DocsError::Aggregate`] when there are several.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docs_config::{ConfigLayer, resolve};
    /// use serde_json::json;
    ///
    /// let store = resolve([ConfigLayer::base(json!({
    ///     "project": "onap",
    ///     "release": "oslo",
    ///     "version": "",
    /// }))])?;
    /// let err = store.settings()?.validate().unwrap_err();
    /// assert!(err.to_string().contains("'version'"));
    /// # Ok::<_, std::sync::Arc<docs_config::DocsError>>(())
    /// ```
    pub fn validate(&self) -> DocsResult<()> {
        let mut errors = Vec::new();
        for (key, value) in [
            ("project", &self.project),
            ("release", &self.release),
            ("version", &self.version),
            ("master_doc", &self.master_doc),
        ] {
            if value.trim().is_empty() {
                errors.push(DocsError::validation(key, "must not be empty"));
            }
        }
        self.validate_redoc(&mut errors);
        match DocsError::try_aggregate(errors) {
            Some(err) => Err(Arc::new(err)),
            None => Ok(()),
        }
    }

    fn validate_redoc(&self, errors: &mut Vec<DocsError>) {
        if self.redoc.is_empty() {
            return;
        }
        if self.redoc_uri.as_deref().is_none_or(|uri| uri.trim().is_empty()) {
            errors.push(DocsError::validation(
                "redoc_uri",
                "must be set when redoc pages are declared",
            ));
        }
        if !self.has_extension(REDOC_EXTENSION) {
            errors.push(DocsError::validation(
                "extensions",
                format!("must include '{REDOC_EXTENSION}' when redoc pages are declared"),
            ));
        }
        let mut pages: HashMap<&str, usize> = HashMap::new();
        for (index, entry) in self.redoc.iter().enumerate() {
            for (field, value) in [
                ("name", &entry.name),
                ("page", &entry.page),
                ("spec", &entry.spec),
            ] {
                if value.trim().is_empty() {
                    errors.push(DocsError::validation(
                        format!("redoc[{index}].{field}"),
                        "must not be empty",
                    ));
                }
            }
            match pages.entry(entry.page.as_str()) {
                Entry::Occupied(first) => errors.push(DocsError::validation(
                    format!("redoc[{index}].page"),
                    format!(
                        "duplicates the page of redoc[{}] ('{}')",
                        first.get(),
                        entry.page
                    ),
                )),
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
        }
    }
}
