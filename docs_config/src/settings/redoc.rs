//! Redoc page declarations.

use serde::{Deserialize, Serialize};

/// Declares that an OpenAPI/Swagger document is rendered into a page.
///
/// Entries are read-only once the configuration is resolved.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RedocEntry {
    /// Page title.
    pub name: String,
    /// Output path slug, e.g. `offeredapis/pms-api`.
    pub page: String,
    /// Path to the OpenAPI document, relative to the documentation source.
    pub spec: String,
    /// Whether the document is embedded in the generated page.
    #[serde(default)]
    pub embed: bool,
}

impl RedocEntry {
    /// Construct an entry.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        page: impl Into<String>,
        spec: impl Into<String>,
        embed: bool,
    ) -> Self {
        Self {
            name: name.into(),
            page: page.into(),
            spec: spec.into(),
            embed,
        }
    }

    /// File name of the generated page, e.g. `pms-api.html`.
    #[must_use]
    pub fn output_file_name(&self) -> String {
        let slug = self.page.rsplit('/').next().unwrap_or(&self.page);
        format!("{slug}.html")
    }
}
