//! Builder that gathers layers from files, code and the environment.

use std::path::PathBuf;

use crate::{
    ConfigLayer, ConfigStore, DocsResult, LayerComposer,
    env::{DEFAULT_ENV_PREFIX, environment_layer},
    file::load_layer_file,
    resolve,
};

/// Builder describing where a documentation build's layers come from.
///
/// Layers are composed in a fixed order: the base file chain, each override
/// file chain in the order added, inline layers in the order added, then the
/// environment.
///
/// # Examples
///
/// ```rust,no_run
/// use docs_config::LayerLoader;
///
/// # fn run() -> docs_config::DocsResult<()> {
/// let store = LayerLoader::new()
///     .base_file("docs/conf/base.toml")
///     .override_file("docs/conf/oslo.toml")
///     .load()?;
/// let settings = store.validated_settings()?;
/// println!("{} {}", settings.project, settings.release);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LayerLoader {
    base: Option<PathBuf>,
    overrides: Vec<PathBuf>,
    inline: Vec<ConfigLayer>,
    env_prefix: Option<String>,
}

impl Default for LayerLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerLoader {
    /// Creates a loader that reads the environment with [`DEFAULT_ENV_PREFIX`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: None,
            overrides: Vec::new(),
            inline: Vec::new(),
            env_prefix: Some(String::from(DEFAULT_ENV_PREFIX)),
        }
    }

    /// Sets the base layer file.
    #[must_use]
    pub fn base_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.base = Some(path.into());
        self
    }

    /// Appends an override layer file, applied after those already added.
    #[must_use]
    pub fn override_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.overrides.push(path.into());
        self
    }

    /// Appends a layer assembled in code.
    #[must_use]
    pub fn layer(mut self, layer: ConfigLayer) -> Self {
        self.inline.push(layer);
        self
    }

    /// Replaces the environment variable prefix.
    #[must_use]
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Skips the environment layer entirely.
    #[must_use]
    pub fn without_environment(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Gather every configured layer in application order.
    ///
    /// # Errors
    ///
    /// Returns the first file or environment error encountered.
    pub fn compose(&self) -> DocsResult<LayerComposer> {
        let mut composer = LayerComposer::with_capacity(self.overrides.len() + 2);
        for path in self.base.iter().chain(&self.overrides) {
            composer.extend(load_layer_file(path)?);
        }
        composer.extend(self.inline.iter().cloned());
        if let Some(prefix) = self.env_prefix.as_deref()
            && let Some(layer) = environment_layer(prefix)?
        {
            composer.push_layer(layer);
        }
        Ok(composer)
    }

    /// Compose and resolve the configured layers.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Self::compose`] or [`crate::resolve`],
    /// including [`crate::DocsError::EmptyLayers`] when nothing was
    /// configured and the environment is empty.
    pub fn load(&self) -> DocsResult<ConfigStore> {
        resolve(self.compose()?)
    }
}
