//! Builder that accumulates configuration layers in application order.

use camino::Utf8PathBuf;
use serde_json::Value;

use super::ConfigLayer;

/// Builder that accumulates [`ConfigLayer`] instances.
///
/// Layers are returned in the order they were pushed, which is the order
/// [`crate::resolve`] applies them.
///
/// ```rust
/// use docs_config::{LayerComposer, resolve};
/// use serde_json::json;
///
/// let mut composer = LayerComposer::new();
/// composer.push_base(json!({"project": "onap", "release": "master"}));
/// composer.push_branch("oslo", json!({"release": "oslo"}));
///
/// let store = resolve(composer)?;
/// assert_eq!(store.get("release"), Some(&json!("oslo")));
/// assert_eq!(store.origin("project"), Some("base"));
/// # Ok::<_, std::sync::Arc<docs_config::DocsError>>(())
/// ```
#[derive(Debug, Default)]
pub struct LayerComposer {
    layers: Vec<ConfigLayer>,
}

impl LayerComposer {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Create a composer with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: Vec::with_capacity(capacity),
        }
    }

    /// Push the base layer.
    pub fn push_base(&mut self, value: Value) {
        self.push_layer(ConfigLayer::base(value));
    }

    /// Push a branch override layer.
    pub fn push_branch(&mut self, branch: impl Into<String>, value: Value) {
        self.push_layer(ConfigLayer::branch(branch, value));
    }

    /// Push a layer read from a file.
    pub fn push_file(&mut self, value: Value, path: Utf8PathBuf) {
        self.push_layer(ConfigLayer::file(value, path));
    }

    /// Push an environment layer.
    pub fn push_environment(&mut self, value: Value) {
        self.push_layer(ConfigLayer::environment(value));
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: ConfigLayer) {
        self.layers.push(layer);
    }

    /// Append every layer yielded by `layers`.
    pub fn extend<I>(&mut self, layers: I)
    where
        I: IntoIterator<Item = ConfigLayer>,
    {
        self.layers.extend(layers);
    }

    /// Number of layers accumulated so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` when no layers have been pushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Consume the composer and return the accumulated layers.
    #[must_use]
    pub fn layers(self) -> Vec<ConfigLayer> {
        self.layers
    }
}

impl IntoIterator for LayerComposer {
    type Item = ConfigLayer;
    type IntoIter = std::vec::IntoIter<ConfigLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}
