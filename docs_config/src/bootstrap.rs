//! Hand-off to the external documentation renderer.

use tracing::info;

use crate::DocsSettings;

/// Renderer-side registry for static assets.
///
/// Implemented by the host that renders the documentation; this crate only
/// calls into it.
pub trait AssetRegistry {
    /// Register the asset at `path`, relative to the static asset directories.
    fn register_asset(&mut self, path: &str);
}

impl AssetRegistry for Vec<String> {
    fn register_asset(&mut self, path: &str) {
        self.push(path.to_owned());
    }
}

/// Initialise `registry` from resolved settings.
///
/// Registers [`DocsSettings::stylesheet`] exactly once. Call it once, after
/// resolution and before rendering.
///
/// ```rust
/// use docs_config::{ConfigLayer, bootstrap, resolve};
/// use serde_json::json;
///
/// let store = resolve([ConfigLayer::base(json!({
///     "project": "onap", "release": "oslo", "version": "oslo",
/// }))])?;
/// let mut assets: Vec<String> = Vec::new();
/// bootstrap(&store.settings()?, &mut assets);
/// assert_eq!(assets, ["css/ribbon.css"]);
/// # Ok::<_, std::sync::Arc<docs_config::DocsError>>(())
/// ```
pub fn bootstrap<R>(settings: &DocsSettings, registry: &mut R)
where
    R: AssetRegistry + ?Sized,
{
    info!(stylesheet = %settings.stylesheet, "registering stylesheet with renderer");
    registry.register_asset(&settings.stylesheet);
}
