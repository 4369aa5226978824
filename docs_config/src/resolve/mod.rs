//! Resolution of ordered layers into a single flat configuration mapping.

mod store;

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, trace};

use crate::{
    ConfigLayer, DocsError, DocsResult,
    layer::{SettingKind, json_type_name},
};

pub use store::ConfigStore;

/// Resolve `layers` into a [`ConfigStore`].
///
/// Layers apply in iteration order. For every setting of every layer the
/// store's entry is replaced outright: sequences and mappings from a later
/// layer replace earlier ones, they are never appended or deep-merged.
///
/// Resolution is fail-fast. The first malformed layer aborts it and no
/// partially resolved store is returned.
///
/// # Errors
///
/// Returns [`DocsError::EmptyLayers`] when `layers` yields nothing, and
/// [`DocsError::MalformedLayer`] when a layer is not a mapping or holds a
/// value that is not a setting.
///
/// # Examples
///
/// ```rust
/// use docs_config::{ConfigLayer, resolve};
/// use serde_json::json;
///
/// let store = resolve([
///     ConfigLayer::base(json!({"a": 1, "b": 2})),
///     ConfigLayer::branch("oslo", json!({"b": 3})),
/// ])?;
/// assert_eq!(store.into_value(), json!({"a": 1, "b": 3}));
/// # Ok::<_, std::sync::Arc<docs_config::DocsError>>(())
/// ```
pub fn resolve<I>(layers: I) -> DocsResult<ConfigStore>
where
    I: IntoIterator<Item = ConfigLayer>,
{
    let mut store = ConfigStore::default();
    let mut applied = 0_usize;
    for layer in layers {
        apply_layer(&mut store, layer)?;
        applied += 1;
    }
    if applied == 0 {
        return Err(Arc::new(DocsError::EmptyLayers));
    }
    info!(
        layers = applied,
        settings = store.len(),
        "resolved documentation configuration"
    );
    Ok(store)
}

fn apply_layer(store: &mut ConfigStore, layer: ConfigLayer) -> DocsResult<()> {
    let provenance = layer.provenance();
    let (name, raw) = layer.into_parts();
    let settings = match raw {
        Value::Object(map) => map,
        other => {
            return Err(Arc::new(DocsError::malformed(
                &name,
                None,
                format!(
                    "expected a mapping of settings, found {}",
                    json_type_name(&other)
                ),
            )));
        }
    };
    debug!(
        layer = %name,
        ?provenance,
        settings = settings.len(),
        "applying configuration layer"
    );
    for (setting, assigned) in settings {
        SettingKind::of(&assigned).map_err(|reason| {
            Arc::new(DocsError::malformed(&name, Some(setting.as_str()), reason))
        })?;
        if let Some(previous) = store.insert(setting.clone(), assigned, &name) {
            trace!(setting = %setting, layer = %name, %previous, "setting overridden");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
