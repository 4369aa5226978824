//! Environment-variable layers.

use figment::{providers::Env, value::Value as EnvValue};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{ConfigLayer, DocsResult, DocsResultExt};

/// Prefix used when the loader is not given one.
pub const DEFAULT_ENV_PREFIX: &str = "DOCS_";

/// Collect variables starting with `prefix` into an environment layer.
///
/// The prefix is stripped and the remaining key lower-cased, so
/// `DOCS_RELEASE=oslo` sets `release`. `true`/`false` become booleans and
/// bracketed or braced values such as `[a, b]` become sequences or
/// mappings. Everything else stays the string it was declared as, so
/// `DOCS_VERSION=1.10` keeps its trailing zero.
///
/// Returns `Ok(None)` when no variable carries the prefix.
///
/// # Errors
///
/// Returns [`crate::DocsError::Deserialize`] when a structured value cannot
/// be represented as a setting.
pub fn environment_layer(prefix: &str) -> DocsResult<Option<ConfigLayer>> {
    let mut settings = Map::new();
    for (key, raw) in Env::prefixed(prefix).iter() {
        settings.insert(key.as_str().to_owned(), parse_value(&raw)?);
    }
    if settings.is_empty() {
        return Ok(None);
    }
    debug!(prefix, settings = settings.len(), "collected environment layer");
    Ok(Some(ConfigLayer::environment(Value::Object(settings))))
}

fn parse_value(raw: &str) -> DocsResult<Value> {
    let Ok(parsed) = raw.trim().parse::<EnvValue>();
    match parsed {
        EnvValue::Bool(_, flag) => Ok(Value::Bool(flag)),
        EnvValue::Array(..) | EnvValue::Dict(..) => serde_json::to_value(&parsed).into_docs(),
        _ => Ok(Value::String(raw.to_owned())),
    }
}
