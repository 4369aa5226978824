//! Classification of setting values.

use serde_json::{Map, Value};

/// Shape of a setting value.
///
/// Every value stored in a layer must fall into exactly one of these kinds;
/// anything else makes the layer malformed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettingKind {
    /// A string such as `project` or `redoc_uri`.
    String,
    /// A boolean such as `html_show_sphinx`.
    Bool,
    /// A number such as `numfig_secnum_depth`.
    Number,
    /// An ordered sequence of strings such as `extensions`. Empty sequences
    /// classify here.
    Strings,
    /// An ordered sequence of flat records such as `redoc`.
    Records,
    /// A mapping from string to string or tuple, such as
    /// `intersphinx_mapping`. Which value shape a given mapping takes is left
    /// to its consumer: `html_theme_options` only takes strings.
    Mapping,
}

impl SettingKind {
    /// Classify `value`.
    ///
    /// # Errors
    ///
    /// Returns a static description of the problem when `value` does not fit
    /// any kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docs_config::layer::SettingKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(SettingKind::of(&json!(["a", "b"])), Ok(SettingKind::Strings));
    /// assert_eq!(
    ///     SettingKind::of(&json!({"onap": ["https://docs.onap.org", null]})),
    ///     Ok(SettingKind::Mapping)
    /// );
    /// assert!(SettingKind::of(&json!(null)).is_err());
    /// ```
    pub fn of(value: &Value) -> Result<Self, &'static str> {
        match value {
            Value::String(_) => Ok(Self::String),
            Value::Bool(_) => Ok(Self::Bool),
            Value::Number(_) => Ok(Self::Number),
            Value::Null => Err("null is not a setting value"),
            Value::Array(items) => classify_sequence(items),
            Value::Object(entries) => classify_mapping(entries),
        }
    }
}

fn classify_sequence(items: &[Value]) -> Result<SettingKind, &'static str> {
    if items.iter().all(Value::is_string) {
        return Ok(SettingKind::Strings);
    }
    if items.iter().all(is_record) {
        return Ok(SettingKind::Records);
    }
    Err("sequences must hold only strings or only flat records")
}

fn classify_mapping(entries: &Map<String, Value>) -> Result<SettingKind, &'static str> {
    if entries.values().all(is_mapping_entry) {
        Ok(SettingKind::Mapping)
    } else {
        Err("mapping values must be strings or tuples of strings")
    }
}

fn is_record(item: &Value) -> bool {
    item.as_object()
        .is_some_and(|fields| fields.values().all(is_scalar))
}

const fn is_scalar(item: &Value) -> bool {
    matches!(item, Value::String(_) | Value::Bool(_) | Value::Number(_))
}

// Tuples may carry `null` members, e.g. an intersphinx `(url, None)` pair.
fn is_mapping_entry(item: &Value) -> bool {
    match item {
        Value::String(_) => true,
        Value::Array(members) => members.iter().all(|m| m.is_string() || m.is_null()),
        _ => false,
    }
}

/// Name of the JSON type of `value`, for diagnostics.
pub(crate) const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
