//! Unit tests for layer resolution semantics.

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::resolve;
use crate::{ConfigLayer, DocsError};

#[fixture]
fn base_and_branch() -> Vec<ConfigLayer> {
    vec![
        ConfigLayer::base(json!({
            "project": "onap",
            "release": "master",
            "extensions": ["sphinx.ext.intersphinx", "sphinx.ext.graphviz"],
            "html_theme_options": {"style_nav_header_background": "white"},
        })),
        ConfigLayer::branch(
            "oslo",
            json!({
                "release": "oslo",
                "extensions": ["sphinxcontrib.redoc"],
                "html_theme_options": {"sticky_navigation": "False"},
            }),
        ),
    ]
}

#[rstest]
fn last_write_wins_across_layers() -> Result<()> {
    let store = resolve([
        ConfigLayer::base(json!({"a": 1, "b": 2})),
        ConfigLayer::branch("override", json!({"b": 3})),
    ])
    .map_err(|err| anyhow!(err.to_string()))?;
    ensure!(
        store.clone().into_value() == json!({"a": 1, "b": 3}),
        "unexpected store {store:?}"
    );
    ensure!(store.origin("a") == Some("base"), "a should come from base");
    ensure!(store.origin("b") == Some("override"), "b should come from override");
    ensure!(store.contains("b") && !store.contains("c"), "contains mismatch");
    let entries: Vec<(&str, &Value)> = store.iter().collect();
    ensure!(
        entries == [("a", &json!(1)), ("b", &json!(3))],
        "iteration should follow name order, got {entries:?}"
    );
    ensure!(
        store.as_map().get("b") == Some(&json!(3)),
        "as_map should expose the resolved mapping"
    );
    Ok(())
}

#[rstest]
fn sequences_and_mappings_are_replaced(base_and_branch: Vec<ConfigLayer>) -> Result<()> {
    let store = resolve(base_and_branch).map_err(|err| anyhow!(err.to_string()))?;
    ensure!(
        store.get("extensions") == Some(&json!(["sphinxcontrib.redoc"])),
        "extensions must be replaced, got {:?}",
        store.get("extensions")
    );
    ensure!(
        store.get("html_theme_options") == Some(&json!({"sticky_navigation": "False"})),
        "mappings must be replaced, got {:?}",
        store.get("html_theme_options")
    );
    ensure!(store.get("project") == Some(&json!("onap")), "project lost");
    Ok(())
}

#[rstest]
fn resolution_is_deterministic(base_and_branch: Vec<ConfigLayer>) -> Result<()> {
    let first = resolve(base_and_branch.clone()).map_err(|err| anyhow!(err.to_string()))?;
    let second = resolve(base_and_branch).map_err(|err| anyhow!(err.to_string()))?;
    ensure!(first == second, "repeated resolution diverged");
    Ok(())
}

#[test]
fn duplicate_within_a_layer_resolves_to_later_value() -> Result<()> {
    let duplicated = ConfigLayer::from_assignments("conf", [("a", json!(1)), ("a", json!(2))]);
    let single = ConfigLayer::inline("conf", json!({"a": 2}));
    let from_duplicate = resolve([duplicated]).map_err(|err| anyhow!(err.to_string()))?;
    let from_single = resolve([single]).map_err(|err| anyhow!(err.to_string()))?;
    ensure!(from_duplicate == from_single, "duplicate assignment should match single");
    Ok(())
}

#[test]
fn empty_input_is_a_config_error() {
    let err = match resolve(Vec::<ConfigLayer>::new()) {
        Ok(store) => panic!("expected empty input to fail, got {store:?}"),
        Err(err) => err,
    };
    assert!(matches!(err.as_ref(), DocsError::EmptyLayers));
    assert!(err.is_config_error());
}

#[rstest]
#[case::array(json!(["project"]), None, "found array")]
#[case::string(json!("project = onap"), None, "found string")]
#[case::null_setting(json!({"project": "onap", "html_logo": null}), Some("html_logo"), "null")]
#[case::mixed_sequence(json!({"redoc": ["PMS API", {"name": "x"}]}), Some("redoc"), "sequences")]
fn malformed_layers_name_layer_and_setting(
    #[case] raw: Value,
    #[case] setting: Option<&str>,
    #[case] fragment: &str,
) {
    let layers = [
        ConfigLayer::base(json!({"project": "onap"})),
        ConfigLayer::branch("oslo", raw),
    ];
    let err = match resolve(layers) {
        Ok(store) => panic!("expected malformed layer to fail, got {store:?}"),
        Err(err) => err,
    };
    match err.as_ref() {
        DocsError::MalformedLayer {
            layer,
            setting: actual,
            message,
        } => {
            assert_eq!(layer, "oslo");
            assert_eq!(actual.as_deref(), setting);
            assert!(message.contains(fragment), "unexpected message {message}");
        }
        other => panic!("expected MalformedLayer, got {other:?}"),
    }
}

#[test]
fn redoc_override_replaces_base_entries() -> Result<()> {
    let store = resolve([
        ConfigLayer::base(json!({
            "project": "onap",
            "redoc": [{"name": "PMS API", "page": "pms-api", "spec": "pms-api.json", "embed": true}],
        })),
        ConfigLayer::branch(
            "override",
            json!({
                "redoc": [{
                    "name": "PMS API V3",
                    "page": "pms-api-v3",
                    "spec": "pms-api-v3.json",
                    "embed": true,
                }],
            }),
        ),
    ])
    .map_err(|err| anyhow!(err.to_string()))?;
    let entries = store
        .get("redoc")
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("redoc missing"))?;
    ensure!(entries.len() == 1, "expected one entry, got {entries:?}");
    ensure!(
        entries.first().and_then(|e| e.get("name")) == Some(&json!("PMS API V3")),
        "unexpected entries {entries:?}"
    );
    Ok(())
}
