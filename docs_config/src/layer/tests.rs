//! Unit tests for layer construction and setting classification.

use camino::Utf8PathBuf;
use rstest::rstest;
use serde_json::{Value, json};

use super::{ConfigLayer, LayerComposer, LayerProvenance, SettingKind};

#[rstest]
#[case::string(json!("onap"), SettingKind::String)]
#[case::boolean(json!(false), SettingKind::Bool)]
#[case::number(json!(2), SettingKind::Number)]
#[case::strings(json!(["sphinx.ext.intersphinx", "sphinx_tabs.tabs"]), SettingKind::Strings)]
#[case::empty_sequence(json!([]), SettingKind::Strings)]
#[case::records(
    json!([{"name": "PMS API", "page": "offeredapis/pms-api", "embed": true}]),
    SettingKind::Records
)]
#[case::theme_options(
    json!({"style_nav_header_background": "white", "sticky_navigation": "False"}),
    SettingKind::Mapping
)]
#[case::intersphinx(
    json!({"onap-aai": ["https://docs.onap.org/projects/onap-aai/en/oslo", null]}),
    SettingKind::Mapping
)]
#[case::empty_mapping(json!({}), SettingKind::Mapping)]
fn classifies_supported_values(#[case] value: Value, #[case] expected: SettingKind) {
    assert_eq!(SettingKind::of(&value), Ok(expected));
}

#[rstest]
#[case::null(json!(null), "null")]
#[case::mixed_sequence(json!(["a", {"b": "c"}]), "sequences")]
#[case::nested_record(json!([{"name": {"nested": true}}]), "sequences")]
#[case::mapping_with_bool(json!({"sticky_navigation": false}), "mapping values")]
#[case::mapping_with_record(json!({"onap": {"url": "x"}}), "mapping values")]
fn rejects_unsupported_values(#[case] value: Value, #[case] fragment: &str) {
    match SettingKind::of(&value) {
        Ok(kind) => panic!("expected {value} to be rejected, classified as {kind:?}"),
        Err(reason) => assert!(
            reason.contains(fragment),
            "unexpected reason {reason:?}; expected fragment {fragment:?}"
        ),
    }
}

#[test]
fn later_assignment_in_one_layer_wins() {
    let layer = ConfigLayer::from_assignments(
        "conf",
        [
            ("html_extra_path", json!(["offeredapis/openapitoolgen"])),
            ("redoc_uri", json!("https://example.invalid/first.js")),
            ("redoc_uri", json!("https://example.invalid/second.js")),
        ],
    );
    assert_eq!(
        layer.value(),
        &json!({
            "html_extra_path": ["offeredapis/openapitoolgen"],
            "redoc_uri": "https://example.invalid/second.js",
        })
    );
    assert_eq!(layer.provenance(), LayerProvenance::Inline);
}

#[test]
fn file_layer_is_named_after_its_path() {
    let path = Utf8PathBuf::from("docs/conf/oslo.toml");
    let layer = ConfigLayer::file(json!({}), path.clone());
    assert_eq!(layer.name(), "docs/conf/oslo.toml");
    assert_eq!(layer.path(), Some(path.as_path()));
    assert_eq!(layer.provenance(), LayerProvenance::File);
}

#[test]
fn composer_preserves_push_order() {
    let mut composer = LayerComposer::with_capacity(3);
    composer.push_base(json!({"project": "onap"}));
    composer.push_branch("oslo", json!({"release": "oslo"}));
    composer.push_environment(json!({"release": "paris"}));
    assert_eq!(composer.len(), 3);

    let provenances: Vec<LayerProvenance> = composer
        .layers()
        .iter()
        .map(ConfigLayer::provenance)
        .collect();
    assert_eq!(
        provenances,
        vec![
            LayerProvenance::Base,
            LayerProvenance::Branch,
            LayerProvenance::Environment,
        ]
    );
}
