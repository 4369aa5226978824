//! Tests covering `extends` parsing and base path resolution.

use super::super::extends::{get_extends, strip_extends_key};
use super::super::path::resolve_base_path;
use super::{to_anyhow, with_jail};
use crate::{DocsError, file::canonicalise};
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

enum ExtCase {
    Ok(Option<PathBuf>),
    Err(&'static str),
}

#[rstest]
#[case(json!({"extends": "base.toml"}), ExtCase::Ok(Some(PathBuf::from("base.toml"))))]
#[case(json!({"project": "onap"}), ExtCase::Ok(None))]
#[case(json!(["not", "a", "mapping"]), ExtCase::Ok(None))]
#[case(json!({"extends": 1}), ExtCase::Err("must be a string, but found type: number"))]
#[case(json!({"extends": ["base.toml"]}), ExtCase::Err("found type: array"))]
#[case(json!({"extends": ""}), ExtCase::Err("non-empty"))]
fn get_extends_cases(#[case] layer: Value, #[case] expected: ExtCase) -> Result<()> {
    match expected {
        ExtCase::Ok(exp) => {
            let ext = to_anyhow(get_extends(&layer, Path::new("oslo.toml")))?;
            ensure!(ext == exp, "unexpected extends {ext:?}; expected {exp:?}");
        }
        ExtCase::Err(msg) => match get_extends(&layer, Path::new("oslo.toml")) {
            Ok(value) => return Err(anyhow!("expected failure containing {msg}, got {value:?}")),
            Err(err) => {
                let DocsError::File { path, source } = err.as_ref() else {
                    return Err(anyhow!("expected DocsError::File, got {err:?}"));
                };
                ensure!(path.ends_with("oslo.toml"), "unexpected path {path:?}");
                ensure!(
                    source.to_string().contains(msg),
                    "unexpected error {source}; expected fragment {msg}"
                );
            }
        },
    }
    Ok(())
}

#[test]
fn strip_extends_removes_only_the_extends_key() {
    let mut layer = json!({"extends": "base.toml", "release": "oslo"});
    strip_extends_key(&mut layer);
    assert_eq!(layer, json!({"release": "oslo"}));
}

#[rstest]
#[case::relative(false)]
#[case::absolute(true)]
fn resolve_base_path_resolves(#[case] is_abs: bool) -> Result<()> {
    with_jail(|j| {
        j.create_file("base.toml", "")?;
        let root = to_anyhow(canonicalise(Path::new(".")))?;
        let current = root.join("oslo.toml");
        let base = if is_abs {
            root.join("base.toml")
        } else {
            PathBuf::from("base.toml")
        };
        let resolved = to_anyhow(resolve_base_path(&current, base))?;
        ensure!(
            resolved == root.join("base.toml"),
            "unexpected resolved path {resolved:?}"
        );
        Ok(())
    })
}

#[test]
fn resolve_base_path_reports_missing_parent_file() -> Result<()> {
    with_jail(|_| {
        let root = to_anyhow(canonicalise(Path::new(".")))?;
        let current = root.join("oslo.toml");
        let err = match resolve_base_path(&current, PathBuf::from("missing.toml")) {
            Ok(path) => return Err(anyhow!("expected failure, got {path:?}")),
            Err(err) => err,
        };
        let message = err.to_string();
        ensure!(message.contains("does not exist"), "unexpected error {message}");
        ensure!(message.contains("oslo.toml"), "error should name the child: {message}");
        Ok(())
    })
}

#[test]
fn resolve_base_path_errors_without_parent_directory() -> Result<()> {
    match resolve_base_path(Path::new(""), PathBuf::from("base.toml")) {
        Ok(path) => Err(anyhow!("expected failure, got {path:?}")),
        Err(err) => {
            ensure!(
                err.to_string().contains("cannot determine parent directory"),
                "unexpected error {err}"
            );
            Ok(())
        }
    }
}
