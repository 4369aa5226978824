//! Cross-reference targets for the intersphinx mapping.

use serde::{Deserialize, Serialize};

/// Where the published documentation of another project lives.
///
/// Declared as a string or as a `[uri, inventory]` tuple whose inventory may
/// be `null`; serialises back as the tuple form.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(try_from = "RawTarget", into = "(String, Option<String>)")]
pub struct IntersphinxTarget {
    /// Base URI of the published documentation.
    pub uri: String,
    /// Explicit inventory location; `None` means `<uri>/objects.inv`.
    pub inventory: Option<String>,
}

impl IntersphinxTarget {
    /// Target for `project` published under `doc_url` on `branch`.
    ///
    /// ```rust
    /// use docs_config::settings::IntersphinxTarget;
    ///
    /// let target = IntersphinxTarget::for_project(
    ///     "https://docs.onap.org/projects",
    ///     "onap-aai-aai-common",
    ///     "oslo",
    /// );
    /// assert_eq!(
    ///     target.uri,
    ///     "https://docs.onap.org/projects/onap-aai-aai-common/en/oslo"
    /// );
    /// assert!(target.inventory.is_none());
    /// ```
    #[must_use]
    pub fn for_project(doc_url: &str, project: &str, branch: &str) -> Self {
        Self {
            uri: format!("{}/{project}/en/{branch}", doc_url.trim_end_matches('/')),
            inventory: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTarget {
    Uri(String),
    Tuple(Vec<Option<String>>),
}

impl TryFrom<RawTarget> for IntersphinxTarget {
    type Error = String;

    fn try_from(raw: RawTarget) -> Result<Self, Self::Error> {
        match raw {
            RawTarget::Uri(uri) => Ok(Self {
                uri,
                inventory: None,
            }),
            RawTarget::Tuple(members) => match members.as_slice() {
                [Some(uri)] => Ok(Self {
                    uri: uri.clone(),
                    inventory: None,
                }),
                [Some(uri), inventory] => Ok(Self {
                    uri: uri.clone(),
                    inventory: inventory.clone(),
                }),
                _ => Err(String::from(
                    "intersphinx target must be [uri] or [uri, inventory] with a non-null uri",
                )),
            },
        }
    }
}

impl From<IntersphinxTarget> for (String, Option<String>) {
    fn from(target: IntersphinxTarget) -> Self {
        (target.uri, target.inventory)
    }
}
