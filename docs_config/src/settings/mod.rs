//! Typed view over a resolved [`crate::ConfigStore`].
//!
//! The raw store keeps every setting any layer declared. [`DocsSettings`]
//! picks out the ones a documentation renderer needs and applies the
//! defaults a Sphinx build would otherwise assume. Settings it does not know
//! about stay available through [`crate::ConfigStore::get`].

mod intersphinx;
mod redoc;
mod validate;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use intersphinx::IntersphinxTarget;
pub use redoc::RedocEntry;
pub use validate::REDOC_EXTENSION;

/// Resolved settings consumed by the external documentation renderer.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DocsSettings {
    /// Project name, e.g. `onap`.
    pub project: String,
    /// Full release label.
    pub release: String,
    /// Short version label.
    pub version: String,
    /// Documentation branch used to build cross-project links. Falls back to
    /// [`Self::version`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Author shown in page footers.
    #[serde(default)]
    pub author: String,
    /// Copyright notice.
    #[serde(default)]
    pub copyright: String,
    /// Syntax-highlighting style.
    #[serde(default = "default_pygments_style")]
    pub pygments_style: String,
    /// HTML theme name.
    #[serde(default = "default_html_theme")]
    pub html_theme: String,
    /// Theme options, passed through to the theme verbatim. Values must be
    /// strings; a tuple value resolves but fails to build this view.
    #[serde(default)]
    pub html_theme_options: BTreeMap<String, String>,
    /// Logo path relative to the documentation source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_logo: Option<String>,
    /// Favicon path relative to the documentation source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_favicon: Option<String>,
    /// Directories holding static assets.
    #[serde(default)]
    pub html_static_path: Vec<String>,
    /// Directories copied verbatim into the output tree.
    #[serde(default)]
    pub html_extra_path: Vec<String>,
    /// Whether pages advertise the generator in their footer.
    #[serde(default = "default_true")]
    pub html_show_sphinx: bool,
    /// `strftime` format for the "last updated" footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_last_updated_fmt: Option<String>,
    /// Renderer plugin identifiers, in load order.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// OpenAPI documents to render as Redoc pages.
    #[serde(default)]
    pub redoc: Vec<RedocEntry>,
    /// Location of the Redoc standalone bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redoc_uri: Option<String>,
    /// Cross-reference targets keyed by project name. May be empty.
    #[serde(default)]
    pub intersphinx_mapping: BTreeMap<String, IntersphinxTarget>,
    /// Root URL of the published documentation of sibling projects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    /// Name of the root document.
    #[serde(default = "default_master_doc")]
    pub master_doc: String,
    /// Glob patterns excluded from the source tree.
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
    /// Word list consulted by the spelling checker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_word_list_filename: Option<String>,
    /// Language used by the spelling checker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_lang: Option<String>,
    /// URLs and paths, as regular expressions, the link checker skips.
    #[serde(default)]
    pub linkcheck_ignore: Vec<String>,
    /// Stylesheet registered with the renderer during bootstrap.
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
}

impl DocsSettings {
    /// Branch used for cross-project links: `branch` when set, else `version`.
    #[must_use]
    pub fn effective_branch(&self) -> &str {
        self.branch.as_deref().unwrap_or(&self.version)
    }

    /// Returns `true` when `extension` is enabled.
    #[must_use]
    pub fn has_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| e == extension)
    }

    /// Build the intersphinx target for a sibling `project` published under
    /// [`Self::doc_url`] on the effective branch.
    ///
    /// Returns `None` when `doc_url` is unset.
    #[must_use]
    pub fn sibling_target(&self, project: &str) -> Option<IntersphinxTarget> {
        self.doc_url
            .as_deref()
            .map(|root| IntersphinxTarget::for_project(root, project, self.effective_branch()))
    }
}

fn default_pygments_style() -> String {
    String::from("sphinx")
}

fn default_html_theme() -> String {
    String::from("sphinx_rtd_theme")
}

fn default_master_doc() -> String {
    String::from("index")
}

fn default_stylesheet() -> String {
    String::from("css/ribbon.css")
}

const fn default_true() -> bool {
    true
}
