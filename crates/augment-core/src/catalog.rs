//! Catalog of recommended entries keyed by detected attribute.
//!
//! The catalog file maps an attribute (a language name such as `python`) to
//! the repo blocks recommended when that attribute is detected:
//!
//! ```yaml
//! hooks:
//!   python:
//!   - repo: https://github.com/psf/black
//!     rev: 22.10.0
//!     hooks:
//!     - id: black
//!   common:
//!   - repo: https://github.com/gitleaks/gitleaks
//!     rev: v8.16.3
//!     hooks:
//!     - id: gitleaks
//! ```
//!
//! The reserved `common` attribute applies regardless of detection.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::precommit::Repo;

/// Attribute whose blocks apply to every run
pub const COMMON_ATTRIBUTE: &str = "common";

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    hooks: Option<BTreeMap<String, Vec<Repo>>>,
}

/// Validated attribute → block templates mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, Vec<Repo>>,
}

impl Catalog {
    /// Parse and validate catalog text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CatalogError`] if the text is not valid YAML or any
    /// entry has the wrong shape. No partial catalog is produced.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_yaml::from_str(text).map_err(|e| Error::catalog(e.to_string()))?;
        Self::from_entries(file.hooks.unwrap_or_default())
    }

    /// Validate an already-built mapping.
    ///
    /// Every attribute must list at least one block, every block needs a
    /// non-empty `repo` and at least one hook with a non-empty id. The
    /// `common` attribute may be absent or empty.
    pub fn from_entries(entries: BTreeMap<String, Vec<Repo>>) -> Result<Self> {
        for (attribute, repos) in &entries {
            if repos.is_empty() && attribute != COMMON_ATTRIBUTE {
                return Err(Error::catalog(format!(
                    "attribute '{attribute}' lists no repos"
                )));
            }
            for repo in repos {
                if repo.repo.is_empty() {
                    return Err(Error::catalog(format!(
                        "attribute '{attribute}' has a repo without a 'repo' key"
                    )));
                }
                if repo.hooks.is_empty() {
                    return Err(Error::catalog(format!(
                        "repo '{}' under '{attribute}' lists no hooks",
                        repo.repo
                    )));
                }
                if repo.hooks.iter().any(|h| h.id.is_empty()) {
                    return Err(Error::catalog(format!(
                        "repo '{}' under '{attribute}' has a hook without an id",
                        repo.repo
                    )));
                }
            }
        }
        Ok(Self { entries })
    }

    /// The block template consulted for `attribute`.
    ///
    /// Only the first listed block is used, the rest are ignored.
    pub fn entry(&self, attribute: &str) -> Option<&Repo> {
        if attribute == COMMON_ATTRIBUTE {
            return None;
        }
        self.entries.get(attribute).and_then(|repos| repos.first())
    }

    /// Blocks that apply regardless of detection
    pub fn common(&self) -> &[Repo] {
        self.entries
            .get(COMMON_ATTRIBUTE)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Supported attribute names, sorted, excluding `common`
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|a| *a != COMMON_ATTRIBUTE)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
