//! Typed view of a `.pre-commit-config.yaml`

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Root key holding the list of repos
pub const ROOT_KEY: &str = "repos";

/// Key holding a repo's hooks
pub const ITEMS_KEY: &str = "hooks";

/// Key identifying a repo block
pub const BLOCK_KEY: &str = "repo";

/// The parts of a pre-commit config the engine reads. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecommitConfig {
    #[serde(default)]
    repos: Option<Vec<Repo>>,
}

impl PrecommitConfig {
    /// Parse document text. Empty and comment-only documents yield an empty config.
    pub fn parse(content: &str) -> Result<Self> {
        if augment_yaml::parse(content)?.is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::parse("pre-commit config", e.to_string()))
    }

    pub fn new(repos: Vec<Repo>) -> Self {
        Self { repos: Some(repos) }
    }

    pub fn repos(&self) -> &[Repo] {
        self.repos.as_deref().unwrap_or_default()
    }

    /// True if a repo block with this exact key is declared
    pub fn has_repo(&self, key: &str) -> bool {
        self.repos().iter().any(|r| r.repo == key)
    }

    /// Every hook id declared anywhere in the document
    pub fn hook_ids(&self) -> impl Iterator<Item = &str> {
        self.repos()
            .iter()
            .flat_map(|r| r.hooks())
            .map(|h| h.id.as_str())
            .filter(|id| !id.is_empty())
    }
}

/// A repo block: identified by its `repo` URL, owning an ordered list of hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub repo: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rev: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hooks: Vec<Hook>,
}

impl Repo {
    pub fn new(repo: impl Into<String>, rev: impl Into<String>, hooks: Vec<Hook>) -> Self {
        Self {
            repo: repo.into(),
            rev: rev.into(),
            hooks,
        }
    }

    pub fn hooks(&self) -> &[Hook] {
        &self.hooks
    }
}

/// A hook, identified document-wide by its id
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hook {
    #[serde(default)]
    pub id: String,
}

impl Hook {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Hook>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Hook>>::deserialize(deserializer)?.unwrap_or_default())
}
