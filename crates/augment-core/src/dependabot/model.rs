//! Typed view of `.github/dependabot.yml`

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Root key holding the list of updates
pub const ROOT_KEY: &str = "updates";

/// The parts of a dependabot config the engine reads. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependabotConfig {
    #[serde(default)]
    pub version: Option<serde_yaml::Value>,
    #[serde(default)]
    updates: Option<Vec<Update>>,
}

impl DependabotConfig {
    /// Parse document text. Empty and comment-only documents yield an empty config.
    pub fn parse(content: &str) -> Result<Self> {
        if augment_yaml::parse(content)?.is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::parse("dependabot config", e.to_string()))
    }

    pub fn updates(&self) -> &[Update] {
        self.updates.as_deref().unwrap_or_default()
    }
}

/// One `updates` entry. Identity is the (ecosystem, directory) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Update {
    #[serde(default)]
    pub package_ecosystem: String,
    #[serde(default)]
    pub directory: String,
    #[serde(default)]
    pub schedule: Option<Schedule>,
}

impl Update {
    pub fn key(&self) -> UpdateKey {
        UpdateKey::new(&self.package_ecosystem, &self.directory)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub interval: String,
}

/// Identity of an update entry, ordered by ecosystem then directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UpdateKey {
    pub ecosystem: String,
    pub directory: String,
}

impl UpdateKey {
    pub fn new(ecosystem: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            ecosystem: ecosystem.into(),
            directory: directory.into(),
        }
    }
}

impl std::fmt::Display for UpdateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.ecosystem, self.directory)
    }
}
