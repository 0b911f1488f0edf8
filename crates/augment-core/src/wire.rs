//! Request and response objects exchanged with callers as JSON.
//!
//! Field names are PascalCase on the wire:
//!
//! ```json
//! {"Content": "repos:\n", "Languages": ["python"]}
//! ```

use serde::{Deserialize, Serialize};

use crate::dependabot::UpdateKey;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePrecommitConfigRequest {
    /// Raw document text, possibly empty
    #[serde(default)]
    pub content: String,
    /// Detected languages, in detection order
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDependabotConfigRequest {
    /// Raw document text, possibly empty
    #[serde(default)]
    pub content: String,
    /// Detected package ecosystems, in detection order
    #[serde(default)]
    pub ecosystems: Vec<Ecosystem>,
}

/// A detected package ecosystem and the schedule it should be updated on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ecosystem {
    pub package_ecosystem: String,
    pub directory: String,
    pub interval: String,
}

impl Ecosystem {
    pub fn new(
        package_ecosystem: impl Into<String>,
        directory: impl Into<String>,
        interval: impl Into<String>,
    ) -> Self {
        Self {
            package_ecosystem: package_ecosystem.into(),
            directory: directory.into(),
            interval: interval.into(),
        }
    }

    pub fn key(&self) -> UpdateKey {
        UpdateKey::new(&self.package_ecosystem, &self.directory)
    }
}

/// Response shared by both manifest variants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateConfigResponse {
    pub original_input: String,
    pub final_output: String,
    pub is_changed: bool,
    /// Set by transports that could not fetch the caller's config file; the
    /// engine itself always leaves it false.
    #[serde(default)]
    pub configfile_fetch_error: bool,
}
