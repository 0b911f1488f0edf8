//! Engine façade: parse, select, patch.

use augment_yaml::Edit;
use tracing::info;

use crate::catalog::Catalog;
use crate::dependabot::{self, DependabotConfig};
use crate::error::Result;
use crate::precommit::{self, PrecommitConfig};
use crate::splice::Patched;
use crate::wire::{
    Ecosystem, UpdateConfigResponse, UpdateDependabotConfigRequest, UpdatePrecommitConfigRequest,
};

/// Result of one engine run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub original: String,
    pub final_text: String,
    pub changed: bool,
    pub edits: Vec<Edit>,
}

impl Outcome {
    /// Total number of lines the run wrote
    pub fn lines_added(&self) -> usize {
        self.edits.iter().map(Edit::line_count).sum()
    }

    fn new(original: &str, patched: Patched) -> Self {
        Self {
            original: original.to_string(),
            final_text: patched.text,
            changed: patched.changed,
            edits: patched.edits,
        }
    }
}

impl From<Outcome> for UpdateConfigResponse {
    fn from(outcome: Outcome) -> Self {
        Self {
            original_input: outcome.original,
            final_output: outcome.final_text,
            is_changed: outcome.changed,
            configfile_fetch_error: false,
        }
    }
}

/// A manifest variant's parse → select → patch pipeline.
///
/// Runs are stateless: the same engine can serve any number of independent
/// calls, and feeding a run's `final_text` back in yields `changed == false`.
pub trait Engine {
    /// Detected attribute driving the selection
    type Attribute;

    /// Augment `content` with whatever `attributes` call for.
    ///
    /// # Errors
    ///
    /// Any parse, structure, or catalog error aborts the run; no partial
    /// outcome is returned.
    fn run(&self, content: &str, attributes: &[Self::Attribute]) -> Result<Outcome>;
}

/// Engine for pre-commit hook configs, driven by detected languages
#[derive(Debug, Clone)]
pub struct PrecommitEngine {
    catalog: Catalog,
}

impl PrecommitEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Handle a wire request
    pub fn update(&self, request: &UpdatePrecommitConfigRequest) -> Result<UpdateConfigResponse> {
        Ok(self.run(&request.content, &request.languages)?.into())
    }
}

impl Engine for PrecommitEngine {
    type Attribute = String;

    fn run(&self, content: &str, languages: &[String]) -> Result<Outcome> {
        let config = PrecommitConfig::parse(content)?;
        let staged = precommit::select(&config, languages, &self.catalog);
        let patched = precommit::apply(content, &config, &staged)?;
        info!(
            staged = staged.len(),
            edits = patched.edits.len(),
            changed = patched.changed,
            "Pre-commit config processed"
        );
        Ok(Outcome::new(content, patched))
    }
}

/// Engine for dependabot configs, driven by detected ecosystems
#[derive(Debug, Clone, Copy, Default)]
pub struct DependabotEngine;

impl DependabotEngine {
    pub fn new() -> Self {
        Self
    }

    /// Handle a wire request
    pub fn update(&self, request: &UpdateDependabotConfigRequest) -> Result<UpdateConfigResponse> {
        Ok(self.run(&request.content, &request.ecosystems)?.into())
    }
}

impl Engine for DependabotEngine {
    type Attribute = Ecosystem;

    fn run(&self, content: &str, ecosystems: &[Ecosystem]) -> Result<Outcome> {
        let config = DependabotConfig::parse(content)?;
        let staged = dependabot::select(&config, ecosystems);
        let patched = dependabot::apply(content, &staged)?;
        info!(
            staged = staged.len(),
            edits = patched.edits.len(),
            changed = patched.changed,
            "Dependabot config processed"
        );
        Ok(Outcome::new(content, patched))
    }
}
