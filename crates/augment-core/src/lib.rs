//! Config augmentation engine.
//!
//! Adds recommended entries to YAML manifests (pre-commit hook configs and
//! dependabot update configs) based on detected project attributes, editing
//! the raw text in place so comments, ordering, and indentation survive.
//!
//! Each manifest variant is split the same way:
//!
//! - a **selector** decides which items are missing, given what the document
//!   already declares
//! - a **patcher** splices the staged items into the raw text, re-parsing
//!   after every edit to get fresh positions
//!
//! The [`engine`] module ties both together behind the [`Engine`] trait.

pub mod catalog;
pub mod dependabot;
pub mod engine;
pub mod error;
pub mod precommit;
mod splice;
pub mod wire;

pub use catalog::{COMMON_ATTRIBUTE, Catalog};
pub use engine::{DependabotEngine, Engine, Outcome, PrecommitEngine};
pub use error::{Error, Result};
pub use splice::Patched;
pub use wire::{
    Ecosystem, UpdateConfigResponse, UpdateDependabotConfigRequest, UpdatePrecommitConfigRequest,
};
