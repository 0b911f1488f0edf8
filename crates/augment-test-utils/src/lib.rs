//! Shared test utilities for the config-augment workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: catalog and manifest texts used across test suites
//! - [`workspace`]: [`workspace::TestWorkspace`] temp directory for CLI tests

pub mod fixtures;
pub mod workspace;
