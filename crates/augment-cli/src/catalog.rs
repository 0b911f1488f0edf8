//! Loads the hook catalog from disk

use std::fs;
use std::path::Path;

use augment_core::Catalog;
use tracing::debug;

use crate::error::{CliError, Result};

/// Read and validate the catalog at `path`.
///
/// A missing or unreadable file is reported against the path so the user
/// knows which catalog was looked up.
pub fn load(path: &Path) -> Result<Catalog> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::user(format!("cannot read catalog {}: {e}", path.display())))?;
    let catalog = Catalog::from_yaml_str(&text)?;
    debug!(path = %path.display(), attributes = catalog.attributes().count(), "Catalog loaded");
    Ok(catalog)
}
