//! Command implementations for augment-cli

pub mod dependabot;
pub mod precommit;

pub use dependabot::run_dependabot;
pub use precommit::run_precommit;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use augment_core::{Outcome, UpdateConfigResponse};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::Result;

/// Read a JSON request from `path`, or stdin when `path` is `-`
fn read_request<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&text)?)
}

fn print_response(response: &UpdateConfigResponse) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, response)?;
    writeln!(stdout)?;
    Ok(())
}

/// Read the document at `path`; a file that does not exist yet is empty
fn read_document(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Config not found, starting from empty");
            Ok(String::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Print the outcome, or write it back to `path` when `write` is set
fn emit(path: &Path, outcome: &Outcome, write: bool) -> Result<()> {
    if !write {
        print!("{}", outcome.final_text);
        return Ok(());
    }
    if outcome.changed {
        fs::write(path, &outcome.final_text)?;
        info!(
            path = %path.display(),
            edits = outcome.edits.len(),
            lines = outcome.lines_added(),
            "Config written"
        );
        eprintln!("updated {}", path.display());
    } else {
        eprintln!("{} unchanged", path.display());
    }
    Ok(())
}
