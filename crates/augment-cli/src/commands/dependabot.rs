//! The `dependabot` command

use augment_core::{DependabotEngine, Engine, UpdateDependabotConfigRequest};

use super::{emit, print_response, read_document, read_request};
use crate::cli::DependabotArgs;
use crate::error::{CliError, Result};

pub fn run_dependabot(args: &DependabotArgs) -> Result<()> {
    let engine = DependabotEngine::new();

    if let Some(request) = &args.input.request {
        let request: UpdateDependabotConfigRequest = read_request(request)?;
        return print_response(&engine.update(&request)?);
    }

    let path = args
        .input
        .file
        .as_deref()
        .ok_or_else(|| CliError::user("either --request or --file is required"))?;
    let content = read_document(path)?;
    let outcome = engine.run(&content, &args.ecosystems)?;
    emit(path, &outcome, args.input.write)
}
