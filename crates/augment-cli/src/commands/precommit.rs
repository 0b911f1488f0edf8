//! The `precommit` command

use augment_core::{Engine, PrecommitEngine, UpdatePrecommitConfigRequest};

use super::{emit, print_response, read_document, read_request};
use crate::catalog;
use crate::cli::PrecommitArgs;
use crate::error::{CliError, Result};

pub fn run_precommit(args: &PrecommitArgs) -> Result<()> {
    let engine = PrecommitEngine::new(catalog::load(&args.catalog)?);

    if let Some(request) = &args.input.request {
        let request: UpdatePrecommitConfigRequest = read_request(request)?;
        return print_response(&engine.update(&request)?);
    }

    let path = args
        .input
        .file
        .as_deref()
        .ok_or_else(|| CliError::user("either --request or --file is required"))?;
    let content = read_document(path)?;
    let outcome = engine.run(&content, &args.languages)?;
    emit(path, &outcome, args.input.write)
}
