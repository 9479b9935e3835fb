//! Tool surface command handlers.

use anyhow::{Context, Result};
use serde_json::Value;

use super::StoreLocation;
use crate::cli::CallArgs;
use crate::tools::{NoteTools, definitions};

pub fn handle_tools() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&definitions())?);
    Ok(())
}

/// Runs one tool call and prints its result.
///
/// `ERROR:` results are data for the model, not command failures, so they
/// still exit successfully.
pub fn handle_call(args: &CallArgs, location: &StoreLocation) -> Result<()> {
    let arguments: Value = serde_json::from_str(&args.arguments)
        .with_context(|| format!("tool arguments are not valid JSON: {}", args.arguments))?;

    let tools = NoteTools::new(location.open()?);
    let output = tools.call(&args.tool, arguments);
    tools.close().context("failed to close note store")?;

    println!("{}", output);
    Ok(())
}
