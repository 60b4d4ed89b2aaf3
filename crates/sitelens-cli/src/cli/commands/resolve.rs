//! `sitelens resolve <input>` – print the descriptor URL for an input.

use anyhow::Result;
use sitelens_core::resolve_descriptor_url;

use super::step_error;

pub fn run_resolve(input: &str) -> Result<()> {
    let url = resolve_descriptor_url(input).map_err(step_error)?;
    println!("{url}");
    Ok(())
}
