#![deny(clippy::all, clippy::pedantic)]

use crate::client::CliError;
use serde::Serialize;

pub fn render_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    let mut out = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Output(e.to_string()))?;
    out.push('\n');
    Ok(out)
}
