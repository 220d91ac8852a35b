//! `relay echo` - print the echo transform without starting a server.

use anyhow::Result;
use relay_core::EchoResponse;

/// Render the echo transform of `input` as pretty JSON.
pub fn render(input: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&EchoResponse::from_input(input))?)
}

/// Print the echo transform of `input`.
pub fn execute(input: &str) -> Result<()> {
    println!("{}", render(input)?);
    Ok(())
}
