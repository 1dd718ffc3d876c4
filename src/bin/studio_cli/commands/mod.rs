// ABOUTME: Command implementations for studio-cli
// ABOUTME: Calculation and catalog commands, plus shared JSON output

pub mod calculate;
pub mod catalog;

use serde::Serialize;
use studio_engine::errors::AppResult;

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
