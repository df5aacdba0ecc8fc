//! Shared helpers for commands that consume JSONL input.

use std::io::Read;

use anyhow::{Context, Result};

/// Reads the whole input, from a file or (for `-`) from stdin.
pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read file: {input}"))
    }
}
