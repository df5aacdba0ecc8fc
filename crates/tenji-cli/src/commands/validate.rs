//! Validate command for submitted event records.
//!
//! Valid records are echoed to stdout (ready to pipe onward); every
//! violation goes to stderr with its line number. The command always
//! exits successfully — rejecting bad submissions is the caller's call.

use anyhow::Result;
use tenji_core::{Event, validate_submission};

use super::util::read_input;

/// Runs the validate command.
pub fn run(input: &str) -> Result<()> {
    let content = read_input(input)?;

    let mut valid = 0usize;
    let mut invalid = 0usize;
    let mut malformed = 0usize;

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;

        let event = match serde_json::from_str::<Event>(line) {
            Ok(event) => event,
            Err(error) => {
                malformed += 1;
                tracing::warn!(line = line_no, %error, "malformed event record");
                continue;
            }
        };

        let issues = validate_submission(&event);
        if issues.is_empty() {
            valid += 1;
            println!("{}", serde_json::to_string(&event)?);
        } else {
            invalid += 1;
            for issue in &issues {
                eprintln!("line {line_no}: {issue}");
            }
        }
    }

    eprintln!("{valid} valid, {invalid} invalid, {malformed} malformed");
    Ok(())
}
