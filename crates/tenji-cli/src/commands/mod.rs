//! Subcommand implementations.

pub mod classify;
pub mod filter;
pub mod validate;
mod util;
