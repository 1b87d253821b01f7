//! CLI layer for pumlrender.
//!
//! Provides the command-line interface using clap, with commands for
//! rendering a diagram and for printing its request URL.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, execute_with};
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
