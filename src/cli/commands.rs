//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{OutputFormat, RenderReport, format_encoded, format_render};
use crate::cli::parser::{Cli, Commands, resolve_output};
use crate::error::Result;
use crate::io::{read_source, write_output};
use crate::render::{RenderConfig, Renderer};
use crate::transport::{HttpTransport, Transport};
use std::path::Path;

/// Executes the CLI command against the real HTTP transport.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let config = RenderConfig::from_overrides(cli.server.as_deref(), cli.timeout)?;
    let transport = HttpTransport::new(config.timeout);
    execute_with(cli, config, transport)
}

/// Executes the CLI command with a caller-supplied transport.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute_with<T: Transport>(cli: &Cli, config: RenderConfig, transport: T) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let renderer = Renderer::new(config, transport);

    match &cli.command {
        Commands::Render { source, output } => {
            let output = resolve_output(source, output.as_deref());
            cmd_render(&renderer, source, &output, format)
        }
        Commands::Encode { source } => cmd_encode(&renderer, source, format),
    }
}

// ==================== Command Implementations ====================

fn cmd_render<T: Transport>(
    renderer: &Renderer<T>,
    source: &Path,
    output: &Path,
    format: OutputFormat,
) -> Result<String> {
    let text = read_source(source)?;
    tracing::debug!(source = %source.display(), bytes = text.len(), "source loaded");

    let outcome = renderer.render(&text)?;
    write_output(output, &outcome.bytes)?;

    let report = RenderReport {
        status: "ok",
        output: output.to_string_lossy().to_string(),
        url: outcome.url,
        tier: outcome.tier,
        bytes: outcome.bytes.len(),
    };
    Ok(format_render(&report, format))
}

fn cmd_encode<T: Transport>(
    renderer: &Renderer<T>,
    source: &Path,
    format: OutputFormat,
) -> Result<String> {
    let text = read_source(source)?;
    let (url, tier) = renderer.encode_url(&text)?;
    Ok(format_encoded(&url, tier, format))
}
