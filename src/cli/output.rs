//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::encoding::EncodingTier;
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Summary of a successful render.
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Where the output was written.
    pub output: String,
    /// The URL that produced the output.
    pub url: String,
    /// Which encoding attempt succeeded.
    pub tier: EncodingTier,
    /// Size of the output in bytes.
    pub bytes: usize,
}

/// Formats a render report.
#[must_use]
pub fn format_render(report: &RenderReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("OK\n");
            let _ = writeln!(output, "SVG saved: {}", report.output);
            let _ = writeln!(output, "Source URL: {}", report.url);
            output
        }
        OutputFormat::Json => format_json(report),
    }
}

/// Formats the result of the encode command.
#[must_use]
pub fn format_encoded(url: &str, tier: EncodingTier, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{url}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct EncodeOutput<'a> {
                url: &'a str,
                tier: EncodingTier,
            }
            format_json(&EncodeOutput { url, tier })
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                status: &'static str,
                error: String,
            }
            format_json(&ErrorOutput {
                status: "error",
                error: error.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
