//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Default diagram source path.
pub const DEFAULT_SOURCE: &str = "docs/architecture_mvvm_component.puml";

/// Extension given to the output when no path is passed.
const DEFAULT_OUTPUT_EXTENSION: &str = "svg";

/// pumlrender: render PlantUML sources through the PlantUML server.
///
/// Encodes the diagram into the server's URL form (deflate with a hex
/// fallback), fetches the rendered image, and saves it.
#[derive(Parser, Debug)]
#[command(name = "pumlrender")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the rendering endpoint.
    ///
    /// Defaults to the public PlantUML server's SVG endpoint.
    #[arg(long, env = "PUMLRENDER_SERVER", global = true)]
    pub server: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "PUMLRENDER_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a diagram and save the server's response.
    Render {
        /// Path to the diagram source.
        #[arg(default_value = DEFAULT_SOURCE)]
        source: PathBuf,

        /// Output path (default: the source path with an .svg extension).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the request URL for a diagram without contacting the server.
    Encode {
        /// Path to the diagram source.
        #[arg(default_value = DEFAULT_SOURCE)]
        source: PathBuf,
    },
}

/// Returns the output path for a render, derived from the source if not
/// given.
#[must_use]
pub fn resolve_output(source: &Path, output: Option<&Path>) -> PathBuf {
    output.map_or_else(
        || source.with_extension(DEFAULT_OUTPUT_EXTENSION),
        Path::to_path_buf,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["pumlrender", "render"]).unwrap();
        match cli.command {
            Commands::Render { source, output } => {
                assert_eq!(source, PathBuf::from(DEFAULT_SOURCE));
                assert!(output.is_none());
            }
            Commands::Encode { .. } => unreachable!("parsed as encode"),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pumlrender",
            "encode",
            "a.puml",
            "--format",
            "json",
            "--server",
            "http://localhost:8080/svg/",
        ])
        .unwrap();
        assert_eq!(cli.format, "json");
        assert_eq!(cli.server.as_deref(), Some("http://localhost:8080/svg/"));
    }

    #[test]
    fn test_resolve_output_default() {
        let out = resolve_output(Path::new("docs/diagram.puml"), None);
        assert_eq!(out, PathBuf::from("docs/diagram.svg"));
    }

    #[test]
    fn test_resolve_output_explicit() {
        let out = resolve_output(Path::new("docs/diagram.puml"), Some(Path::new("out/x.svg")));
        assert_eq!(out, PathBuf::from("out/x.svg"));
    }
}
