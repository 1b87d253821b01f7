//! # pumlrender
//!
//! Render PlantUML diagrams through the PlantUML server.
//!
//! The server takes the diagram source inside the request URL. pumlrender
//! produces that URL, fetches the rendered image, and saves it.
//!
//! ## Features
//!
//! - **Deflate encoding**: raw deflate payload packed into the server's
//!   URL-safe 64-symbol alphabet
//! - **Hex fallback**: a single retry with the `~h` hex form if the deflate
//!   attempt fails to encode or to fetch
//! - **Pluggable transport**: the HTTP call sits behind a trait

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod encoding;
pub mod error;
pub mod io;
pub mod render;
pub mod transport;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export encoding types
pub use encoding::{DeflateEncoder, DiagramEncoder, EncodingTier, HexEncoder};

// Re-export render types
pub use render::{DEFAULT_SERVER_URL, RenderConfig, RenderOutcome, Renderer};

// Re-export transport types
pub use transport::{HttpTransport, Transport};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
