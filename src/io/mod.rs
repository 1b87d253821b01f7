//! File I/O for pumlrender.
//!
//! Reads diagram sources and writes rendered output.

pub mod reader;

pub use reader::{read_source, write_output};
