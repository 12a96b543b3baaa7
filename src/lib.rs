/*!
 * codedump - Concatenate or split source files into annotated text dumps
 *
 * Walks a directory tree, filters files by extension/name/path heuristics,
 * and either concatenates their contents into one annotated text blob or
 * splits them into individually annotated output files. Useful for taking
 * a quick textual snapshot of a codebase to paste into another tool.
 */

pub mod assemble;
pub mod classify;
pub mod clipboard;
pub mod config;
pub mod content;
pub mod error;
pub mod render;
pub mod rules;
pub mod utils;
pub mod walk;


// Re-export main components for easier access
pub use assemble::{write_dump_file, Dumper, SplitFailure, SplitReport};
pub use classify::Classifier;
pub use config::{Args, Config};
pub use content::{looks_binary, normalize_text, read_text, BINARY_MARKER};
pub use error::{Error, Result};
pub use render::{render_annotated, render_listing, FileMetadata};
pub use rules::Rules;
pub use utils::{count_files, format_file_size};
pub use walk::Walker;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
