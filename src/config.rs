/*!
 * Configuration handling for codedump
 */

use std::path::PathBuf;

use clap::Parser;

use crate::error::{Error, Result};

/// Command-line arguments for codedump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "codedump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate or split source files into annotated text dumps",
    long_about = "Walks a directory tree, filters files by extension and name, and either \
concatenates their contents into one annotated text blob or splits them into individually \
annotated output files."
)]
pub struct Args {
    /// Directory to process
    #[clap(default_value = ".")]
    pub directory: String,

    /// List file paths only
    #[clap(short = 'l', long)]
    pub list_only: bool,

    /// Write each file (with header) to its own text file
    #[clap(short = 's', long)]
    pub split: bool,

    /// With --split, write all output files directly in the output directory
    #[clap(short = 'F', long)]
    pub flatten: bool,

    /// Destination for split files or the saved dump file
    #[clap(long, default_value = "extracted")]
    pub output_dir: String,

    /// Copy output to system clipboard (best-effort)
    #[clap(long)]
    pub clip: bool,

    /// Save the concatenated dump to a timestamped file in the output directory
    #[clap(long)]
    pub save: bool,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to process
    pub target_dir: PathBuf,

    /// Destination directory for split files and saved dumps
    pub output_dir: PathBuf,

    /// Emit paths only, no file bodies
    pub list_only: bool,

    /// Split into per-file outputs instead of concatenating
    pub split: bool,

    /// With split, discard directory structure
    pub flatten: bool,

    /// Copy concatenation result to the clipboard
    pub clip: bool,

    /// Save concatenation result to a timestamped dump file
    pub save: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.directory),
            output_dir: PathBuf::from(args.output_dir),
            list_only: args.list_only,
            split: args.split,
            flatten: args.flatten,
            clip: args.clip,
            save: args.save,
        }
    }

    /// Fail fast when the root directory is missing or not a directory.
    /// Everything past this point degrades per-file instead of aborting.
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.is_dir() {
            return Err(Error::InvalidRoot(self.target_dir.clone()));
        }
        Ok(())
    }
}
