//! Error handling for codedump
//!
//! Almost everything in the core degrades in place instead of erroring:
//! bad files become inline markers, failed stats become `N/A` sentinels,
//! split write failures are collected in the report, and the clipboard
//! layer returns its own error that callers treat as informational. The
//! only hard stop is an unusable root directory.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for codedump operations
#[derive(Error, Debug)]
pub enum Error {
    /// The root directory does not exist or is not a directory
    #[error("target directory not found: {}", .0.display())]
    InvalidRoot(PathBuf),
}

/// Specialized Result type for codedump operations
pub type Result<T> = std::result::Result<T, Error>;
