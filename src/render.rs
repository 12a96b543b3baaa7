/*!
 * Rendering of admitted files
 *
 * Produces either a bare path line (list mode) or a framed header plus
 * the file body. Both are pure functions of path, metadata, and body.
 */

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};

/// 80-column frame line used above and below each header
pub const FRAME: &str =
    "================================================================================";

/// Sentinel rendered when a metadata field is unavailable
const NA: &str = "N/A";

/// Size and mtime of a file, each independently unavailable.
///
/// A failed stat is a value, not an error: the header shows `N/A` and
/// traversal continues.
#[derive(Debug, Clone, Default)]
pub struct FileMetadata {
    pub size: Option<u64>,
    pub modified: Option<DateTime<Local>>,
}

impl FileMetadata {
    /// Stat `path`, tolerating races with deletion.
    pub fn probe(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(meta) => Self {
                size: Some(meta.len()),
                modified: meta.modified().ok().map(DateTime::<Local>::from),
            },
            Err(_) => Self::default(),
        }
    }

    fn size_field(&self) -> String {
        self.size
            .map(|s| s.to_string())
            .unwrap_or_else(|| NA.to_owned())
    }

    fn modified_field(&self) -> String {
        self.modified
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| NA.to_owned())
    }
}

/// List mode: the path alone, one line per admitted file.
pub fn render_listing(path: &Path) -> String {
    path.display().to_string()
}

/// Full mode: framed header followed by the body (cleaned text, a binary
/// marker, or an inline read-error marker).
pub fn render_annotated(path: &Path, metadata: &FileMetadata, body: &str) -> String {
    format!(
        "{frame}\nFile: {path}\nSize: {size} bytes\nLast Modified: {modified}\n{frame}\n\n{body}",
        frame = FRAME,
        path = path.display(),
        size = metadata.size_field(),
        modified = metadata.modified_field(),
        body = body,
    )
}
