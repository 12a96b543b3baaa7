/*!
 * Content sniffing and text normalization
 */

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Rendered in place of the contents of binary files
pub const BINARY_MARKER: &str = "[binary file skipped]";

/// How many bytes to read when sniffing for binary content
const SNIFF_LEN: u64 = 4096;

/// Quick heuristic: a NUL byte in the first 4 KB means binary.
///
/// I/O failure while sniffing answers "not binary"; the subsequent text
/// read surfaces its own failure inline.
pub fn looks_binary(path: &Path) -> bool {
    let mut prefix = Vec::with_capacity(SNIFF_LEN as usize);
    match File::open(path).and_then(|f| f.take(SNIFF_LEN).read_to_end(&mut prefix)) {
        Ok(_) => prefix.contains(&0),
        Err(_) => false,
    }
}

/// Read `path` as text, never failing on content.
///
/// On I/O failure the returned string is an inline error marker rather
/// than an error, so one unreadable file cannot abort a dump.
pub fn read_text(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => normalize_text(&bytes),
        Err(e) => format!("[ERROR reading file: {}]", e),
    }
}

/// Decode bytes as UTF-8, falling back to latin-1 (one char per byte,
/// never fails), then strip every NUL character.
///
/// The strip runs unconditionally: a NUL past the sniff window must not
/// reach the output.
pub fn normalize_text(bytes: &[u8]) -> String {
    let text = match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    };
    text.replace('\0', "")
}
