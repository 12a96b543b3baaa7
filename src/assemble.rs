/*!
 * Output assembly
 *
 * The two core operations: concatenating every admitted file into one
 * annotated string, and splitting the tree into individually annotated
 * output files (mirrored or flattened).
 */

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::classify::Classifier;
use crate::config::Config;
use crate::content::{self, BINARY_MARKER};
use crate::error::Result;
use crate::render::{self, FileMetadata};
use crate::walk::Walker;

/// A destination that could not be written during a split
#[derive(Debug)]
pub struct SplitFailure {
    /// Source file that was being split out
    pub source: PathBuf,
    /// Destination path that failed
    pub dest: PathBuf,
    /// Underlying write error
    pub error: io::Error,
}

/// Outcome of a split run
#[derive(Debug, Default)]
pub struct SplitReport {
    /// Number of output files written
    pub written: usize,
    /// Total annotated bytes written
    pub bytes_written: u64,
    /// Files that could not be written; never silently dropped
    pub failures: Vec<SplitFailure>,
}

/// Drives the walk → sniff → render pipeline for one configuration
pub struct Dumper {
    config: Config,
    walker: Walker,
}

impl Dumper {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            walker: Walker::new(Classifier::default()),
        }
    }

    /// Concatenate every admitted file into one annotated string.
    ///
    /// In list mode the result is one path per line with no bodies.
    /// Reads only; fails fast on an invalid root, never on a bad file.
    pub fn concatenate(&self) -> Result<String> {
        self.config.validate()?;

        let mut output = Vec::new();
        for path in self.walker.walk(&self.config.target_dir) {
            if self.config.list_only {
                output.push(render::render_listing(&path));
            } else {
                let metadata = FileMetadata::probe(&path);
                let body = body_for(&path);
                output.push(format!("\n{}", render::render_annotated(&path, &metadata, &body)));
            }
        }

        Ok(output.join("\n"))
    }

    /// Write each admitted file as its own annotated output file.
    ///
    /// Mirrored layout reproduces the tree under the output directory;
    /// flattened layout puts everything in one folder, disambiguating
    /// repeated base names with `_1`, `_2`, … in visit order. Write
    /// failures are collected in the report and do not abort the run.
    pub fn split(&self) -> Result<SplitReport> {
        self.config.validate()?;

        let root = &self.config.target_dir;
        let out_dir = &self.config.output_dir;
        // Suffix counters live for exactly one split call
        let mut seen: HashMap<String, u32> = HashMap::new();
        let mut report = SplitReport::default();

        for source in self.walker.walk(root) {
            let metadata = FileMetadata::probe(&source);
            let body = body_for(&source);
            let annotated = render::render_annotated(&source, &metadata, &body);

            let dest = if self.config.flatten {
                out_dir.join(flattened_name(&source, &mut seen))
            } else {
                match source.strip_prefix(root) {
                    Ok(rel) => out_dir.join(rel),
                    Err(_) => out_dir.join(source.file_name().unwrap_or_default()),
                }
            };

            match write_annotated(&dest, &annotated) {
                Ok(()) => {
                    report.written += 1;
                    report.bytes_written += annotated.len() as u64;
                }
                Err(error) => report.failures.push(SplitFailure {
                    source,
                    dest,
                    error,
                }),
            }
        }

        Ok(report)
    }
}

/// Sniff, then read: binary files contribute the skip marker, text files
/// their normalized contents, unreadable files an inline error marker.
fn body_for(path: &Path) -> String {
    if content::looks_binary(path) {
        format!("{}\n", BINARY_MARKER)
    } else {
        content::read_text(path)
    }
}

fn write_annotated(dest: &Path, annotated: &str) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, annotated)
}

/// Flattened destination name for `source`, counter suffix before the
/// extension. The first occurrence of a base name keeps the bare name.
fn flattened_name(source: &Path, seen: &mut HashMap<String, u32>) -> String {
    let base = source
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    let n = seen.entry(base.clone()).or_insert(0);
    let name = if *n == 0 {
        base.clone()
    } else {
        let path = Path::new(&base);
        match path.extension() {
            Some(ext) => format!(
                "{}_{}.{}",
                path.file_stem().unwrap_or_default().to_string_lossy(),
                n,
                ext.to_string_lossy()
            ),
            None => format!("{}_{}", base, n),
        }
    };
    *n += 1;
    name
}

/// Save a concatenated dump to a timestamped file in `output_dir`.
///
/// Returns the path written, e.g. `extracted/code_dump_20260824_153000.txt`.
pub fn write_dump_file(output_dir: &Path, contents: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let name = format!("code_dump_{}.txt", Local::now().format("%Y%m%d_%H%M%S"));
    let path = output_dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}
