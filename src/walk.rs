/*!
 * Directory traversal
 *
 * Pre-order walk that prunes excluded subtrees before descending into
 * them, then applies the classifier once more to each file as a final
 * gate. Siblings are visited in file-name order so output and duplicate
 * suffix assignment are reproducible across platforms.
 */

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::classify::Classifier;

/// Walks a tree and yields the admitted file paths
#[derive(Debug, Clone, Default)]
pub struct Walker {
    classifier: Classifier,
}

impl Walker {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Lazily yield every admitted file under `root`.
    ///
    /// The root itself is exempt from classification; only its children
    /// are filtered. Pruned directories are never opened, so a huge
    /// dependency cache costs nothing. Symlinks that resolve to files are
    /// admitted and read through; symlinked directories are not descended.
    pub fn walk<'a>(&'a self, root: &Path) -> impl Iterator<Item = PathBuf> + 'a {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !self.classifier.should_skip(e.path(), e.file_type().is_dir())
            })
            .filter_map(Result::ok)
            .filter(|e| {
                e.file_type().is_file() || (e.path_is_symlink() && e.path().is_file())
            })
            .filter(|e| !self.classifier.should_skip(e.path(), false))
            .map(|e| e.into_path())
    }
}
