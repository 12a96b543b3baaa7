/*!
 * Path classification
 *
 * Decides, for a single filesystem entry, whether it is excluded from
 * traversal and output. The decision is a pure function of the path string,
 * the entry kind, and the rule tables.
 */

use std::path::{Component, Path};

use crate::rules::Rules;

/// Applies the classification rules to individual paths
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Rules,
    /// Every path handed to `should_skip`, shared across clones so tests
    /// can check that pruned subtrees are never read
    #[cfg(test)]
    pub(crate) visit_log: std::sync::Arc<std::sync::Mutex<Vec<std::path::PathBuf>>>,
}

impl Classifier {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            #[cfg(test)]
            visit_log: Default::default(),
        }
    }

    /// Return `true` if `path` must be excluded.
    ///
    /// Decision order, first match wins:
    /// 1. any path segment equals a pruned directory name (exact case)
    /// 2. directories: base name matches a directory deny pattern
    /// 3. file name is in the explicit deny set
    /// 4. file name matches a file deny pattern
    /// 5. keep only allow-listed dotfiles, extensions, and bare filenames
    pub fn should_skip(&self, path: &Path, is_dir: bool) -> bool {
        #[cfg(test)]
        self.visit_log.lock().unwrap().push(path.to_path_buf());

        if self.has_pruned_segment(path) {
            return true;
        }

        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().into_owned(),
            None => return false,
        };

        if is_dir {
            return self
                .rules
                .skip_dir_patterns
                .iter()
                .any(|re| re.is_match(&name));
        }

        let lower = name.to_lowercase();

        if self.rules.skip_filenames.contains(lower.as_str()) {
            return true;
        }
        if self
            .rules
            .skip_file_patterns
            .iter()
            .any(|re| re.is_match(&lower))
        {
            return true;
        }

        // Dotfiles are kept only when explicitly allow-listed by name
        if name.starts_with('.') {
            return !self.rules.allowed_filenames.contains(lower.as_str());
        }

        // Only the final extension counts: archive.tar.gz is judged by ".gz"
        let ext_allowed = Path::new(&name)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .is_some_and(|e| self.rules.allowed_extensions.contains(e.as_str()));

        !ext_allowed && !self.rules.allowed_filenames.contains(lower.as_str())
    }

    /// Segment check against the pruned-directory set, exact case.
    ///
    /// Inspects the path as passed, so pruning applies without descending
    /// into the subtree at all.
    fn has_pruned_segment(&self, path: &Path) -> bool {
        path.components().any(|c| match c {
            Component::Normal(seg) => self
                .rules
                .skip_directories
                .contains(seg.to_string_lossy().as_ref()),
            _ => false,
        })
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}
