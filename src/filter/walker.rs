//! TreeFilter - depth-first walk applying a size comparison

use std::fs;
use std::path::Path;

use crate::error::QueryError;

use super::entry::{EntryKind, classify};
use super::op::Operator;

/// Result of one tree walk.
///
/// `matches` holds base names in visitation order; the list is never
/// re-sorted after the fact. `notes` is the diagnostic side channel:
/// irregular entries that were passed through and per-entry errors the
/// walk recovered from.
#[derive(Debug, Default, Clone)]
pub struct Traversal {
    pub matches: Vec<String>,
    pub notes: Vec<String>,
}

/// Walks a directory tree and collects entries matching a size comparison.
///
/// Directories are descended into but never emitted. Regular files are
/// emitted when `op.holds(size, threshold)`. Irregular entries are always
/// emitted, with a note, because their size semantics are unreliable.
pub struct TreeFilter {
    threshold: i64,
    op: Operator,
}

impl TreeFilter {
    pub fn new(threshold: i64, op: Operator) -> Self {
        Self { threshold, op }
    }

    /// Walk the tree rooted at `root` and collect matching entry names.
    ///
    /// The walk is synchronous and runs to completion on the calling
    /// thread. Per-entry failures (unreadable subdirectory, failed stat)
    /// are recorded as notes and never abort the walk.
    ///
    /// # Errors
    ///
    /// [`QueryError::RootNotFound`] if `root` does not exist,
    /// [`QueryError::RootNotDirectory`] if it exists but is not a directory.
    pub fn filter(&self, root: &Path) -> Result<Traversal, QueryError> {
        let meta = fs::metadata(root)
            .map_err(|_| QueryError::RootNotFound(root.display().to_string()))?;
        if !meta.is_dir() {
            return Err(QueryError::RootNotDirectory(root.display().to_string()));
        }

        let mut result = Traversal::default();
        self.walk_dir(root, &mut result);
        Ok(result)
    }

    fn walk_dir(&self, path: &Path, result: &mut Traversal) {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                result
                    .notes
                    .push(format!("cannot read '{}': {}", path.display(), err));
                return;
            }
        };

        let mut entries: Vec<_> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    result
                        .notes
                        .push(format!("cannot read entry under '{}': {}", path.display(), err));
                    None
                }
            })
            .collect();
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            let kind = match classify(&entry_path) {
                Ok(kind) => kind,
                Err(err) => {
                    result
                        .notes
                        .push(format!("cannot stat '{}': {}", entry_path.display(), err));
                    continue;
                }
            };

            match kind {
                EntryKind::Directory => self.walk_dir(&entry_path, result),
                EntryKind::Regular(size) => {
                    if self.op.holds(size, self.threshold) {
                        result.matches.push(name);
                    }
                }
                EntryKind::Irregular(kind_name) => {
                    // Flag and pass through: no size check for entries
                    // whose size the OS cannot report meaningfully.
                    result
                        .notes
                        .push(format!("'{}' is a {}, included without size check", name, kind_name));
                    result.matches.push(name);
                }
            }
        }
    }
}
