//! Per-entry classification for the tree walk

use std::fs;
use std::io;
use std::path::Path;

/// What the walker found at a path.
///
/// Classification uses `symlink_metadata` (lstat), so symlinks are reported
/// as symlinks rather than as whatever they point at; the walker never
/// follows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file with its size in bytes.
    Regular(i64),
    /// Directory to descend into.
    Directory,
    /// Anything else: symlink, FIFO, socket, device. Carries a short
    /// human-readable kind name for diagnostics.
    Irregular(&'static str),
}

/// Classify the entry at `path` without following symlinks.
pub fn classify(path: &Path) -> io::Result<EntryKind> {
    let meta = fs::symlink_metadata(path)?;
    let file_type = meta.file_type();
    if file_type.is_dir() {
        Ok(EntryKind::Directory)
    } else if file_type.is_file() {
        Ok(EntryKind::Regular(meta.len() as i64))
    } else {
        Ok(EntryKind::Irregular(describe_file_type(file_type)))
    }
}

#[cfg(unix)]
fn describe_file_type(file_type: fs::FileType) -> &'static str {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_symlink() {
        "symlink"
    } else if file_type.is_fifo() {
        "fifo"
    } else if file_type.is_socket() {
        "socket"
    } else if file_type.is_block_device() {
        "block device"
    } else if file_type.is_char_device() {
        "char device"
    } else {
        "unknown file type"
    }
}

#[cfg(not(unix))]
fn describe_file_type(file_type: fs::FileType) -> &'static str {
    if file_type.is_symlink() {
        "symlink"
    } else {
        "special file"
    }
}
