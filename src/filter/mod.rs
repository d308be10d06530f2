//! Directory tree filtering by file size.
//!
//! The walker descends depth-first from a root directory, classifies every
//! entry it encounters, and collects the base names of entries that pass
//! the configured size comparison. Irregular entries (symlinks, devices,
//! FIFOs, sockets) bypass the comparison entirely: their reported sizes
//! are unreliable, so they are always included and flagged with a note.

mod entry;
mod op;
mod walker;

pub use entry::EntryKind;
pub use op::Operator;
pub use walker::{Traversal, TreeFilter};
