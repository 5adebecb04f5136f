//! Weft Manifest Materialization
//!
//! This crate handles the virtual-file manifest produced by an upstream
//! code-generation flow and reproduces it on a real filesystem.
//!
//! A manifest maps virtual paths (possibly carrying a workspace prefix such
//! as `/home/project/`) to file entries with text or binary content. The
//! materializer normalizes each path into a safe relative path, encodes the
//! content byte-for-byte, and writes the files under a target directory,
//! reporting per-entry progress instead of a bare pass/fail.

pub mod content;
pub mod errors;
pub mod materialize;
pub mod path;
pub mod types;
pub mod writer;

pub use errors::MaterializeError;
pub use materialize::materialize;
pub use path::{normalize_key, DEFAULT_VIRTUAL_ROOT};
pub use types::{
    BatchRequest, BatchResult, EntryKind, FileContent, ManifestDocument, VirtualFile,
};

// Re-export the single-file writer for callers that materialize outside a batch
pub use writer::write_file;
