//! Manifest data model
//!
//! These types mirror the wire shape produced by the upstream generation
//! layer: a JSON mapping of virtual path to `{content, isBinary, type}`,
//! optionally bundled with a target directory. Entry order is significant
//! and is preserved through deserialization.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::path::DEFAULT_VIRTUAL_ROOT;

// =============================================================================
// MANIFEST ENTRIES
// =============================================================================

/// One virtual file description supplied to the materializer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualFile {
    #[serde(default)]
    pub content: FileContent,

    #[serde(default, rename = "isBinary")]
    pub is_binary: bool,

    #[serde(default, rename = "type")]
    pub kind: EntryKind,
}

/// File content as it arrives on the wire: textual, or raw bytes encoded
/// as a JSON array
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileContent {
    Text(String),
    Bytes(Vec<u8>),
}

impl Default for FileContent {
    fn default() -> Self {
        FileContent::Text(String::new())
    }
}

impl FileContent {
    pub fn is_empty(&self) -> bool {
        match self {
            FileContent::Text(s) => s.is_empty(),
            FileContent::Bytes(b) => b.is_empty(),
        }
    }
}

/// Kind of a manifest entry. Only `File` entries are materialized; folders
/// exist implicitly through their children and unknown kinds are skipped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Folder,
    #[default]
    #[serde(other)]
    Other,
}

// =============================================================================
// BATCH REQUEST / RESULT
// =============================================================================

/// A full materialization request: ordered entries plus the directory they
/// are written under
#[derive(Debug, Clone)]
pub struct BatchRequest {
    /// Virtual path -> entry, in manifest order. Keys are unique.
    pub entries: IndexMap<String, VirtualFile>,

    /// Directory the normalized paths are rooted at. Created if absent.
    pub target_dir: PathBuf,

    /// Workspace prefix stripped from manifest keys during normalization
    pub virtual_root: String,
}

impl BatchRequest {
    pub fn new(entries: IndexMap<String, VirtualFile>, target_dir: impl Into<PathBuf>) -> Self {
        BatchRequest {
            entries,
            target_dir: target_dir.into(),
            virtual_root: DEFAULT_VIRTUAL_ROOT.to_string(),
        }
    }

    pub fn with_virtual_root(mut self, virtual_root: impl Into<String>) -> Self {
        self.virtual_root = virtual_root.into();
        self
    }
}

/// Outcome of a batch materialization.
///
/// The batch is atomic at the reporting level only: when `error` is set,
/// the files named in `written` already exist on disk and the remaining
/// entries were never attempted.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Original manifest keys written so far, in materialization order
    pub written: Vec<String>,

    /// The failure that stopped the batch, if any
    pub error: Option<crate::MaterializeError>,
}

impl BatchResult {
    /// True when every file entry in the request was written
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

// =============================================================================
// MANIFEST DOCUMENT
// =============================================================================

/// The on-disk/wire form of a manifest: the file mapping plus an optional
/// embedded target directory (`fileDir` in the upstream payload)
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestDocument {
    #[serde(default)]
    pub files: IndexMap<String, VirtualFile>,

    #[serde(default, alias = "fileDir")]
    pub target_dir: Option<PathBuf>,
}

impl ManifestDocument {
    /// Parse a manifest document from JSON text
    pub fn from_json(json: &str) -> Result<Self, crate::MaterializeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Turn the document into a batch request rooted at `target_dir`
    pub fn into_request(self, target_dir: impl Into<PathBuf>) -> BatchRequest {
        BatchRequest::new(self.files, target_dir)
    }
}
