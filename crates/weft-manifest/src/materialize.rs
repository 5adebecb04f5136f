//! Batch materialization
//!
//! Walks a manifest in insertion order and writes every `file` entry under
//! the target directory. The batch fails fast: the first entry that cannot
//! be written stops the run, and the result reports both the error and the
//! keys already written, so a caller knows exactly which files exist.
//! Continuing past a filesystem error would leave the project in an
//! unpredictable partial state, and a bare pass/fail would hide which
//! files need reconciling.

use std::fs;
use tracing::{debug, info};

use crate::content::encode;
use crate::errors::MaterializeError;
use crate::path::normalize_key;
use crate::types::{BatchRequest, BatchResult, EntryKind, VirtualFile};
use crate::writer::write_file;

/// Materialize every `file` entry of the request under its target
/// directory.
///
/// The target directory is created first; entries are processed in
/// manifest order; non-file entries are skipped. No error here is a
/// panic - everything is reported through the returned [`BatchResult`].
///
/// Each invocation owns its target directory: callers must not run two
/// materializations against the same directory concurrently.
pub fn materialize(request: &BatchRequest) -> BatchResult {
    let mut result = BatchResult::default();

    if let Err(source) = fs::create_dir_all(&request.target_dir) {
        result.error = Some(MaterializeError::Directory {
            path: request.target_dir.clone(),
            source,
        });
        return result;
    }

    debug!(
        "Materializing {} entries into {}",
        request.entries.len(),
        request.target_dir.display()
    );

    for (key, entry) in &request.entries {
        if entry.kind != EntryKind::File {
            continue;
        }

        match write_entry(request, key, entry) {
            Ok(()) => result.written.push(key.clone()),
            Err(err) => {
                result.error = Some(err);
                return result;
            }
        }
    }

    info!(
        "Materialized {} files into {}",
        result.written.len(),
        request.target_dir.display()
    );
    result
}

fn write_entry(
    request: &BatchRequest,
    key: &str,
    entry: &VirtualFile,
) -> Result<(), MaterializeError> {
    let rel = normalize_key(key, &request.virtual_root)?;
    let bytes = encode(&entry.content, entry.is_binary);
    write_file(&request.target_dir, &rel, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileContent;
    use indexmap::IndexMap;
    use std::fs;
    use tempfile::TempDir;

    fn text_entry(content: &str) -> VirtualFile {
        VirtualFile {
            content: FileContent::Text(content.to_string()),
            is_binary: false,
            kind: EntryKind::File,
        }
    }

    fn binary_entry(bytes: Vec<u8>) -> VirtualFile {
        VirtualFile {
            content: FileContent::Bytes(bytes),
            is_binary: true,
            kind: EntryKind::File,
        }
    }

    #[test]
    fn test_writes_files_and_creates_subdirs() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let mut entries = IndexMap::new();
        entries.insert("a.txt".to_string(), text_entry("hello"));
        entries.insert("sub/b.txt".to_string(), text_entry("world"));

        let result = materialize(&BatchRequest::new(entries, dir.path()));
        assert!(result.is_complete());
        assert_eq!(result.written, vec!["a.txt", "sub/b.txt"]);

        let a = fs::read_to_string(dir.path().join("a.txt"));
        assert!(a.is_ok_and(|s| s == "hello"));
        let b = fs::read_to_string(dir.path().join("sub/b.txt"));
        assert!(b.is_ok_and(|s| s == "world"));
    }

    #[test]
    fn test_binary_round_trip() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let mut entries = IndexMap::new();
        entries.insert(
            "/home/project/blob.bin".to_string(),
            binary_entry(vec![0x00, 0xFF, 0x10]),
        );

        let result = materialize(&BatchRequest::new(entries, dir.path()));
        assert!(result.is_complete());

        let read = fs::read(dir.path().join("blob.bin"));
        assert!(read.is_ok_and(|bytes| bytes == vec![0x00, 0xFF, 0x10]));
    }

    #[test]
    fn test_skips_non_file_entries() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let mut entries = IndexMap::new();
        entries.insert(
            "src".to_string(),
            VirtualFile {
                content: FileContent::default(),
                is_binary: false,
                kind: EntryKind::Folder,
            },
        );
        entries.insert("src/main.js".to_string(), text_entry("console.log(1)"));

        let result = materialize(&BatchRequest::new(entries, dir.path()));
        assert!(result.is_complete());
        assert_eq!(result.written, vec!["src/main.js"]);
    }

    #[test]
    fn test_fail_fast_reports_partial_progress() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        // Entry two collides with a pre-existing file where it needs a
        // directory; entry three must never be attempted.
        assert!(fs::write(dir.path().join("blocked"), b"").is_ok());

        let mut entries = IndexMap::new();
        entries.insert("first.txt".to_string(), text_entry("1"));
        entries.insert("blocked/second.txt".to_string(), text_entry("2"));
        entries.insert("third.txt".to_string(), text_entry("3"));

        let result = materialize(&BatchRequest::new(entries, dir.path()));
        assert_eq!(result.written, vec!["first.txt"]);
        assert!(matches!(
            result.error,
            Some(MaterializeError::Write { .. })
        ));
        assert!(!dir.path().join("third.txt").exists());
    }

    #[test]
    fn test_traversal_key_stops_batch() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let mut entries = IndexMap::new();
        entries.insert("../outside.txt".to_string(), text_entry("nope"));

        let result = materialize(&BatchRequest::new(entries, dir.path()));
        assert!(result.written.is_empty());
        assert!(matches!(
            result.error,
            Some(MaterializeError::InvalidPath { .. })
        ));
        // Nothing escaped the target directory
        assert!(!dir.path().join("../outside.txt").exists());
    }

    #[test]
    fn test_target_dir_created_when_absent() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let target = dir.path().join("fresh/project");
        let mut entries = IndexMap::new();
        entries.insert("a.txt".to_string(), text_entry("x"));

        let result = materialize(&BatchRequest::new(entries, &target));
        assert!(result.is_complete());
        assert!(target.join("a.txt").exists());
    }

    #[test]
    fn test_empty_manifest_succeeds() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let result = materialize(&BatchRequest::new(IndexMap::new(), dir.path()));
        assert!(result.is_complete());
        assert!(result.written.is_empty());
    }
}
