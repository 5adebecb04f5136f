//! Project validation
//!
//! A directory is installable when it exists and carries the recognized
//! project manifest. The check is read-only; it never creates or mutates
//! anything on disk.

use std::path::Path;

/// Marker file whose presence makes a directory an installable project
pub const PROJECT_MANIFEST: &str = "package.json";

/// Validation state of a target directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectValidation {
    /// The directory does not exist or is not a directory
    DirMissing,
    /// The directory exists but has no project manifest
    ManifestMissing,
    /// The directory is an installable project
    ManifestOk,
}

impl ProjectValidation {
    pub fn is_ok(self) -> bool {
        self == ProjectValidation::ManifestOk
    }
}

/// Check whether `dir` is an installable project
pub fn validate(dir: &Path) -> ProjectValidation {
    if !dir.is_dir() {
        return ProjectValidation::DirMissing;
    }
    if !dir.join(PROJECT_MANIFEST).is_file() {
        return ProjectValidation::ManifestMissing;
    }
    ProjectValidation::ManifestOk
}
