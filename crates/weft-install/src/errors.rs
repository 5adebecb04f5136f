use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while validating or bootstrapping a project.
///
/// The first two variants are preconditions: they are reported before any
/// process is spawned. The rest describe an install that did not complete;
/// whether the command failed to start or ran and failed is carried in the
/// message, since callers treat both the same way.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Directory does not exist: {0}")]
    DirMissing(PathBuf),

    #[error("Directory is not a valid npm project (missing package.json): {0}")]
    ManifestMissing(PathBuf),

    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{command} failed with exit code {code:?}: {detail}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        detail: String,
    },

    #[error("{command} timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
