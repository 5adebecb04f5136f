//! Single-file writer
//!
//! Unit of failure isolation for the materializer: one call writes one
//! file, creating missing ancestor directories first. Existing files are
//! overwritten. There is no temp-file-and-rename here; a crash mid-write
//! can leave a truncated file, which callers needing crash-safety must
//! wrap themselves.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::MaterializeError;

/// Write `bytes` to `target_dir/rel`, creating ancestors as needed.
///
/// `rel` must already be normalized; this function does not re-check for
/// traversal.
pub fn write_file(target_dir: &Path, rel: &Path, bytes: &[u8]) -> Result<(), MaterializeError> {
    let dest = target_dir.join(rel);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| MaterializeError::Write {
            path: dest.clone(),
            source,
        })?;
    }

    fs::write(&dest, bytes).map_err(|source| MaterializeError::Write {
        path: dest.clone(),
        source,
    })?;

    debug!("Wrote {} ({} bytes)", dest.display(), bytes.len());
    Ok(())
}
