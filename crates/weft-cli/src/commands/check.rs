use crate::GlobalOpts;
use anyhow::{anyhow, Result};
use colored::Colorize;
use std::path::Path;
use weft_install::{validate, ProjectValidation, PROJECT_MANIFEST};

/// Report whether a directory is an installable project.
///
/// Read-only; exits non-zero (via the returned error) unless the project
/// manifest is present.
pub fn handle_check(dir: &Path, _opts: &GlobalOpts) -> Result<()> {
    match validate(dir) {
        ProjectValidation::DirMissing => {
            Err(anyhow!("Directory does not exist: {}", dir.display()))
        }
        ProjectValidation::ManifestMissing => Err(anyhow!(
            "Directory is not a valid npm project (missing {}): {}",
            PROJECT_MANIFEST,
            dir.display()
        )),
        ProjectValidation::ManifestOk => {
            println!(
                "{} {} is an installable project ({} found)",
                "✔".green().bold(),
                dir.display(),
                PROJECT_MANIFEST
            );
            Ok(())
        }
    }
}
