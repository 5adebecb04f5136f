//! Install runner
//!
//! Spawns the package manager in a validated project directory and blocks
//! until it exits. The command and its arguments are fixed at construction
//! time; nothing in a manifest can reach them. An optional timeout kills
//! the process on expiry.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;
use tracing::{debug, info, warn};
use wait_timeout::ChildExt;

use crate::errors::InstallError;
use crate::validate::{validate, ProjectValidation};

/// Default arguments passed to the package manager
const INSTALL_ARGS: &[&str] = &["install"];

/// Runs the external package manager in a project directory
#[derive(Debug, Clone)]
pub struct Installer {
    command: PathBuf,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl Installer {
    /// Build an installer for the given package-manager binary with the
    /// fixed `install` argument set
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Installer {
            command: command.into(),
            args: INSTALL_ARGS.iter().map(|s| (*s).to_string()).collect(),
            timeout: None,
        }
    }

    /// Replace the argument set. Arguments are caller-fixed, never derived
    /// from manifest content.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Kill the process and report a timeout once `timeout` elapses
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn display_command(&self) -> String {
        let mut display = self.command.to_string_lossy().to_string();
        for arg in &self.args {
            display.push(' ');
            display.push_str(arg);
        }
        display
    }

    /// Run the package manager in `dir`, blocking until it exits.
    ///
    /// Validation runs first: a missing directory or missing project
    /// manifest returns the precondition error without spawning anything.
    pub fn install(&self, dir: &Path) -> Result<(), InstallError> {
        match validate(dir) {
            ProjectValidation::DirMissing => {
                return Err(InstallError::DirMissing(dir.to_path_buf()));
            }
            ProjectValidation::ManifestMissing => {
                return Err(InstallError::ManifestMissing(dir.to_path_buf()));
            }
            ProjectValidation::ManifestOk => {}
        }

        let command_display = self.display_command();
        info!("Running {} in {}", command_display, dir.display());

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| InstallError::Spawn {
                command: command_display.clone(),
                source,
            })?;

        if let Some(timeout) = self.timeout {
            if child.wait_timeout(timeout)?.is_none() {
                let _ = child.kill();
                let _ = child.wait();
                return Err(InstallError::Timeout {
                    command: command_display,
                    timeout,
                });
            }
        }

        // Either the process already exited (timed wait) or this blocks
        // until it does, draining both pipes as it goes
        let output = child.wait_with_output()?;
        let status = output.status;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        for line in stdout.lines() {
            debug!("[install] {}", line);
        }
        for line in stderr.lines() {
            warn!("[install] {}", line);
        }

        if status.success() {
            info!("{} completed successfully", command_display);
            return Ok(());
        }

        let detail = if stderr.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            stderr.trim().to_string()
        };

        Err(InstallError::CommandFailed {
            command: command_display,
            code: status.code(),
            detail,
        })
    }
}
