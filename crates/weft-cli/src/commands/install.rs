use crate::logger;
use crate::GlobalOpts;
use anyhow::{anyhow, Result};
use std::path::Path;
use std::time::Duration;
use weft_config::Config;
use weft_install::Installer;

/// Run the package manager in a project directory
pub fn handle_install(dir: &Path, timeout: Option<u64>, _opts: &GlobalOpts) -> Result<()> {
    run_install(dir, timeout)
}

/// Shared install path for `install` and `apply --install`.
///
/// The command and its arguments come from config resolution, never from
/// manifest content.
pub(crate) fn run_install(dir: &Path, timeout_secs: Option<u64>) -> Result<()> {
    let mut config = Config::load().map_err(|e| anyhow!("Failed to load config: {}", e))?;
    let npm_path = config
        .ensure_npm_path()
        .map_err(|e| anyhow!("Failed to set up npm: {}", e))?;
    logger::debug(&format!("Using npm at {}", npm_path));

    let timeout = timeout_secs
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.install_timeout());

    let installer = Installer::new(&npm_path).with_timeout(timeout);

    logger::spinner_start(&format!("Installing dependencies in {}", dir.display()));
    let start = std::time::Instant::now();
    match installer.install(dir) {
        Ok(()) => {
            logger::spinner_success(&format!(
                "Dependencies installed in {:?}",
                start.elapsed()
            ));
            Ok(())
        }
        Err(e) => {
            logger::spinner_error(&format!("{}", e));
            logger::show_log_path();
            Err(anyhow!(e))
        }
    }
}
