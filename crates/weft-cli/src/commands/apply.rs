use crate::commands::install::run_install;
use crate::logger;
use crate::GlobalOpts;
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use weft_config::Config;
use weft_manifest::{materialize, ManifestDocument};

/// Arguments for the apply command
pub struct ApplyArgs {
    pub manifest: Option<PathBuf>,
    pub target_dir: Option<PathBuf>,
    pub install: bool,
    pub timeout: Option<u64>,
}

/// Materialize a manifest and optionally bootstrap the resulting project
pub fn handle_apply(args: ApplyArgs, _opts: &GlobalOpts) -> Result<()> {
    let text = match &args.manifest {
        Some(path) => {
            logger::debug(&format!("Reading manifest from {}", path.display()));
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read manifest: {}", path.display()))?
        }
        None => {
            logger::debug("Reading manifest from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read manifest from stdin")?;
            buffer
        }
    };

    let document = ManifestDocument::from_json(&text).context("Manifest is not valid JSON")?;

    let target_dir = args
        .target_dir
        .clone()
        .or_else(|| document.target_dir.clone())
        .ok_or_else(|| {
            anyhow!("No target directory: pass --target-dir or embed target_dir in the manifest")
        })?;

    let mut request = document.into_request(&target_dir);
    match Config::load() {
        Ok(config) => {
            if let Some(root) = config.virtual_root {
                request = request.with_virtual_root(root);
            }
        }
        Err(e) => logger::warn(&format!("Failed to load config: {}", e)),
    }

    let start = std::time::Instant::now();
    let result = materialize(&request);

    for key in &result.written {
        println!(" {} {}", "+".bold().green(), key);
    }

    if let Some(error) = result.error {
        logger::error(&format!(
            "Stopped after {} file(s): {}",
            result.written.len(),
            error
        ));
        return Err(anyhow!(error).context("Materialization incomplete"));
    }

    let elapsed_ms = start.elapsed().as_millis();
    println!(
        "{}",
        format!(
            "Wrote {} file(s) to {} in {}ms",
            result.written.len(),
            target_dir.display(),
            elapsed_ms
        )
        .bold()
        .dimmed()
    );

    if args.install {
        run_install(&target_dir, args.timeout)?;
    }

    Ok(())
}
