use clap::{Parser, Subcommand};
use std::path::PathBuf;
use weft::{
    commands::{
        apply,
        check,
        config::{self, ConfigAction},
        init, install,
    },
    logger, GlobalOpts,
};

#[derive(Parser)]
#[command(name = "weft")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Project materializer for generated code",
    long_about = "weft is a CLI tool that reproduces virtual-file manifests on a real filesystem and bootstraps the resulting project."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure the weft tool
    #[command(subcommand_required = false, arg_required_else_help = false)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
    /// Materialize a manifest into a target directory
    Apply {
        /// Path to the manifest JSON. If not provided, reads from stdin
        manifest: Option<PathBuf>,
        /// Directory to write files into (overrides the manifest's own)
        #[arg(long)]
        target_dir: Option<PathBuf>,
        /// Run the package manager after a successful materialization
        #[arg(long)]
        install: bool,
        /// Install timeout in seconds (with --install)
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Check that a directory is an installable project
    Check {
        /// Directory to validate
        dir: PathBuf,
    },
    /// Run the package manager in a project directory
    Install {
        /// Directory containing the project to install
        dir: PathBuf,
        /// Install timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Initialize a sample manifest file
    Init {
        /// Optional filename for the manifest (default: weft.json)
        file: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger with verbosity level
    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    init_tracing();

    match cli.command {
        Commands::Config { action } => {
            config::handle_config(action, cli.global);
        }
        Commands::Apply {
            manifest,
            target_dir,
            install,
            timeout,
        } => {
            let args = apply::ApplyArgs {
                manifest,
                target_dir,
                install,
                timeout,
            };
            if let Err(e) = apply::handle_apply(args, &cli.global) {
                logger::error(&format!("Apply command failed: {}", e));
                std::process::exit(1);
            }
        }
        Commands::Check { dir } => {
            if let Err(e) = check::handle_check(&dir, &cli.global) {
                logger::error(&format!("{}", e));
                std::process::exit(1);
            }
        }
        Commands::Install { dir, timeout } => {
            if let Err(e) = install::handle_install(&dir, timeout, &cli.global) {
                logger::error(&format!("Install command failed: {}", e));
                std::process::exit(1);
            }
        }
        Commands::Init { file } => {
            init::handle_init(file, cli.global);
        }
    }
}

/// Route library-crate tracing through stderr; `RUST_LOG` overrides the
/// default warn filter
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
