//! Weft Project Bootstrap
//!
//! Validates a materialized directory as an installable project and runs
//! the package manager in it. Validation is a pure read-only precondition
//! check; the runner never spawns anything for a directory that fails it.

pub mod errors;
pub mod runner;
pub mod validate;

pub use errors::InstallError;
pub use runner::Installer;
pub use validate::{validate, ProjectValidation, PROJECT_MANIFEST};
