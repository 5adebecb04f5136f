//! weft library - expose modules for testing
//!
//! This library exposes the command handlers and shared CLI types needed
//! for testing and integration.

pub mod commands;
pub mod common;

pub use common::GlobalOpts;
pub use weft_logger as logger;
