//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `age` - Compute an age and print the message
//! - `name` - Manage the remembered default name
//! - `serve` - Start the HTTP server

pub mod args;

pub use args::{Cli, Commands};
