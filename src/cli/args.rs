//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Age form - Compute ages from birthdates and render the result message
#[derive(Parser, Debug)]
#[command(name = "age-form")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute an age and print the message
    Age(AgeArgs),

    /// Manage the remembered default name
    Name(NameArgs),

    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the age command
#[derive(Parser, Debug)]
pub struct AgeArgs {
    /// Name to greet (defaults to the remembered name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Birthdate, e.g. 2000-06-15
    #[arg(short, long)]
    pub dob: Option<String>,

    /// Compute the age as of this date instead of today
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Remember the given name as the default
    #[arg(short, long, requires = "name")]
    pub remember: bool,

    /// Print the message as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the name command
#[derive(Parser, Debug)]
pub struct NameArgs {
    #[command(subcommand)]
    pub action: NameAction,
}

/// Default name actions
#[derive(Subcommand, Debug)]
pub enum NameAction {
    /// Show the remembered name
    Get,
    /// Remember a name
    Set {
        /// Name used when --name is omitted
        name: String,
    },
    /// Forget the remembered name
    Clear,
}

/// Arguments for the serve command
///
/// Unset flags fall back to `SERVER_HOST` / `SERVER_PORT` via `Config`.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}
