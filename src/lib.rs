//! Age form - Birthdate form logic as a library, CLI and HTTP API
//!
//! Computes a person's age in whole years from a birthdate and renders the
//! single message a form shows: `"<name>, you are <age> years old!"` or an
//! error text, classified as success or error.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Birthdates, ages, messages and form errors
//! - **services**: Age calculation, message presentation, form handling
//! - **infra**: Default-name storage
//! - **api**: HTTP handlers and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Compute an age
//! cargo run -- age --name Ann --dob 1994-06-15
//!
//! # Remember a default name, then omit --name
//! cargo run -- name set Ann
//! cargo run -- age --dob 1994-06-15
//!
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{AgeInYears, DateOfBirth, DisplayMessage, FormError, FormSubmission};
pub use errors::{AppError, AppResult};
pub use services::{AgeCalculator, FormHandler, FormService, MessagePresenter};
