//! HTTP request handlers.

pub mod age_handler;
pub mod preferences_handler;

pub use age_handler::age_routes;
pub use preferences_handler::preferences_routes;
