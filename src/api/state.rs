//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{preferences, PreferenceStore};
use crate::services::{AgeCalculator, FormHandler, FormService, SystemClock};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Birthdate form service
    pub form_service: Arc<dyn FormService>,
    /// Remembered default name
    pub preferences: Arc<dyn PreferenceStore>,
}

impl AppState {
    /// Create application state from configuration.
    pub fn from_config(config: &Config) -> Self {
        let clock = Arc::new(SystemClock::new(config.today_timezone));
        let form_service = Arc::new(FormHandler::new(AgeCalculator::new(clock)));

        Self {
            form_service,
            preferences: preferences::from_config(config),
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        form_service: Arc<dyn FormService>,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            form_service,
            preferences,
        }
    }
}
