//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Form Messages
// =============================================================================

/// Shown when the birthdate field is empty
pub const MSG_MISSING_BIRTHDATE: &str = "Please enter your birthdate";

/// Shown when the birthdate cannot be read as a calendar date
pub const MSG_INVALID_BIRTHDATE: &str = "Please enter a valid birthdate";

/// Shown when the birthdate lies after today
pub const MSG_FUTURE_BIRTHDATE: &str = "Birthdate cannot be in the future";

/// Shown when the name field is empty
pub const MSG_MISSING_NAME: &str = "Please enter your name!";

// =============================================================================
// Message Styling
// =============================================================================

/// CSS classes applied to a successful message element
pub const CLASS_SUCCESS: &str = "alert alert-success";

/// CSS classes applied to an error message element
pub const CLASS_ERROR: &str = "alert alert-danger";

// =============================================================================
// Date Parsing
// =============================================================================

/// Accepted birthdate formats, tried in order.
///
/// `%Y-%m-%d` is what an HTML date input submits.
pub const BIRTHDATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

// =============================================================================
// Preferences
// =============================================================================

/// Maximum length, in characters, of a remembered default name
pub const MAX_DEFAULT_NAME_LENGTH: usize = 100;

/// Shown when a default name exceeds the length limit
pub const MSG_DEFAULT_NAME_TOO_LONG: &str = "Name must be at most 100 characters";

// =============================================================================
// Clock
// =============================================================================

/// Compute "today" in the machine's local time zone
pub const TIMEZONE_LOCAL: &str = "local";

/// Compute "today" in UTC
pub const TIMEZONE_UTC: &str = "utc";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
