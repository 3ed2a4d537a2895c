//! Domain layer - Core form entities and logic
//!
//! Birthdates, ages, display messages and the errors users see.
//!
//! DDD: Domain layer has NO infrastructure dependencies.
//! Contains: Value Objects and the age arithmetic.

pub mod age;
pub mod birthdate;
pub mod error;
pub mod message;

pub use age::{age_on, AgeInYears};
pub use birthdate::DateOfBirth;
pub use error::FormError;
pub use message::{DisplayMessage, FormSubmission};
