//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate the domain logic behind the birthdate form. The
//! clock and the form service are traits so callers can inject their own.

mod age_calculator;
pub mod clock;
mod form_service;
mod presenter;

pub use age_calculator::AgeCalculator;
pub use clock::{Clock, FixedClock, SystemClock};
pub use form_service::{FormHandler, FormService};
pub use presenter::MessagePresenter;

#[cfg(any(test, feature = "test-utils"))]
pub use clock::MockClock;
#[cfg(any(test, feature = "test-utils"))]
pub use form_service::MockFormService;
