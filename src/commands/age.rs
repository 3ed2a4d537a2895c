//! Age command - One form submission from the command line.

use std::sync::Arc;

use crate::cli::args::AgeArgs;
use crate::config::Config;
use crate::domain::{DisplayMessage, FormSubmission};
use crate::errors::{AppError, AppResult};
use crate::infra::{preferences, PreferenceStore};
use crate::services::{AgeCalculator, Clock, FixedClock, FormHandler, FormService, SystemClock};

/// Execute the age command
pub async fn execute(args: AgeArgs, config: Config) -> AppResult<()> {
    let clock: Arc<dyn Clock> = match args.today {
        Some(day) => Arc::new(FixedClock::new(day)),
        None => Arc::new(SystemClock::new(config.today_timezone)),
    };
    let store = preferences::from_config(&config);
    let json = args.json;

    let message = run(args, clock, store.as_ref()).await?;

    if json {
        let body = serde_json::to_string(&message)
            .map_err(|e| AppError::internal(format!("Failed to encode message: {}", e)))?;
        println!("{}", body);
    } else {
        println!("{}", message);
    }

    Ok(())
}

/// Resolve the name, optionally remember it, and submit the form.
///
/// A rejected submission is a displayed message, not an error; only
/// preference failures (storage, overlong `--remember` name) are `Err`.
pub async fn run(
    args: AgeArgs,
    clock: Arc<dyn Clock>,
    store: &dyn PreferenceStore,
) -> AppResult<DisplayMessage> {
    let name = match args.name {
        Some(name) => {
            if args.remember {
                store.set_default_name(&name).await?;
                tracing::info!("Remembered default name");
            }
            Some(name)
        }
        None => store.default_name().await?,
    };

    let handler = FormHandler::new(AgeCalculator::new(clock));
    Ok(handler.submit(FormSubmission {
        name,
        dob: args.dob,
    }))
}
