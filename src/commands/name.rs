//! Name command - Manage the remembered default name.

use crate::cli::args::{NameAction, NameArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::preferences;

/// Execute the name command
pub async fn execute(args: NameArgs, config: Config) -> AppResult<()> {
    if config.preferences_path.is_none() {
        tracing::warn!("PREFERENCES_PATH not set; the default name will not outlive this process");
    }
    let store = preferences::from_config(&config);

    match args.action {
        NameAction::Get => match store.default_name().await? {
            Some(name) => println!("{}", name),
            None => println!("(no default name)"),
        },
        NameAction::Set { name } => {
            store.set_default_name(&name).await?;
            tracing::info!("Default name set");
        }
        NameAction::Clear => {
            store.clear_default_name().await?;
            tracing::info!("Default name cleared");
        }
    }

    Ok(())
}
