use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty JSON record store
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing migralog…");

    let result = if let Some(custom) = &cli.store {
        Config::init_all(Some(custom.clone()), cli.test)
    } else {
        Config::init_all(None, cli.test)
    };
    result.map_err(|e| AppError::Config(format!("initialization failed: {e}")))?;

    println!("🎉 migralog initialization completed!");
    Ok(())
}
