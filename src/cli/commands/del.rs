use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;

/// Delete an episode by id (no-op when the id is unknown).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let store = RecordStore::new(&cfg.store);
        DeleteLogic::apply(&store, *id)?;
    }

    Ok(())
}
