use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RecordStore;

/// Export raw episode data.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = cmd
    {
        let store = RecordStore::new(&cfg.store);
        ExportLogic::export(&store, format.clone(), file, period, *force)?;
    }

    Ok(())
}
