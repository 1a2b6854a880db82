use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::Period;
use crate::core::report::compose;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RecordStore;
use crate::utils::date;

/// Compose the period report; print it (the copyable sink) or write it
/// to a file for sharing.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        period,
        file,
        force,
    } = cmd
    {
        let store = RecordStore::new(&cfg.store);
        let records = store.load_or_warn();

        let key = period.clone().unwrap_or_else(|| cfg.default_period.clone());
        let report = compose(&records, Period::from_key(&key), date::today());

        match file {
            Some(path) => ExportLogic::write_text(&report, path, *force)?,
            None => println!("{}", report),
        }
    }

    Ok(())
}
