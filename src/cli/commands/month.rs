use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::month_detail::export_month;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::store::RecordStore;
use crate::utils::date;

/// Dump one month's episodes as text, to stdout or to a file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month { month, file, force } = cmd {
        date::parse_month(month).ok_or_else(|| AppError::InvalidMonth(month.to_string()))?;

        let store = RecordStore::new(&cfg.store);
        let records = store.load_or_warn();
        let text = export_month(&records, month);

        match file {
            Some(path) => ExportLogic::write_text(&text, path, *force)?,
            None => println!("{}", text),
        }
    }

    Ok(())
}
