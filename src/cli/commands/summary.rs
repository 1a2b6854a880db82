use crate::config::Config;
use crate::core::monthly::{day_numbers, summarize_by_month};
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, RESET};

/// Per-month totals, newest month first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::new(&cfg.store);
    let records = store.load_or_warn();
    let months = summarize_by_month(&records);

    if months.is_empty() {
        info("No episodes recorded yet");
        return Ok(());
    }

    println!("📅 Monthly summaries:");
    for (month, summary) in &months {
        let days = day_numbers(summary)
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "  {CYAN}{}{RESET}  {} episodes  days: {}",
            month, summary.count, days
        );
    }

    Ok(())
}
