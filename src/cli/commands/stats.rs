use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::{location_severity, trigger_severity, workday_distribution};
use crate::core::filter::{Period, filter_records};
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::formatting::{bar, pad_left, pad_right};

/// Render the three aggregates for a period as text charts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { period } = cmd {
        let store = RecordStore::new(&cfg.store);
        let records = store.load_or_warn();

        let period = Period::from_key(period.as_deref().unwrap_or("all"));
        let filtered = filter_records(&records, period, date::today());

        if filtered.is_empty() {
            info(format!("No episodes in period '{}'", period.label()));
            return Ok(());
        }

        println!("📊 Statistics ({})", period.label());

        println!("\nAverage severity by trigger:");
        for (label, value) in trigger_severity(&filtered) {
            println!("  {} {:>4.1}  {}", pad_right(&label, 16), value, bar(value));
        }

        println!("\nAverage severity by pain location:");
        for (label, value) in location_severity(&filtered) {
            println!("  {} {:>4.1}  {}", pad_right(&label, 16), value, bar(value));
        }

        if let Some(split) = workday_distribution(&filtered) {
            println!("\nWorkday distribution:");
            println!(
                "  {} {}",
                pad_right("Workday", 16),
                pad_left(&split.workdays.to_string(), 4)
            );
            println!(
                "  {} {}",
                pad_right("Holiday", 16),
                pad_left(&split.holidays.to_string(), 4)
            );
        }
    }

    Ok(())
}
