use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{Period, filter_records};
use crate::errors::{AppError, AppResult};
use crate::models::attack::AttackRecord;
use crate::store::RecordStore;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET, color_for_severity};
use crate::utils::date;

/// List episodes, newest first, optionally restricted to a period or a
/// single date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, date: day } = cmd {
        let store = RecordStore::new(&cfg.store);
        let records = store.load_or_warn();

        // single-day view (day detail)
        if let Some(day) = day {
            let d =
                date::parse_date(day).ok_or_else(|| AppError::InvalidDate(day.to_string()))?;
            let on_day: Vec<&AttackRecord> = records.iter().filter(|r| r.date == d).collect();

            if on_day.is_empty() {
                info(format!("No episodes recorded on {}", d));
                return Ok(());
            }

            println!("📅 Episodes on {}:", d);
            for record in on_day {
                print_record(record);
            }
            return Ok(());
        }

        let period = Period::from_key(period.as_deref().unwrap_or("all"));
        let filtered = filter_records(&records, period, date::today());

        if filtered.is_empty() {
            info(format!("No episodes in period '{}'", period.label()));
            return Ok(());
        }

        println!("📅 Episodes ({}):", period.label());
        for record in filtered.iter() {
            print_record(record);
        }
    }

    Ok(())
}

fn print_record(record: &AttackRecord) {
    let note = if record.note.is_empty() {
        String::new()
    } else {
        format!("  note: {}", record.note)
    };

    println!(
        "  {}  {:<7}  {}severity {}{}  [{}]  {}  {}  {}(id {}){}{}",
        record.date_str(),
        record.time_bucket.label(),
        color_for_severity(record.severity),
        record.severity,
        RESET,
        record.trigger_line(),
        record.location_label(),
        if record.is_work_day { "workday" } else { "day off" },
        GREY,
        record.id,
        RESET,
        note,
    );
}
