use crate::config::Config;
use crate::core::calendar::build_calendar;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET, color_for_severity};

/// Print the calendar index: one line per date, one marker for every
/// distinct severity recorded that day. Always the full history.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::new(&cfg.store);
    let records = store.load_or_warn();
    let index = build_calendar(&records);

    if index.is_empty() {
        info("No episodes recorded yet");
        return Ok(());
    }

    println!("📅 Calendar:");
    for (day, markers) in &index {
        let dots = markers
            .iter()
            .map(|m| {
                format!(
                    "{}● {}{} {}{}{}",
                    color_for_severity(m.severity),
                    m.severity,
                    RESET,
                    GREY,
                    m.color,
                    RESET
                )
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!("  {}  {}", day, dots);
    }

    Ok(())
}
