use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::models::time_bucket::TimeBucket;
use crate::models::trigger::Trigger;
use crate::store::RecordStore;
use crate::utils::date;

/// Record a new pain episode.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        time,
        severity,
        triggers,
        other,
        note,
        workday,
        rest_day,
        location,
    } = cmd
    {
        //
        // 1. Parse date (mandatory; may be past or future)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse time bucket (optional here, required by the logic)
        //
        let bucket = match time {
            Some(code) => Some(TimeBucket::from_code(code).ok_or_else(|| {
                AppError::InvalidTimeBucket(format!(
                    "Invalid time bucket '{}'. Use 'm' (Morning), 'n' (Noon) or 'e' (Evening).",
                    code
                ))
            })?),
            None => None,
        };

        //
        // 3. Parse trigger tags
        //
        let mut tags = Vec::new();
        for code in triggers {
            tags.push(Trigger::from_code(code).ok_or_else(|| {
                AppError::InvalidTrigger(format!(
                    "Invalid trigger '{}'. Use one of: sleeplessness, fatigue, unknown, dehydration, hunger, heat, stress. Free text goes through --other.",
                    code
                ))
            })?);
        }

        //
        // 4. Work-day flag: two explicit switches, both optional at parse time
        //
        let is_work_day = if *workday {
            Some(true)
        } else if *rest_day {
            Some(false)
        } else {
            None
        };

        //
        // 5. Parse pain location
        //
        let loc = match location {
            Some(code) => Some(Location::from_code(code).ok_or_else(|| {
                AppError::InvalidLocation(format!(
                    "Invalid location code '{}'. Use R, L, E, RS or LS.",
                    code
                ))
            })?),
            None => None,
        };

        //
        // 6. Execute logic
        //
        let store = RecordStore::new(&cfg.store);
        AddLogic::apply(
            &store,
            d,
            bucket,
            *severity,
            tags,
            other.clone(),
            note.clone(),
            is_work_day,
            loc,
        )?;
    }

    Ok(())
}
