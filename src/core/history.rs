use crate::core::calendar::day_bounds;
use crate::domain::model::{DayMenu, MenuRecord};
use crate::domain::ports::MenuStore;
use crate::utils::error::{MenuError, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Store `day` as the record for `now`'s calendar day unless one exists.
///
/// Returns `true` when a record was written.
pub async fn record_if_absent<S: MenuStore>(store: &S, now: NaiveDateTime, day: &DayMenu) -> Result<bool> {
    let (start, end) = day_bounds(now.date());
    let existing = store.find_between(start, end).await?;
    if !existing.is_empty() {
        tracing::debug!("Menu for {} already recorded, skipping write", now.date());
        return Ok(false);
    }

    store
        .insert(MenuRecord {
            date_modified: now,
            lunch: day.lunch.clone(),
            dinner: day.dinner.clone(),
        })
        .await?;
    tracing::info!("💾 Recorded menu for {}", now.date());
    Ok(true)
}

/// The single record stored on the given calendar day.
pub async fn lookup<S: MenuStore>(store: &S, month: u32, day: u32, year: i32) -> Result<MenuRecord> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(MenuError::InvalidDate { month, day, year })?;
    let (start, end) = day_bounds(date);

    let mut records = store.find_between(start, end).await?;
    match records.len() {
        0 => Err(MenuError::NotFound { date }),
        1 => Ok(records.remove(0)),
        count => Err(MenuError::IntegrityError { date, count }),
    }
}
