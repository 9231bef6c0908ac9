use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::{CalendarError, Result};
use super::types::{CalendarDate, WeekStart};

/// One slot of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "date", rename_all = "lowercase")]
pub enum GridCell {
    /// Padding before the 1st of the month.
    Blank,
    Day(CalendarDate),
}

impl GridCell {
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            GridCell::Blank => None,
            GridCell::Day(date) => Some(*date),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, GridCell::Blank)
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::OutOfRange)
}

/// Number of days in a month, computed as the day before the 1st of the
/// following month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = first_of_month(year, month)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|next| next.pred_opt())
        .ok_or(CalendarError::OutOfRange)?;
    debug_assert_eq!(first.month(), last.month());
    Ok(last.day())
}

/// Weekday of the 1st of the month, Sunday = 0 through Saturday = 6.
pub fn first_weekday(year: i32, month: u32) -> Result<u32> {
    Ok(first_of_month(year, month)?
        .weekday()
        .num_days_from_sunday())
}

/// Blank cells needed to align the 1st under its weekday column.
/// Always in `0..=6`.
pub fn leading_blanks(first_weekday: u32, week_start: WeekStart) -> usize {
    ((first_weekday + 7 - week_start.offset()) % 7) as usize
}

/// Generates the cells of one month: leading blanks followed by every day.
///
/// No trailing padding is added. Renderers wanting full rows can use
/// [`weeks`].
pub fn generate_month_grid(year: i32, month: u32, week_start: WeekStart) -> Result<Vec<GridCell>> {
    let blanks = leading_blanks(first_weekday(year, month)?, week_start);
    let days = days_in_month(year, month)?;

    let mut cells = Vec::with_capacity(blanks + days as usize);
    cells.extend(std::iter::repeat_n(GridCell::Blank, blanks));
    for day in 1..=days {
        cells.push(GridCell::Day(CalendarDate::new(year, month, day)?));
    }

    Ok(cells)
}

/// Moves a date by whole months, keeping the day of month where possible
/// and clamping to the target month's last day otherwise.
pub fn shift_month(date: CalendarDate, delta: i32) -> Result<CalendarDate> {
    let total_months = (date.year() * 12 + date.month0() as i32)
        .checked_add(delta)
        .ok_or(CalendarError::OutOfRange)?;
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month)?);
    CalendarDate::new(year, month, day)
}

/// Splits cells into rows of seven, padding the last row with blanks.
pub fn weeks(cells: &[GridCell]) -> Vec<[GridCell; 7]> {
    cells
        .chunks(7)
        .map(|chunk| {
            let mut row = [GridCell::Blank; 7];
            row[..chunk.len()].copy_from_slice(chunk);
            row
        })
        .collect()
}
