use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::error::{CalendarError, Result};

/// A calendar day with no time-of-day significance.
///
/// All comparisons happen at day granularity. Values built from a
/// `NaiveDateTime` drop the time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from a year, a 1-based month and a day of month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Returns the current local calendar day.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1 = January.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Month index, 0 = January. This is the index theme catalogs use.
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Weekday index with Sunday = 0 through Saturday = 6.
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday_from_sunday(), 0 | 6)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime.date())
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| CalendarError::InvalidDateFormat(s.to_string()))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Whether clicks pick one date or a start/end pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Range,
}

/// First column of the month grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Offset under the Sunday = 0 convention.
    pub fn offset(self) -> u32 {
        match self {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        }
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(WeekStart::Sunday),
            1 => Ok(WeekStart::Monday),
            other => Err(CalendarError::InvalidWeekStart(other)),
        }
    }
}

impl From<WeekStart> for u8 {
    fn from(value: WeekStart) -> Self {
        value.offset() as u8
    }
}

/// Cell size category. A rendering hint only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl CellSize {
    /// Returns the utility classes sizing one day cell.
    pub fn dimensions_class(&self) -> &'static str {
        match self {
            CellSize::Sm => "w-8 h-8 text-xs",
            CellSize::Md => "w-10 h-10 text-sm",
            CellSize::Lg => "w-14 h-14 text-lg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_calendar_date_new_rejects_impossible_dates() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert_eq!(
            CalendarDate::new(2023, 2, 29),
            Err(CalendarError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(CalendarDate::new(2024, 13, 1).is_err());
        assert!(CalendarDate::new(2024, 4, 0).is_err());
    }

    #[test]
    fn test_from_datetime_drops_time() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let late = date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(CalendarDate::from(late), CalendarDate::from(date));
    }

    #[test]
    fn test_parse_and_display() {
        let date: CalendarDate = "2024-03-05".parse().unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 3);
        assert_eq!(date.month0(), 2);
        assert_eq!(date.day(), 5);
        assert_eq!(date.to_string(), "2024-03-05");

        assert!(matches!(
            "05/03/2024".parse::<CalendarDate>(),
            Err(CalendarError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_weekday_from_sunday() {
        // 2024-03-03 was a Sunday, 2024-03-09 a Saturday.
        let sunday = CalendarDate::new(2024, 3, 3).unwrap();
        let wednesday = CalendarDate::new(2024, 3, 6).unwrap();
        let friday = CalendarDate::new(2024, 3, 8).unwrap();
        let saturday = CalendarDate::new(2024, 3, 9).unwrap();
        assert_eq!(sunday.weekday_from_sunday(), 0);
        assert_eq!(wednesday.weekday_from_sunday(), 3);
        assert_eq!(saturday.weekday_from_sunday(), 6);
        assert!(saturday.is_weekend());
        assert!(!friday.is_weekend());
    }

    #[test]
    fn test_calendar_date_serde() {
        let date = CalendarDate::new(2024, 12, 31).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2024-12-31""#);
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }

    #[test]
    fn test_week_start_serde() {
        let monday: WeekStart = serde_json::from_str("1").unwrap();
        assert_eq!(monday, WeekStart::Monday);
        assert_eq!(serde_json::to_string(&WeekStart::Sunday).unwrap(), "0");
        assert!(serde_json::from_str::<WeekStart>("2").is_err());
    }

    #[test]
    fn test_mode_and_size_serde() {
        let mode: SelectionMode = serde_json::from_str(r#""range""#).unwrap();
        assert_eq!(mode, SelectionMode::Range);
        let size: CellSize = serde_json::from_str(r#""lg""#).unwrap();
        assert_eq!(size.dimensions_class(), "w-14 h-14 text-lg");
        assert_eq!(CellSize::default().dimensions_class(), "w-10 h-10 text-sm");
    }
}
