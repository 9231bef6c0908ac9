use thiserror::Error;

/// Errors raised when constructing calendar values from caller input.
///
/// The engine itself never fails on valid values; these only guard the
/// boundary where raw numbers or strings become dates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),
    #[error("Invalid week start: {0} (expected 0 for Sunday or 1 for Monday)")]
    InvalidWeekStart(u8),
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),
    #[error("Date out of supported range")]
    OutOfRange,
    #[error("Range end given without a range start")]
    RangeEndWithoutStart,
    #[error("Invalid calendar options: {0}")]
    InvalidOptions(String),
}

/// Result type for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let error = CalendarError::InvalidDate {
            year: 2023,
            month: 2,
            day: 30,
        };
        assert_eq!(error.to_string(), "Invalid date: 2023-02-30");
    }

    #[test]
    fn test_invalid_week_start_display() {
        assert_eq!(
            CalendarError::InvalidWeekStart(3).to_string(),
            "Invalid week start: 3 (expected 0 for Sunday or 1 for Monday)"
        );
    }

    #[test]
    fn test_invalid_date_format_display() {
        let err = CalendarError::InvalidDateFormat("03/05/2024".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid date format: 03/05/2024 (expected YYYY-MM-DD)"
        );
    }
}
