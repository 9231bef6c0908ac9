mod classify;
mod config;
mod error;
mod grid;
mod selection;
mod types;
mod view;

pub use classify::{
    is_after, is_before, is_disabled, is_today, is_today_at, same_day, DatePredicate, DisableRules,
};
pub use config::{CalendarConfig, CalendarOptions, Locale, LocaleOptions};
pub use error::{CalendarError, Result};
pub use grid::{
    days_in_month, first_weekday, generate_month_grid, leading_blanks, shift_month, weeks, GridCell,
};
pub use selection::{select, DateRange, SelectionEvent, SelectionState, Transition};
pub use types::{CalendarDate, CellSize, SelectionMode, WeekStart};
pub use view::{CellStyle, DayCell, MonthView};
