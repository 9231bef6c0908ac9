//! Month grid command.

use calgrid_core::calendar::CalendarDate;
use clap::Parser;

/// Print one month of the calendar.
#[derive(Debug, Parser)]
pub struct MonthCommand {
    /// Any date in the month to display (default: --selected, else today).
    #[arg(long)]
    pub date: Option<CalendarDate>,

    /// Months to navigate from --date, e.g. 1 or -1.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub offset: i32,

    /// Current single selection.
    #[arg(long, conflicts_with_all = ["start", "end"])]
    pub selected: Option<CalendarDate>,

    /// Current range start.
    #[arg(long)]
    pub start: Option<CalendarDate>,

    /// Current range end.
    #[arg(long, requires = "start")]
    pub end: Option<CalendarDate>,

    /// Date treated as today (default: local date).
    #[arg(long)]
    pub today: Option<CalendarDate>,
}
