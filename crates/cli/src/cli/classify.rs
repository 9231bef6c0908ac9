//! Single date classification command.

use calgrid_core::calendar::CalendarDate;
use clap::Parser;

/// Report whether a date is disabled or today.
#[derive(Debug, Parser)]
pub struct ClassifyCommand {
    /// Date to classify (YYYY-MM-DD).
    pub date: CalendarDate,

    /// Date treated as today (default: local date).
    #[arg(long)]
    pub today: Option<CalendarDate>,
}
