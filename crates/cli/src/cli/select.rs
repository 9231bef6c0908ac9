//! Selection replay command.

use calgrid_core::calendar::CalendarDate;
use clap::Parser;

/// Replay a sequence of clicks.
#[derive(Debug, Parser)]
pub struct SelectCommand {
    /// Clicked dates, in order (YYYY-MM-DD).
    #[arg(required = true)]
    pub dates: Vec<CalendarDate>,

    /// Initial single selection.
    #[arg(long, conflicts_with_all = ["start", "end"])]
    pub selected: Option<CalendarDate>,

    /// Initial range start.
    #[arg(long)]
    pub start: Option<CalendarDate>,

    /// Initial range end.
    #[arg(long, requires = "start")]
    pub end: Option<CalendarDate>,
}
