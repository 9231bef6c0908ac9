//! CLI command definitions.

pub mod classify;
pub mod month;
pub mod select;
pub mod theme;

use std::path::PathBuf;

use calgrid_core::calendar::{CalendarDate, CalendarOptions, CellSize, SelectionMode, WeekStart};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Headless calendar engine in the terminal.
#[derive(Debug, Parser)]
#[command(name = "calgrid")]
#[command(version)]
#[command(about = "Month grids, date selection and themes", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Calendar options file (JSON, camelCase keys).
    #[arg(long, env = "CALGRID_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Extra theme catalog (JSON) merged over the built-in themes.
    #[arg(long, env = "CALGRID_THEMES", global = true)]
    pub themes: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Selection mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Single,
    Range,
}

impl From<ModeArg> for SelectionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => SelectionMode::Single,
            ModeArg::Range => SelectionMode::Range,
        }
    }
}

/// Cell size argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SizeArg {
    Sm,
    Md,
    Lg,
}

impl From<SizeArg> for CellSize {
    fn from(size: SizeArg) -> Self {
        match size {
            SizeArg::Sm => CellSize::Sm,
            SizeArg::Md => CellSize::Md,
            SizeArg::Lg => CellSize::Lg,
        }
    }
}

/// Command-line overrides for the options file.
#[derive(Debug, Default, Args)]
pub struct ConfigOverrides {
    /// Selection mode.
    #[arg(long, global = true)]
    pub mode: Option<ModeArg>,

    /// Theme name.
    #[arg(long, env = "CALGRID_THEME", global = true)]
    pub theme: Option<String>,

    /// First weekday column: 0 = Sunday, 1 = Monday.
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub week_starts_on: Option<u8>,

    /// Lower date bound (YYYY-MM-DD), enforced with --disable-past-dates.
    #[arg(long, global = true)]
    pub min_date: Option<CalendarDate>,

    /// Upper date bound (YYYY-MM-DD), enforced with --disable-future-dates.
    #[arg(long, global = true)]
    pub max_date: Option<CalendarDate>,

    /// Disable dates before --min-date.
    #[arg(long, global = true)]
    pub disable_past_dates: bool,

    /// Disable dates after --max-date.
    #[arg(long, global = true)]
    pub disable_future_dates: bool,

    /// Disable Saturdays and Sundays.
    #[arg(long, global = true)]
    pub disable_weekends: bool,

    /// Hide month navigation and ignore --offset.
    #[arg(long, global = true)]
    pub disable_month_nav: bool,

    /// Do not highlight today.
    #[arg(long, global = true)]
    pub no_highlight_today: bool,

    /// Cell size hint.
    #[arg(long, global = true)]
    pub size: Option<SizeArg>,
}

impl ConfigOverrides {
    /// Writes every given flag over the loaded options.
    pub fn apply(&self, options: &mut CalendarOptions) {
        if let Some(mode) = self.mode {
            options.mode = Some(mode.into());
        }
        if let Some(theme) = &self.theme {
            options.theme = Some(theme.clone());
        }
        if let Some(week_start) = self.week_starts_on {
            options.week_starts_on = WeekStart::try_from(week_start).ok();
        }
        if let Some(min_date) = self.min_date {
            options.min_date = Some(min_date);
        }
        if let Some(max_date) = self.max_date {
            options.max_date = Some(max_date);
        }
        if self.disable_past_dates {
            options.disable_past_dates = Some(true);
        }
        if self.disable_future_dates {
            options.disable_future_dates = Some(true);
        }
        if self.disable_weekends {
            options.disable_weekends = Some(true);
        }
        if self.disable_month_nav {
            options.disable_month_nav = Some(true);
        }
        if self.no_highlight_today {
            options.highlight_today = Some(false);
        }
        if let Some(size) = self.size {
            options.size = Some(size.into());
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a month grid with the current selection.
    Month(month::MonthCommand),
    /// Replay clicks through the selection engine.
    Select(select::SelectCommand),
    /// Show the palette a theme resolves to.
    Theme(theme::ThemeCommand),
    /// List available themes.
    Themes,
    /// Classify a single date.
    Classify(classify::ClassifyCommand),
}
