//! Host side of the engine: owns the displayed month and the selection,
//! loads configuration and feeds clicks back into the engine.

use std::fs;
use std::path::Path;

use calgrid_core::calendar::{
    is_today_at, shift_month, CalendarConfig, CalendarDate, CalendarOptions, SelectionEvent,
    SelectionMode, SelectionState, Transition,
};
use calgrid_core::theme::ThemeCatalog;
use serde::Serialize;

use crate::cli::ConfigOverrides;
use crate::error::{CliError, Result};

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads options from an optional file, applies overrides and resolves them.
pub fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<CalendarConfig> {
    let mut options = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading calendar options");
            CalendarOptions::from_json(&read_file(path)?)?
        }
        None => CalendarOptions::default(),
    };
    overrides.apply(&mut options);

    Ok(CalendarConfig::resolve(options))
}

/// Built-in themes, extended by an optional catalog file.
pub fn load_catalog(path: Option<&Path>) -> Result<ThemeCatalog> {
    let mut catalog = ThemeCatalog::with_builtin();
    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "Loading theme catalog");
        catalog.extend_from_json(&read_file(path)?)?;
    }
    Ok(catalog)
}

/// Selection the host starts from, shaped by the configured mode.
pub fn initial_selection(
    config: &CalendarConfig,
    selected: Option<CalendarDate>,
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
) -> Result<SelectionState> {
    let state = match config.mode {
        SelectionMode::Single => SelectionState::single(selected),
        SelectionMode::Range => SelectionState::range(start, end)?,
    };
    Ok(state)
}

/// Date whose month is shown first: an explicit date, else the single
/// selection, else today.
pub fn month_anchor(
    explicit: Option<CalendarDate>,
    selection: &SelectionState,
    today: CalendarDate,
) -> CalendarDate {
    explicit.or(selection.selected_date()).unwrap_or(today)
}

/// Month to display after navigating `offset` months from `anchor`.
///
/// Navigation is ignored when the configuration disables it.
pub fn displayed_month(
    config: &CalendarConfig,
    anchor: CalendarDate,
    offset: i32,
) -> Result<CalendarDate> {
    if offset == 0 {
        return Ok(anchor);
    }
    if config.disable_month_nav {
        tracing::warn!(offset, "Month navigation is disabled, ignoring offset");
        return Ok(anchor);
    }
    Ok(shift_month(anchor, offset)?)
}

/// One replayed click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickOutcome {
    pub clicked: CalendarDate,
    pub accepted: bool,
    pub state: SelectionState,
    pub events: Vec<SelectionEvent>,
}

impl ClickOutcome {
    fn new(clicked: CalendarDate, transition: Transition) -> Self {
        Self {
            clicked,
            accepted: transition.is_accepted(),
            state: transition.state,
            events: transition.events,
        }
    }
}

/// Feeds each click into the engine, storing the returned state between
/// clicks the way a UI host would.
pub fn replay_clicks(
    config: &CalendarConfig,
    initial: SelectionState,
    clicks: &[CalendarDate],
) -> Vec<ClickOutcome> {
    let mut state = initial;
    clicks
        .iter()
        .map(|&clicked| {
            let transition = config.select(&state, clicked);
            state = transition.state;
            for event in &transition.events {
                tracing::info!(?event, "Selection notification");
            }
            ClickOutcome::new(clicked, transition)
        })
        .collect()
}

/// Flags reported by the classify command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub date: CalendarDate,
    pub weekday: u32,
    pub is_disabled: bool,
    pub is_today: bool,
}

pub fn classify(
    config: &CalendarConfig,
    date: CalendarDate,
    today: CalendarDate,
) -> Classification {
    Classification {
        date,
        weekday: date.weekday_from_sunday(),
        is_disabled: config.is_disabled(date),
        is_today: is_today_at(date, today),
    }
}
