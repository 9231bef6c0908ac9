//! Pretty output formatting.

use calgrid_core::calendar::{CellStyle, DayCell, MonthView, SelectionEvent, SelectionState};
use calgrid_core::theme::ThemePalette;

use crate::host::{Classification, ClickOutcome};

const CELL_WIDTH: usize = 4;
const GRID_WIDTH: usize = CELL_WIDTH * 7;

/// Format one cell as a fixed-width token.
fn format_cell(cell: &DayCell, style: CellStyle) -> String {
    let day = cell.date.map(|date| date.day()).unwrap_or_default();
    match style {
        CellStyle::Blank => " ".repeat(CELL_WIDTH),
        CellStyle::Disabled => format!("~{:>2}~", day),
        CellStyle::Selected => format!("[{:>2}]", day),
        CellStyle::Today => format!("({:>2})", day),
        CellStyle::InRange => format!("<{:>2}>", day),
        CellStyle::Normal => format!(" {:>2} ", day),
    }
}

/// Format a month view as a text grid.
pub fn format_month(view: &MonthView) -> String {
    let title = if view.show_navigation {
        format!("<  {}  >", view.title)
    } else {
        view.title.clone()
    };
    let mut output = format!("{:^width$}\n", title, width = GRID_WIDTH);

    for label in &view.weekday_labels {
        let short: String = label.chars().take(3).collect();
        output.push_str(&format!("{:^width$}", short, width = CELL_WIDTH));
    }

    for row in view.rows() {
        output.push('\n');
        for cell in row {
            output.push_str(&format_cell(cell, view.style_of(cell)));
        }
        for _ in row.len()..7 {
            output.push_str(&" ".repeat(CELL_WIDTH));
        }
    }

    output.push_str("\n\n[d] selected  (d) today  <d> in range  ~d~ disabled");
    output
}

/// Format a selection state for display.
pub fn format_state(state: &SelectionState) -> String {
    match state {
        SelectionState::Idle => "nothing selected".to_string(),
        SelectionState::SingleSelected { date } => format!("selected {}", date),
        SelectionState::RangeEmpty => "empty range".to_string(),
        SelectionState::RangeStart { start } => format!("range from {}", start),
        SelectionState::RangeComplete { range } => {
            format!("range {} .. {}", range.start(), range.end())
        }
    }
}

fn format_event(event: &SelectionEvent) -> String {
    match event {
        SelectionEvent::DateChanged { date } => format!("onDateChange({})", date),
        SelectionEvent::RangeChanged { start, end } => match end {
            Some(end) => format!("onRangeChange({}, {})", start, end),
            None => format!("onRangeChange({}, null)", start),
        },
    }
}

/// Format replayed clicks, one line per click.
pub fn format_clicks(outcomes: &[ClickOutcome]) -> String {
    if outcomes.is_empty() {
        return "No clicks.".to_string();
    }
    let mut output = format!("CLICKS ({})\n", outcomes.len());
    output.push_str(&"-".repeat(40));
    for outcome in outcomes {
        if outcome.accepted {
            let events: Vec<String> = outcome.events.iter().map(format_event).collect();
            output.push_str(&format!(
                "\n{} -> {}\n  {}",
                outcome.clicked,
                format_state(&outcome.state),
                events.join(", ")
            ));
        } else {
            output.push_str(&format!(
                "\n{} -> ignored (disabled), still {}",
                outcome.clicked,
                format_state(&outcome.state)
            ));
        }
    }
    output
}

/// Format a palette for display.
pub fn format_palette(name: &str, palette: &ThemePalette) -> String {
    let mut output = format!("{}\n", name);
    if let Some(bg) = &palette.container_bg {
        output.push_str(&format!("  Container: {}\n", bg));
    }
    if let Some(border) = &palette.container_border {
        output.push_str(&format!("  Border: {}\n", border));
    }
    output.push_str(&format!(
        "  Selected: {} {}\n  Today: {} {}\n  Normal: {} {}\n  Disabled: {} {}\n  Radius: {}",
        palette.selected_bg,
        palette.selected_text,
        palette.today_bg,
        palette.today_text,
        palette.normal_text,
        palette.normal_hover_bg,
        palette.disabled_bg,
        palette.disabled_text,
        palette.border_radius
    ));
    output
}

/// Format theme names for display.
pub fn format_theme_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        return "No themes found.".to_string();
    }
    let mut output = format!("THEMES ({})\n", names.len());
    output.push_str(&"-".repeat(40));
    for name in names {
        output.push_str(&format!("\n{}", name));
    }
    output
}

/// Format a date classification for display.
pub fn format_classification(result: &Classification) -> String {
    format!(
        "{}\n  Weekday: {}\n  Disabled: {}\n  Today: {}",
        result.date, result.weekday, result.is_disabled, result.is_today
    )
}
