use serde::Serialize;

use super::classify::{is_today_at, same_day};
use super::config::CalendarConfig;
use super::error::Result;
use super::grid::{generate_month_grid, GridCell};
use super::selection::SelectionState;
use super::types::{CalendarDate, CellSize, SelectionMode};
use crate::theme::{ThemeCatalog, ThemePalette};

/// Everything a renderer needs to paint one grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub is_blank: bool,
    pub date: Option<CalendarDate>,
    pub is_disabled: bool,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_in_range: bool,
}

impl DayCell {
    fn blank() -> Self {
        Self {
            is_blank: true,
            date: None,
            is_disabled: false,
            is_selected: false,
            is_today: false,
            is_in_range: false,
        }
    }

    /// Classifies a grid cell against the configuration and the selection.
    ///
    /// Highlighting follows the configured mode: a range left over in the
    /// state is not shown in single mode, and a single date is not shown
    /// in range mode.
    pub fn classify(
        cell: GridCell,
        config: &CalendarConfig,
        selection: &SelectionState,
        today: CalendarDate,
    ) -> Self {
        match cell {
            GridCell::Blank => Self::blank(),
            GridCell::Day(date) => {
                let (is_selected, is_in_range) = match config.mode {
                    SelectionMode::Single => (same_day(date, selection.selected_date()), false),
                    SelectionMode::Range => (
                        same_day(date, selection.range_start())
                            || same_day(date, selection.range_end()),
                        selection.is_in_range(date),
                    ),
                };
                Self {
                    is_blank: false,
                    date: Some(date),
                    is_disabled: config.is_disabled(date),
                    is_selected,
                    is_today: is_today_at(date, today),
                    is_in_range,
                }
            }
        }
    }
}

/// Visual class of a cell. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellStyle {
    Blank,
    Disabled,
    Selected,
    Today,
    InRange,
    Normal,
}

impl CellStyle {
    /// Precedence: disabled, selected, today (if highlighted), in range.
    pub fn for_cell(cell: &DayCell, highlight_today: bool) -> Self {
        if cell.is_blank {
            CellStyle::Blank
        } else if cell.is_disabled {
            CellStyle::Disabled
        } else if cell.is_selected {
            CellStyle::Selected
        } else if cell.is_today && highlight_today {
            CellStyle::Today
        } else if cell.is_in_range {
            CellStyle::InRange
        } else {
            CellStyle::Normal
        }
    }
}

/// One displayed month, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub weekday_labels: Vec<String>,
    pub cells: Vec<DayCell>,
    pub palette: ThemePalette,
    pub size: CellSize,
    pub highlight_today: bool,
    pub show_navigation: bool,
}

impl MonthView {
    /// Builds the view of the month containing `displayed`.
    pub fn build(
        config: &CalendarConfig,
        displayed: CalendarDate,
        selection: &SelectionState,
        today: CalendarDate,
        catalog: &ThemeCatalog,
    ) -> Result<Self> {
        let cells = generate_month_grid(displayed.year(), displayed.month(), config.week_start)?
            .into_iter()
            .map(|cell| DayCell::classify(cell, config, selection, today))
            .collect();

        Ok(Self {
            year: displayed.year(),
            month: displayed.month(),
            title: config.locale.month_title(displayed),
            weekday_labels: config
                .locale
                .weekday_header(config.week_start)
                .into_iter()
                .map(String::from)
                .collect(),
            cells,
            palette: catalog.resolve(&config.theme, displayed.month0()).clone(),
            size: config.size,
            highlight_today: config.highlight_today,
            show_navigation: !config.disable_month_nav,
        })
    }

    pub fn style_of(&self, cell: &DayCell) -> CellStyle {
        CellStyle::for_cell(cell, self.highlight_today)
    }

    /// Cells in rows of seven. The last row may be short.
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{CalendarOptions, SelectionMode, WeekStart};
    use crate::theme::SEASONAL;

    fn make_date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn day_cell(view: &MonthView, day: u32) -> DayCell {
        *view
            .cells
            .iter()
            .find(|cell| cell.date.map(|d| d.day()) == Some(day))
            .unwrap()
    }

    #[test]
    fn test_build_month_view() {
        let config = CalendarConfig::resolve(CalendarOptions {
            week_starts_on: Some(WeekStart::Monday),
            theme: Some("seasonal".to_string()),
            ..Default::default()
        });
        let view = MonthView::build(
            &config,
            make_date(2024, 7, 14),
            &SelectionState::Idle,
            make_date(2024, 7, 4),
            ThemeCatalog::builtin(),
        )
        .unwrap();

        assert_eq!(view.title, "July 2024");
        assert_eq!(view.weekday_labels[0], "Mon");
        // July 2024 starts on a Monday.
        assert!(!view.cells[0].is_blank);
        assert_eq!(view.cells.len(), 31);
        assert_eq!(view.palette, SEASONAL[6]);
        assert!(view.show_navigation);
        assert!(day_cell(&view, 4).is_today);
        assert_eq!(view.style_of(&day_cell(&view, 4)), CellStyle::Today);
    }

    #[test]
    fn test_range_highlighting_in_view() {
        let config = CalendarConfig::resolve(CalendarOptions {
            mode: Some(SelectionMode::Range),
            disable_weekends: Some(true),
            ..Default::default()
        });
        let selection =
            SelectionState::range(Some(make_date(2024, 3, 4)), Some(make_date(2024, 3, 12)))
                .unwrap();
        let view = MonthView::build(
            &config,
            make_date(2024, 3, 1),
            &selection,
            make_date(2024, 3, 6),
            ThemeCatalog::builtin(),
        )
        .unwrap();

        // March 2024 starts on a Friday.
        assert_eq!(view.cells.iter().filter(|c| c.is_blank).count(), 5);
        assert_eq!(view.style_of(&view.cells[0]), CellStyle::Blank);

        assert_eq!(view.style_of(&day_cell(&view, 4)), CellStyle::Selected);
        assert_eq!(view.style_of(&day_cell(&view, 5)), CellStyle::InRange);
        // Today wins over in-range.
        assert_eq!(view.style_of(&day_cell(&view, 6)), CellStyle::Today);
        // A disabled weekend inside the range stays disabled.
        let saturday = day_cell(&view, 9);
        assert!(saturday.is_in_range);
        assert_eq!(view.style_of(&saturday), CellStyle::Disabled);
        assert_eq!(view.style_of(&day_cell(&view, 12)), CellStyle::Selected);
        assert_eq!(view.style_of(&day_cell(&view, 13)), CellStyle::Normal);
    }

    #[test]
    fn test_highlighting_follows_configured_mode() {
        let today = make_date(2024, 3, 20);
        let range =
            SelectionState::range(Some(make_date(2024, 3, 4)), Some(make_date(2024, 3, 12)))
                .unwrap();
        let single = CalendarConfig::default();

        let start = GridCell::Day(make_date(2024, 3, 4));
        let cell = DayCell::classify(start, &single, &range, today);
        assert!(!cell.is_selected);
        let inside = GridCell::Day(make_date(2024, 3, 5));
        let cell = DayCell::classify(inside, &single, &range, today);
        assert!(!cell.is_in_range);

        let range_mode = CalendarConfig::resolve(CalendarOptions {
            mode: Some(SelectionMode::Range),
            ..Default::default()
        });
        let picked = make_date(2024, 3, 7);
        let leftover = SelectionState::SingleSelected { date: picked };
        let cell = DayCell::classify(GridCell::Day(picked), &range_mode, &leftover, today);
        assert!(!cell.is_selected);
        let cell = DayCell::classify(GridCell::Day(picked), &single, &leftover, today);
        assert!(cell.is_selected);
    }

    #[test]
    fn test_highlight_today_off() {
        let config = CalendarConfig::resolve(CalendarOptions {
            highlight_today: Some(false),
            disable_month_nav: Some(true),
            ..Default::default()
        });
        let today = make_date(2024, 3, 6);
        let view = MonthView::build(
            &config,
            today,
            &SelectionState::Idle,
            today,
            ThemeCatalog::builtin(),
        )
        .unwrap();

        let cell = day_cell(&view, 6);
        assert!(cell.is_today);
        assert_eq!(view.style_of(&cell), CellStyle::Normal);
        assert!(!view.show_navigation);
    }

    #[test]
    fn test_rows() {
        let view = MonthView::build(
            &CalendarConfig::default(),
            make_date(2024, 3, 1),
            &SelectionState::Idle,
            make_date(2024, 1, 1),
            ThemeCatalog::builtin(),
        )
        .unwrap();

        // 5 blanks + 31 days = 36 cells.
        let rows: Vec<_> = view.rows().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[5].len(), 1);
    }

    #[test]
    fn test_month_view_serializes_render_contract() {
        let view = MonthView::build(
            &CalendarConfig::default(),
            make_date(2024, 9, 1),
            &SelectionState::single(Some(make_date(2024, 9, 2))),
            make_date(2024, 1, 1),
            ThemeCatalog::builtin(),
        )
        .unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["title"], "September 2024");
        assert_eq!(json["cells"][1]["date"], "2024-09-02");
        assert_eq!(json["cells"][1]["isSelected"], true);
        assert_eq!(json["cells"][1]["isBlank"], false);
        assert_eq!(json["palette"]["selectedBg"], "bg-blue-600");
        assert_eq!(json["size"], "md");
    }
}
