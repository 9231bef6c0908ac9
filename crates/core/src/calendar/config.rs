//! Widget configuration with documented defaults.

use serde::{Deserialize, Serialize};

use super::classify::{is_disabled, DisableRules};
use super::error::{CalendarError, Result};
use super::selection::{select, SelectionState, Transition};
use super::types::{CalendarDate, CellSize, SelectionMode, WeekStart};
use crate::serde::{deserialize_optional_date, deserialize_optional_string};
use crate::theme::DEFAULT_THEME;

const DEFAULT_WEEK_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const DEFAULT_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Raw locale labels as supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleOptions {
    /// Sunday-first weekday labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_days: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_names: Option<Vec<String>>,
}

/// Every option is optional; see [`CalendarConfig::resolve`] for defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarOptions {
    pub mode: Option<SelectionMode>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    pub min_date: Option<CalendarDate>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    pub max_date: Option<CalendarDate>,
    pub disable_past_dates: Option<bool>,
    pub disable_future_dates: Option<bool>,
    pub disable_weekends: Option<bool>,
    pub disable_month_nav: Option<bool>,
    pub highlight_today: Option<bool>,
    pub week_starts_on: Option<WeekStart>,
    pub locale: Option<LocaleOptions>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub theme: Option<String>,
    pub size: Option<CellSize>,
}

impl CalendarOptions {
    /// Parse options from a JSON document using the widget's camelCase keys.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CalendarError::InvalidOptions(e.to_string()))
    }
}

/// Weekday and month labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    week_days: Vec<String>,
    month_names: Vec<String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            week_days: DEFAULT_WEEK_DAYS.iter().map(|s| s.to_string()).collect(),
            month_names: DEFAULT_MONTH_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Locale {
    /// Builds a locale, keeping the English labels for any list that is
    /// missing or has the wrong length.
    pub fn from_options(options: LocaleOptions) -> Self {
        let mut locale = Self::default();

        if let Some(week_days) = options.week_days {
            if week_days.len() == 7 {
                locale.week_days = week_days;
            } else {
                tracing::warn!(
                    count = week_days.len(),
                    "Ignoring weekday labels, expected 7"
                );
            }
        }

        if let Some(month_names) = options.month_names {
            if month_names.len() == 12 {
                locale.month_names = month_names;
            } else {
                tracing::warn!(
                    count = month_names.len(),
                    "Ignoring month names, expected 12"
                );
            }
        }

        locale
    }

    /// Sunday-first weekday labels.
    pub fn week_days(&self) -> &[String] {
        &self.week_days
    }

    pub fn month_names(&self) -> &[String] {
        &self.month_names
    }

    /// Weekday labels in grid column order.
    pub fn weekday_header(&self, week_start: WeekStart) -> Vec<&str> {
        let offset = week_start.offset() as usize;
        (0..7)
            .map(|column| self.week_days[(column + offset) % 7].as_str())
            .collect()
    }

    /// Name for a month index, 0 = January.
    pub fn month_name(&self, month_index: u32) -> &str {
        &self.month_names[month_index as usize % 12]
    }

    /// Header title such as "March 2024".
    pub fn month_title(&self, date: CalendarDate) -> String {
        format!("{} {}", self.month_name(date.month0()), date.year())
    }
}

/// Resolved configuration. Built once from [`CalendarOptions`].
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    pub mode: SelectionMode,
    pub rules: DisableRules,
    pub disable_month_nav: bool,
    pub highlight_today: bool,
    pub week_start: WeekStart,
    pub locale: Locale,
    pub theme: String,
    pub size: CellSize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::resolve(CalendarOptions::default())
    }
}

impl CalendarConfig {
    /// Applies defaults: single mode, no bounds, nothing disabled, today
    /// highlighted, Sunday first, English labels, the light theme and
    /// medium cells.
    ///
    /// Bounds are not cross-validated; a `min_date` after `max_date` simply
    /// disables everything outside both.
    pub fn resolve(options: CalendarOptions) -> Self {
        let rules = DisableRules {
            min_date: options.min_date,
            max_date: options.max_date,
            disable_past_dates: options.disable_past_dates.unwrap_or(false),
            disable_future_dates: options.disable_future_dates.unwrap_or(false),
            disable_weekends: options.disable_weekends.unwrap_or(false),
            is_date_disabled: None,
        };

        Self {
            mode: options.mode.unwrap_or_default(),
            rules,
            disable_month_nav: options.disable_month_nav.unwrap_or(false),
            highlight_today: options.highlight_today.unwrap_or(true),
            week_start: options.week_starts_on.unwrap_or_default(),
            locale: options.locale.map(Locale::from_options).unwrap_or_default(),
            theme: options.theme.unwrap_or_else(|| DEFAULT_THEME.to_string()),
            size: options.size.unwrap_or_default(),
        }
    }

    /// Attaches the caller's own disable predicate.
    pub fn with_date_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(CalendarDate) -> bool + Send + Sync + 'static,
    {
        self.rules = self.rules.with_predicate(predicate);
        self
    }

    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        is_disabled(date, &self.rules)
    }

    /// Runs a click through the selection engine with this mode and rules.
    pub fn select(&self, state: &SelectionState, clicked: CalendarDate) -> Transition {
        select(state, clicked, self.mode, &self.rules)
    }

    /// Empty selection for the configured mode.
    pub fn initial_selection(&self) -> SelectionState {
        SelectionState::initial(self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = CalendarConfig::default();
        assert_eq!(config.mode, SelectionMode::Single);
        assert!(config.rules.min_date.is_none());
        assert!(config.rules.max_date.is_none());
        assert!(!config.rules.disable_past_dates);
        assert!(!config.rules.disable_future_dates);
        assert!(!config.rules.disable_weekends);
        assert!(config.rules.is_date_disabled.is_none());
        assert!(!config.disable_month_nav);
        assert!(config.highlight_today);
        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.locale, Locale::default());
        assert_eq!(config.theme, "light");
        assert_eq!(config.size, CellSize::Md);
        assert_eq!(config.initial_selection(), SelectionState::Idle);
    }

    #[test]
    fn test_options_from_json() {
        let json = r#"{
            "mode": "range",
            "minDate": "2024-03-01",
            "maxDate": "",
            "disablePastDates": true,
            "disableWeekends": true,
            "highlightToday": false,
            "weekStartsOn": 1,
            "theme": "seasonal",
            "size": "sm"
        }"#;
        let config = CalendarConfig::resolve(CalendarOptions::from_json(json).unwrap());

        assert_eq!(config.mode, SelectionMode::Range);
        assert_eq!(config.rules.min_date, Some(make_date(2024, 3, 1)));
        assert_eq!(config.rules.max_date, None);
        assert!(config.rules.disable_past_dates);
        assert!(config.rules.disable_weekends);
        assert!(!config.highlight_today);
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.theme, "seasonal");
        assert_eq!(config.size, CellSize::Sm);
        assert_eq!(config.initial_selection(), SelectionState::RangeEmpty);
    }

    #[test]
    fn test_empty_theme_uses_default() {
        let options = CalendarOptions::from_json(r#"{"theme": ""}"#).unwrap();
        assert_eq!(CalendarConfig::resolve(options).theme, "light");
    }

    #[test]
    fn test_options_from_json_invalid() {
        assert!(matches!(
            CalendarOptions::from_json(r#"{"weekStartsOn": 3}"#),
            Err(CalendarError::InvalidOptions(_))
        ));
        assert!(matches!(
            CalendarOptions::from_json(r#"{"mode": "multi"}"#),
            Err(CalendarError::InvalidOptions(_))
        ));
    }

    const SPANISH_MONTHS: [&str; 12] = [
        "Enero",
        "Febrero",
        "Marzo",
        "Abril",
        "Mayo",
        "Junio",
        "Julio",
        "Agosto",
        "Septiembre",
        "Octubre",
        "Noviembre",
        "Diciembre",
    ];

    #[test]
    fn test_locale_falls_back_per_list() {
        let locale = Locale::from_options(LocaleOptions {
            week_days: Some(vec!["Do".to_string(), "Lu".to_string()]),
            month_names: Some(SPANISH_MONTHS.iter().map(|s| s.to_string()).collect()),
        });

        assert_eq!(locale.week_days()[0], "Sun");
        assert_eq!(locale.month_name(6), "Julio");
        assert_eq!(locale.month_title(make_date(2024, 3, 5)), "Marzo 2024");
    }

    #[test]
    fn test_weekday_header_follows_week_start() {
        let locale = Locale::default();
        assert_eq!(
            locale.weekday_header(WeekStart::Sunday),
            vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
        assert_eq!(
            locale.weekday_header(WeekStart::Monday),
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
    }

    #[test]
    fn test_config_select_uses_rules() {
        let config = CalendarConfig::resolve(CalendarOptions {
            mode: Some(SelectionMode::Range),
            disable_weekends: Some(true),
            ..Default::default()
        })
        .with_date_predicate(|date| date.day() == 1);

        let state = config.initial_selection();
        assert!(config.is_disabled(make_date(2024, 3, 1)));
        assert!(!config.select(&state, make_date(2024, 3, 1)).is_accepted());
        assert!(!config.select(&state, make_date(2024, 3, 9)).is_accepted());

        let step = config.select(&state, make_date(2024, 3, 4));
        assert_eq!(step.state.range_start(), Some(make_date(2024, 3, 4)));
    }
}
