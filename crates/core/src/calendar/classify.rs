use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::types::CalendarDate;

/// Caller-supplied rule marking additional dates as disabled.
pub type DatePredicate = Arc<dyn Fn(CalendarDate) -> bool + Send + Sync>;

/// Returns true if both dates are present and fall on the same calendar day.
pub fn same_day(a: impl Into<Option<CalendarDate>>, b: impl Into<Option<CalendarDate>>) -> bool {
    match (a.into(), b.into()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Strict day-granularity "a is before b". Any time of day is ignored.
pub fn is_before(a: impl Into<CalendarDate>, b: impl Into<CalendarDate>) -> bool {
    a.into() < b.into()
}

/// Strict day-granularity "a is after b". Any time of day is ignored.
pub fn is_after(a: impl Into<CalendarDate>, b: impl Into<CalendarDate>) -> bool {
    a.into() > b.into()
}

/// Returns true if `date` is the current local day.
pub fn is_today(date: CalendarDate) -> bool {
    is_today_at(date, CalendarDate::today())
}

/// Same as [`is_today`] against an explicit "today".
pub fn is_today_at(date: CalendarDate, today: CalendarDate) -> bool {
    same_day(date, today)
}

/// Rules deciding which days cannot be clicked.
///
/// A date is disabled if any rule matches. The bound rules only fire when
/// both the flag and the matching bound are set.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisableRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<CalendarDate>,
    #[serde(default)]
    pub disable_past_dates: bool,
    #[serde(default)]
    pub disable_future_dates: bool,
    #[serde(default)]
    pub disable_weekends: bool,
    #[serde(skip)]
    pub is_date_disabled: Option<DatePredicate>,
}

impl DisableRules {
    /// Disables every date before `min_date`.
    pub fn with_min_date(mut self, min_date: CalendarDate) -> Self {
        self.min_date = Some(min_date);
        self.disable_past_dates = true;
        self
    }

    /// Disables every date after `max_date`.
    pub fn with_max_date(mut self, max_date: CalendarDate) -> Self {
        self.max_date = Some(max_date);
        self.disable_future_dates = true;
        self
    }

    pub fn with_weekends_disabled(mut self) -> Self {
        self.disable_weekends = true;
        self
    }

    /// Sets the custom predicate, replacing any previous one.
    pub fn with_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(CalendarDate) -> bool + Send + Sync + 'static,
    {
        self.is_date_disabled = Some(Arc::new(predicate));
        self
    }
}

impl fmt::Debug for DisableRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisableRules")
            .field("min_date", &self.min_date)
            .field("max_date", &self.max_date)
            .field("disable_past_dates", &self.disable_past_dates)
            .field("disable_future_dates", &self.disable_future_dates)
            .field("disable_weekends", &self.disable_weekends)
            .field("is_date_disabled", &self.is_date_disabled.is_some())
            .finish()
    }
}

/// Evaluates the disable rules in order: lower bound, upper bound,
/// weekends, custom predicate. Stops at the first match.
pub fn is_disabled(date: CalendarDate, rules: &DisableRules) -> bool {
    if rules.disable_past_dates && rules.min_date.is_some_and(|min| is_before(date, min)) {
        return true;
    }

    if rules.disable_future_dates && rules.max_date.is_some_and(|max| is_after(date, max)) {
        return true;
    }

    if rules.disable_weekends && date.is_weekend() {
        return true;
    }

    rules
        .is_date_disabled
        .as_ref()
        .is_some_and(|predicate| predicate(date))
}
