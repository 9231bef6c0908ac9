use serde::{Deserialize, Serialize};

use super::classify::{is_after, is_before, is_disabled, same_day, DisableRules};
use super::error::{CalendarError, Result};
use super::types::{CalendarDate, SelectionMode};

/// A completed range. Endpoints are always in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RangeEndpoints")]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

#[derive(Deserialize)]
struct RangeEndpoints {
    start: CalendarDate,
    end: CalendarDate,
}

impl From<RangeEndpoints> for DateRange {
    fn from(endpoints: RangeEndpoints) -> Self {
        DateRange::new(endpoints.start, endpoints.end)
    }
}

impl DateRange {
    /// Builds a range from two endpoints given in any order.
    pub fn new(a: CalendarDate, b: CalendarDate) -> Self {
        if is_before(b, a) {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// True for days strictly between the endpoints.
    pub fn contains_strictly(&self, date: CalendarDate) -> bool {
        is_after(date, self.start) && is_before(date, self.end)
    }
}

/// Selection held by the host between clicks.
///
/// The engine never mutates a state in place; [`select`] returns the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SelectionState {
    #[default]
    Idle,
    SingleSelected { date: CalendarDate },
    RangeEmpty,
    RangeStart { start: CalendarDate },
    RangeComplete { range: DateRange },
}

impl SelectionState {
    /// Empty state for a mode.
    pub fn initial(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => SelectionState::Idle,
            SelectionMode::Range => SelectionState::RangeEmpty,
        }
    }

    /// State for a host-held single selection.
    pub fn single(selected: Option<CalendarDate>) -> Self {
        match selected {
            Some(date) => SelectionState::SingleSelected { date },
            None => SelectionState::Idle,
        }
    }

    /// State for a host-held range. Reversed endpoints are reordered.
    pub fn range(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Result<Self> {
        match (start, end) {
            (None, None) => Ok(SelectionState::RangeEmpty),
            (None, Some(_)) => Err(CalendarError::RangeEndWithoutStart),
            (Some(start), None) => Ok(SelectionState::RangeStart { start }),
            (Some(start), Some(end)) => Ok(SelectionState::RangeComplete {
                range: DateRange::new(start, end),
            }),
        }
    }

    pub fn selected_date(&self) -> Option<CalendarDate> {
        match self {
            SelectionState::SingleSelected { date } => Some(*date),
            _ => None,
        }
    }

    pub fn range_start(&self) -> Option<CalendarDate> {
        match self {
            SelectionState::RangeStart { start } => Some(*start),
            SelectionState::RangeComplete { range } => Some(range.start()),
            _ => None,
        }
    }

    pub fn range_end(&self) -> Option<CalendarDate> {
        match self {
            SelectionState::RangeComplete { range } => Some(range.end()),
            _ => None,
        }
    }

    /// True if `day` is the single selection or a range endpoint.
    pub fn is_selected(&self, day: CalendarDate) -> bool {
        same_day(day, self.selected_date())
            || same_day(day, self.range_start())
            || same_day(day, self.range_end())
    }

    /// True if `day` lies strictly inside a completed range.
    pub fn is_in_range(&self, day: CalendarDate) -> bool {
        match self {
            SelectionState::RangeComplete { range } => range.contains_strictly(day),
            _ => false,
        }
    }
}

/// Notification emitted by an accepted click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum SelectionEvent {
    DateChanged {
        date: CalendarDate,
    },
    RangeChanged {
        start: CalendarDate,
        end: Option<CalendarDate>,
    },
}

/// Result of one click: the next state and the notifications to deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub state: SelectionState,
    pub events: Vec<SelectionEvent>,
}

impl Transition {
    fn unchanged(state: &SelectionState) -> Self {
        Self {
            state: *state,
            events: Vec::new(),
        }
    }

    /// False when the click was ignored.
    pub fn is_accepted(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Computes the selection after a click on `clicked`.
///
/// Clicks on disabled dates are ignored. In range mode a click with no
/// start, or after a completed range, starts a new range; otherwise it
/// completes the range, swapping the endpoints if it lands before the start.
pub fn select(
    state: &SelectionState,
    clicked: CalendarDate,
    mode: SelectionMode,
    rules: &DisableRules,
) -> Transition {
    if is_disabled(clicked, rules) {
        tracing::debug!(date = %clicked, "Ignoring click on disabled date");
        return Transition::unchanged(state);
    }

    let (next, event) = match mode {
        SelectionMode::Single => (
            SelectionState::SingleSelected { date: clicked },
            SelectionEvent::DateChanged { date: clicked },
        ),
        SelectionMode::Range => match state {
            SelectionState::RangeStart { start } => {
                let range = DateRange::new(*start, clicked);
                (
                    SelectionState::RangeComplete { range },
                    SelectionEvent::RangeChanged {
                        start: range.start(),
                        end: Some(range.end()),
                    },
                )
            }
            _ => (
                SelectionState::RangeStart { start: clicked },
                SelectionEvent::RangeChanged {
                    start: clicked,
                    end: None,
                },
            ),
        },
    };

    tracing::debug!(date = %clicked, ?mode, state = ?next, "Selection changed");

    Transition {
        state: next,
        events: vec![event],
    }
}
