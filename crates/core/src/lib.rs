//! Headless calendar engine - no rendering, no async, no shared mutable state.
//!
//! This crate provides:
//! - Day-granularity date predicates and disable rules
//! - Month grid generation honouring the week start
//! - The single/range selection state machine
//! - Theme palettes, including month-varying (seasonal) themes
//!
//! # Example
//!
//! ```
//! use calgrid_core::calendar::{
//!     select, CalendarDate, DisableRules, SelectionMode, SelectionState,
//! };
//!
//! let rules = DisableRules::default();
//! let first = CalendarDate::new(2024, 3, 20).unwrap();
//! let second = CalendarDate::new(2024, 3, 5).unwrap();
//!
//! let state = SelectionState::initial(SelectionMode::Range);
//! let step = select(&state, first, SelectionMode::Range, &rules);
//! let step = select(&step.state, second, SelectionMode::Range, &rules);
//!
//! // Clicking before the anchor swaps the endpoints.
//! assert_eq!(step.state.range_start(), Some(second));
//! assert_eq!(step.state.range_end(), Some(first));
//! ```

pub mod calendar;
pub mod serde;
pub mod theme;
