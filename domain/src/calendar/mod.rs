//! Calendar date selection
//!
//! The date question is answered through a small sub-machine
//! ([`DateRangeSelector`]) that consumes calendar clicks and yields one
//! formatted answer. [`CalendarMonth`] provides the month grid the
//! picker renders.

pub mod format;
pub mod month;
pub mod selection;

pub use format::{format_date, format_month, format_range, weekday_headers};
pub use month::CalendarMonth;
pub use selection::{DateRangeSelector, DateSelection, SelectOutcome, TripLength};
