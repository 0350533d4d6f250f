//! Date range selection state machine.
//!
//! Turns a sequence of calendar clicks into one formatted answer.
//!
//! # State Transitions (multi-day)
//!
//! ```text
//! Empty ──click──> Started(start) ──click > start──> Resolved(start, end)
//!                    │   ^ click == start (no-op)
//!                    └───┘ click < start (restart)
//! Resolved ──click──> Started(click)
//! ```
//!
//! Single-day mode resolves on the first accepted click.

use super::format::{format_date, format_range};
use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether the trip spans one day or several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripLength {
    SingleDay,
    MultiDay,
}

impl TripLength {
    /// Derive the mode from the `duration` answer; only `day` means single-day
    pub fn from_duration(answer: Option<&str>) -> Self {
        match answer {
            Some("day") => TripLength::SingleDay,
            _ => TripLength::MultiDay,
        }
    }
}

/// Current calendar selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSelection {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateSelection {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    /// Start picked, end still missing
    pub fn is_awaiting_end(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_none()
    }

    /// Whether `date` falls inside a finished range (inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    pub fn is_endpoint(&self, date: NaiveDate) -> bool {
        self.start_date == Some(date) || self.end_date == Some(date)
    }
}

/// Result of an accepted click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Waiting for an end date
    Pending,
    /// Final formatted answer value
    Resolved(String),
}

/// Calendar sub-flow for the date question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeSelector {
    mode: TripLength,
    selection: DateSelection,
}

impl DateRangeSelector {
    pub fn new(mode: TripLength) -> Self {
        Self {
            mode,
            selection: DateSelection::default(),
        }
    }

    pub fn mode(&self) -> TripLength {
        self.mode
    }

    pub fn selection(&self) -> DateSelection {
        self.selection
    }

    pub fn reset(&mut self) {
        self.selection = DateSelection::default();
    }

    /// Whether `date` can be clicked at all (day granularity, today included)
    pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
        date >= today
    }

    /// Apply one calendar click
    ///
    /// Past dates are rejected with [`DomainError::PastDate`] and leave the
    /// selection untouched.
    pub fn select(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<SelectOutcome, DomainError> {
        if !Self::is_selectable(date, today) {
            return Err(DomainError::PastDate(date));
        }

        match self.mode {
            TripLength::SingleDay => {
                self.selection = DateSelection {
                    start_date: Some(date),
                    end_date: None,
                };
                Ok(SelectOutcome::Resolved(format_date(date)))
            }
            TripLength::MultiDay => match (self.selection.start_date, self.selection.end_date) {
                (Some(start), None) if date == start => Ok(SelectOutcome::Pending),
                (Some(start), None) if date > start => {
                    self.selection.end_date = Some(date);
                    Ok(SelectOutcome::Resolved(format_range(start, date)))
                }
                // No range yet, a finished range being restarted, or a click before start
                _ => {
                    self.selection = DateSelection {
                        start_date: Some(date),
                        end_date: None,
                    };
                    Ok(SelectOutcome::Pending)
                }
            },
        }
    }
}
