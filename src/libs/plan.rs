//! Plan requests and the validation gate applied before scheduling.

use crate::libs::task::MuscleGroup;
use chrono::NaiveDate;
use thiserror::Error;

/// Rule violations that make a plan request unschedulable.
///
/// Both variants are recoverable: interactive entry re-prompts with the
/// previous values pre-filled, flag-driven entry reports the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("High-impact tasks must have pause days")]
    HighImpactWithoutPause,
    #[error("Start date {0} is after end date {1}")]
    ReversedRange(NaiveDate, NaiveDate),
}

/// A request to schedule a recurring task across a date range.
///
/// Ephemeral: lives only for the duration of one plan submission and is
/// never persisted.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub pause_days: u32,
}

impl PlanRequest {
    /// Checks the request against the scheduling rules.
    ///
    /// High-impact tasks require a non-zero recovery window, and the date
    /// range must run forward.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.muscle_group == MuscleGroup::HighImpact && self.pause_days == 0 {
            return Err(PlanError::HighImpactWithoutPause);
        }
        if self.start_date > self.end_date {
            return Err(PlanError::ReversedRange(self.start_date, self.end_date));
        }
        Ok(())
    }
}
