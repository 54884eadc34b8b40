//! Activity record model.
//!
//! # Responsibility
//! - Define the persisted record and the pre-insert draft shape.
//! - Validate drafts before they reach SQL.
//!
//! # Invariants
//! - `id` is assigned by the store, monotonically increasing, never reused.
//! - `steps` and `date` are immutable once persisted.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a persisted activity record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Values come from SQLite `AUTOINCREMENT` and are never reused.
pub type RecordId = i64;

/// One logged activity: a step count at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Store-assigned id, unique across the lifetime of the database.
    pub id: RecordId,
    /// Step count, always positive.
    pub steps: i64,
    /// Unix epoch seconds at which the activity was logged.
    pub date: i64,
}

/// Caller-supplied input for creating a record; the store assigns the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDraft {
    /// Step count; must be positive.
    pub steps: i64,
    /// Unix epoch seconds; must not be negative.
    pub date: i64,
}

impl ActivityDraft {
    pub fn new(steps: i64, date: i64) -> Self {
        Self { steps, date }
    }

    /// Checks draft constraints before persistence.
    ///
    /// Callers are expected to validate first; the store re-validates as
    /// defense in depth.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.steps <= 0 {
            return Err(DraftValidationError::NonPositiveSteps(self.steps));
        }
        if self.date < 0 {
            return Err(DraftValidationError::NegativeDate(self.date));
        }
        Ok(())
    }
}

/// Constraint violation in an [`ActivityDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftValidationError {
    /// `steps` must be a positive integer.
    NonPositiveSteps(i64),
    /// `date` must be valid epoch seconds (not negative).
    NegativeDate(i64),
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveSteps(steps) => {
                write!(f, "steps must be positive, got {steps}")
            }
            Self::NegativeDate(date) => {
                write!(f, "date must be non-negative epoch seconds, got {date}")
            }
        }
    }
}

impl Error for DraftValidationError {}
