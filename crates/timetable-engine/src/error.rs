//! Error types for timetable-engine operations.
//!
//! Degenerate schedule data (unparsable clock text, missing day lists,
//! empty block lists) never surfaces here — those inputs degrade to "no
//! meetings" during normalization. The only fallible operation is feed
//! construction with a timezone string that is not a valid IANA identifier.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
