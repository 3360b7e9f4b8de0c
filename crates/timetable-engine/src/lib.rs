//! # timetable-engine
//!
//! Deterministic conflict detection and calendar materialization for weekly
//! class schedules.
//!
//! The engine normalizes the two course-record shapes produced by the data
//! layer (a legacy single-block shape and a detailed multi-block shape) into
//! canonical meeting blocks, finds every pairwise time/day conflict between
//! scheduled sections, maps blocks onto display-grid coordinates, and expands
//! a schedule into a recurring-event ICS feed bounded by a term date range.
//!
//! Every function here is pure: same schedule snapshot in, bit-identical
//! output out. The UI/state layer can re-run the engine on every state change
//! without debouncing or locking.
//!
//! ## Modules
//!
//! - [`clock`] — clock-time text ↔ decimal-hour conversion
//! - [`course`] — course/schedule data model + meeting normalization
//! - [`conflict`] — pairwise schedule conflict detection
//! - [`grid`] — meeting block → display-grid coordinates
//! - [`ics`] — recurring calendar event expansion + ICS serialization
//! - [`color`] — stable hash-based course color assignment
//! - [`error`] — error types

pub mod clock;
pub mod color;
pub mod conflict;
pub mod course;
pub mod error;
pub mod grid;
pub mod ics;

pub use clock::{format_clock, parse_clock, split_decimal};
pub use color::color_for;
pub use conflict::{
    conflicts_for_course, course_has_conflict, detect_conflicts, schedule_stats, ConflictRecord,
    ScheduleStats,
};
pub use course::{CourseSection, MeetTime, MeetingBlock, MeetingSource, Schedule, TimeSlot, Weekday};
pub use error::ScheduleError;
pub use grid::{column_for, map_to_grid, GridPosition, DISPLAY_START_HOUR};
pub use ics::{build_calendar_feed, expand_events, CalendarEvent};
