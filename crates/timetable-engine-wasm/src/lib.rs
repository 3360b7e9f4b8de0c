//! WASM bindings for timetable-engine.
//!
//! Exposes conflict detection, grid mapping, schedule stats, and ICS feed
//! construction to the JavaScript UI via `wasm-bindgen`. All structured
//! data crosses the boundary as JSON strings in the same camelCase shapes
//! the data layer already produces, so the frontend passes its course
//! records straight through.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p timetable-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir frontend/src/engine/ \
//!   target/wasm32-unknown-unknown/release/timetable_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use timetable_engine::{CourseSection, Schedule};
use wasm_bindgen::prelude::*;

/// Parse an ISO `YYYY-MM-DD` date string.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

fn parse_courses(json: &str) -> Result<Vec<CourseSection>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid courses JSON: {}", e)))
}

fn parse_schedule(json: &str) -> Result<Schedule, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid schedule JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Find all pairwise conflicts in a JSON array of course records.
///
/// Accepts both the legacy and the detailed course shapes. Returns a JSON
/// array of conflict records with `courseA`, `courseB`, `conflictingDays`,
/// and `conflictingTimes`. Malformed meeting data inside a course degrades
/// to "no meetings"; only unparsable JSON is an error.
#[wasm_bindgen(js_name = "detectConflicts")]
pub fn detect_conflicts(courses_json: &str) -> Result<String, JsValue> {
    let courses = parse_courses(courses_json)?;
    to_json(&timetable_engine::detect_conflicts(&courses))
}

/// Build the ICS feed text for a schedule.
///
/// `term_start` and `term_end` are `YYYY-MM-DD` dates; `timezone` is an
/// IANA identifier (e.g., "America/New_York"). The returned text is ready
/// to download as a `.ics` file with a `text/calendar` content type.
#[wasm_bindgen(js_name = "buildCalendarFeed")]
pub fn build_calendar_feed(
    schedule_json: &str,
    term_start: &str,
    term_end: &str,
    timezone: &str,
) -> Result<String, JsValue> {
    let schedule = parse_schedule(schedule_json)?;
    let start = parse_date(term_start)?;
    let end = parse_date(term_end)?;

    timetable_engine::build_calendar_feed(&schedule, start, end, timezone)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Grid coordinates for every normalized meeting block of one course.
///
/// Returns a JSON array of `{column, rowStart, rowSpan}` objects, one per
/// block, for a display grid starting at `display_start_hour`.
#[wasm_bindgen(js_name = "gridPositions")]
pub fn grid_positions(course_json: &str, display_start_hour: f64) -> Result<String, JsValue> {
    let course: CourseSection = serde_json::from_str(course_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid course JSON: {}", e)))?;

    let positions: Vec<_> = course
        .meeting_blocks()
        .iter()
        .filter_map(|block| timetable_engine::map_to_grid(block, display_start_hour))
        .collect();

    to_json(&positions)
}

/// Summary stats for a schedule: credits, course count, conflict count,
/// critical-tracking count.
#[wasm_bindgen(js_name = "scheduleStats")]
pub fn schedule_stats(schedule_json: &str) -> Result<String, JsValue> {
    let schedule = parse_schedule(schedule_json)?;
    to_json(&timetable_engine::schedule_stats(&schedule))
}

/// Deterministic palette color for a course code.
#[wasm_bindgen(js_name = "colorFor")]
pub fn color_for(code: &str) -> String {
    timetable_engine::color_for(code).to_string()
}
