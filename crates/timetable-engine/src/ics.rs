//! Recurring calendar event expansion and ICS serialization.
//!
//! Each normalized meeting block becomes one weekly recurring event: the
//! first occurrence lands on the earliest date on/after the term start
//! matching any of the block's weekdays, and a `FREQ=WEEKLY;BYDAY=…`
//! rule repeats it until end-of-day on the term end. The feed is a
//! CRLF-joined iCalendar document served as `text/calendar`; a schedule
//! with zero qualifying blocks still produces a valid (empty) document.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::course::{CourseSection, MeetingBlock, Schedule, Weekday};
use crate::error::{Result, ScheduleError};

const PRODID: &str = "-//Timetable//Schedule Export//EN";
const UID_DOMAIN: &str = "timetable";

/// One weekly recurring event, expanded from a meeting block.
///
/// `start`/`end` are the first occurrence as local wall-clock timestamps;
/// the feed tags them with the caller's timezone. `until` is the term end
/// normalized to end-of-day (inclusive bound).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub uid: String,
    pub summary: String,
    pub location: Option<String>,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub by_days: Vec<Weekday>,
    pub until: NaiveDateTime,
}

/// Expand every normalized meeting block of every course into recurring
/// events bounded by the term date range.
///
/// A course with multiple blocks produces multiple independent events;
/// each UID is derived from the course code, the class/section number,
/// and the block's position, so it is stable across re-exports. Blocks
/// with unparsable times or empty day sets were already dropped by the
/// normalizer, so this never errors.
pub fn expand_events(
    schedule: &Schedule,
    term_start: NaiveDate,
    term_end: NaiveDate,
) -> Vec<CalendarEvent> {
    let mut events = Vec::new();
    for course in &schedule.courses {
        for (index, block) in course.meeting_blocks().iter().enumerate() {
            if let Some(event) = expand_block(course, block, index, term_start, term_end) {
                events.push(event);
            }
        }
    }
    events
}

fn expand_block(
    course: &CourseSection,
    block: &MeetingBlock,
    index: usize,
    term_start: NaiveDate,
    term_end: NaiveDate,
) -> Option<CalendarEvent> {
    // Earliest first occurrence across the block's weekdays.
    let first_date = block
        .days
        .iter()
        .map(|day| first_on_or_after(term_start, *day))
        .min()?;

    let (start_h, start_m) = clock::split_decimal(block.start);
    let (end_h, end_m) = clock::split_decimal(block.end);
    let start = first_date.and_hms_opt(start_h, start_m, 0)?;
    let end = first_date.and_hms_opt(end_h, end_m, 0)?;
    let until = term_end.and_hms_opt(23, 59, 59)?;

    Some(CalendarEvent {
        uid: format!(
            "{}-{}-{}@{}",
            course.code,
            course.section_ref(),
            index,
            UID_DOMAIN
        ),
        summary: format!("{} - {}", course.code, course.name),
        location: block.location.clone(),
        description: format!("Instructor: {}", course.instructor_names()),
        start,
        end,
        by_days: block.days.clone(),
        until,
    })
}

/// First calendar date on/after `start` falling on the given weekday.
fn first_on_or_after(start: NaiveDate, day: Weekday) -> NaiveDate {
    let target = i64::from(day.chrono().num_days_from_monday());
    let current = i64::from(start.weekday().num_days_from_monday());
    start + Duration::days((target - current).rem_euclid(7))
}

/// Build the complete ICS feed text for a schedule.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimezone` if `timezone` is not a valid
/// IANA identifier. Degenerate schedule data never errors — malformed
/// courses simply contribute no events.
pub fn build_calendar_feed(
    schedule: &Schedule,
    term_start: NaiveDate,
    term_end: NaiveDate,
    timezone: &str,
) -> Result<String> {
    // Validate the timezone by parsing it as a chrono-tz Tz.
    let _tz: chrono_tz::Tz = timezone
        .parse()
        .map_err(|_| ScheduleError::InvalidTimezone(timezone.to_string()))?;

    let calendar_name = {
        let name = format!("{} {}", schedule.major_code, schedule.semester);
        let trimmed = name.trim().to_string();
        if trimmed.is_empty() {
            "Schedule".to_string()
        } else {
            trimmed
        }
    };

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        format!("PRODID:{}", PRODID),
        format!("X-WR-CALNAME:{}", calendar_name),
        format!("X-WR-TIMEZONE:{}", timezone),
    ];

    for event in expand_events(schedule, term_start, term_end) {
        push_event_lines(&mut lines, &event, timezone);
    }

    lines.push("END:VCALENDAR".to_string());
    Ok(lines.join("\r\n"))
}

fn push_event_lines(lines: &mut Vec<String>, event: &CalendarEvent, timezone: &str) {
    let by_days = event
        .by_days
        .iter()
        .map(|day| day.byday())
        .collect::<Vec<_>>()
        .join(",");

    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("UID:{}", event.uid));
    lines.push(format!("SUMMARY:{}", event.summary));
    lines.push(format!(
        "DTSTART;TZID={}:{}",
        timezone,
        format_local(event.start)
    ));
    lines.push(format!(
        "DTEND;TZID={}:{}",
        timezone,
        format_local(event.end)
    ));
    lines.push(format!(
        "RRULE:FREQ=WEEKLY;BYDAY={};UNTIL={}",
        by_days,
        format_local(event.until)
    ));
    if let Some(location) = &event.location {
        lines.push(format!("LOCATION:{}", location));
    }
    lines.push(format!("DESCRIPTION:{}", event.description));
    lines.push("END:VEVENT".to_string());
}

/// Local iCalendar timestamp: `YYYYMMDDTHHMMSS`, no zone suffix (the
/// surrounding property carries the TZID).
fn format_local(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}
