//! Course/schedule data model and meeting normalization.
//!
//! Course sections arrive from the data layer in one of two shapes: a
//! legacy shape with a single implicit meeting block (one day list, one
//! decimal-hour start/end pair) and a detailed shape with an ordered list
//! of per-block clock-text meeting times. Both are resolved exactly once,
//! at [`CourseSection::meeting_blocks`], into canonical [`MeetingBlock`]s;
//! nothing downstream branches on the source shape.

use chrono::Weekday as ChronoWeekday;
use serde::{Deserialize, Serialize};

use crate::clock;

/// Canonical weekday alphabet: the five display weekdays, in display order.
///
/// Day comparisons, grid columns, and recurrence rules all use this fixed
/// alphabet. Source codes outside it are dropped during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    /// All weekdays in canonical display order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Parse a source weekday code. Thursday has two spellings in the wild
    /// ("Th" and "R"). Codes outside the canonical alphabet yield `None`.
    pub fn parse_code(code: &str) -> Option<Weekday> {
        match code.trim() {
            "M" => Some(Weekday::Mon),
            "T" => Some(Weekday::Tue),
            "W" => Some(Weekday::Wed),
            "Th" | "TH" | "R" => Some(Weekday::Thu),
            "F" => Some(Weekday::Fri),
            _ => None,
        }
    }

    /// iCalendar BYDAY code.
    pub fn byday(self) -> &'static str {
        match self {
            Weekday::Mon => "MO",
            Weekday::Tue => "TU",
            Weekday::Wed => "WE",
            Weekday::Thu => "TH",
            Weekday::Fri => "FR",
        }
    }

    /// The corresponding `chrono` weekday, for date arithmetic.
    pub fn chrono(self) -> ChronoWeekday {
        match self {
            Weekday::Mon => ChronoWeekday::Mon,
            Weekday::Tue => ChronoWeekday::Tue,
            Weekday::Wed => ChronoWeekday::Wed,
            Weekday::Thu => ChronoWeekday::Thu,
            Weekday::Fri => ChronoWeekday::Fri,
        }
    }
}

/// A decimal-hour time window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: f64,
    pub end: f64,
}

/// One raw meeting pattern from the detailed course shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeetTime {
    pub meet_days: Vec<String>,
    pub meet_time_begin: String,
    pub meet_time_end: String,
    pub meet_building: Option<String>,
    pub meet_room: Option<String>,
}

/// One canonical weekly meeting occurrence: a non-empty day set and a
/// decimal-hour window in [0,24) with `start < end`. The normalizer drops
/// anything that would violate either invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingBlock {
    pub days: Vec<Weekday>,
    pub start: f64,
    pub end: f64,
    /// Building + room, carried through for calendar export.
    pub location: Option<String>,
}

/// The meeting-time source shape of a course section, resolved once at the
/// normalization boundary. A non-empty detailed block list takes precedence
/// over the legacy fields; a section with neither has no meetings.
#[derive(Debug, Clone, PartialEq)]
pub enum MeetingSource<'a> {
    Detailed(&'a [MeetTime]),
    Legacy {
        days: &'a [String],
        period: TimeSlot,
    },
    None,
}

/// A schedulable course section, accepting the union of the legacy and
/// detailed input record shapes. Unknown fields from either shape are
/// simply absent; identity within a schedule is `(code, classNum|section)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseSection {
    pub code: String,
    pub name: String,
    pub credits: f64,
    pub is_critical_tracking: bool,

    // Legacy shape.
    pub instructor: Option<String>,
    pub meet_days: Vec<String>,
    pub meet_period: Option<TimeSlot>,
    pub section: Option<String>,
    pub enrollment_cap: Option<u32>,
    pub enrollment_actual: Option<u32>,

    // Detailed shape.
    pub class_num: Option<u32>,
    pub instructors: Vec<String>,
    pub meet_times: Vec<MeetTime>,
    pub dept: Option<String>,
}

impl CourseSection {
    /// Resolve which source shape supplies this section's meeting times.
    pub fn meeting_source(&self) -> MeetingSource<'_> {
        if !self.meet_times.is_empty() {
            MeetingSource::Detailed(&self.meet_times)
        } else if let Some(period) = self.meet_period {
            MeetingSource::Legacy {
                days: &self.meet_days,
                period,
            }
        } else {
            MeetingSource::None
        }
    }

    /// Normalize this section's meeting times into canonical blocks, in
    /// source order.
    ///
    /// Blocks with an unparsed begin or end time, an empty day set after
    /// dropping unknown codes, or a non-positive-length window are dropped
    /// silently — degenerate meeting data contributes nothing rather than
    /// erroring. A section with neither shape yields an empty list.
    pub fn meeting_blocks(&self) -> Vec<MeetingBlock> {
        match self.meeting_source() {
            MeetingSource::Detailed(times) => {
                times.iter().filter_map(normalize_meet_time).collect()
            }
            MeetingSource::Legacy { days, period } => {
                normalize_block(parse_days(days), period.start, period.end, None)
                    .into_iter()
                    .collect()
            }
            MeetingSource::None => Vec::new(),
        }
    }

    /// The class/section number used for identity and event UIDs, as text.
    /// Detailed `classNum` wins over legacy `section`; "0" when neither.
    pub fn section_ref(&self) -> String {
        if let Some(num) = self.class_num {
            num.to_string()
        } else if let Some(section) = self.section.as_deref().filter(|s| !s.is_empty()) {
            section.to_string()
        } else {
            "0".to_string()
        }
    }

    /// Whether two records refer to the same section: same course code and
    /// same class/section number.
    pub fn same_section(&self, other: &CourseSection) -> bool {
        self.code == other.code && self.section_ref() == other.section_ref()
    }

    /// Instructor names for display/export: the detailed list joined with
    /// commas, else the legacy single instructor, else "TBA".
    pub fn instructor_names(&self) -> String {
        if !self.instructors.is_empty() {
            self.instructors.join(", ")
        } else if let Some(name) = self.instructor.as_deref().filter(|s| !s.is_empty()) {
            name.to_string()
        } else {
            "TBA".to_string()
        }
    }
}

/// An ordered list of course sections for one term. The engine never
/// deduplicates sections; duplicate prevention belongs to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Schedule {
    pub major_code: String,
    pub semester: String,
    pub courses: Vec<CourseSection>,
}

/// Map source day codes into canonical weekdays, dropping unknown codes
/// and duplicates while preserving first-appearance order.
fn parse_days(codes: &[String]) -> Vec<Weekday> {
    let mut days = Vec::new();
    for code in codes {
        if let Some(day) = Weekday::parse_code(code) {
            if !days.contains(&day) {
                days.push(day);
            }
        }
    }
    days
}

fn normalize_meet_time(meet: &MeetTime) -> Option<MeetingBlock> {
    let start = clock::parse_clock(&meet.meet_time_begin)?;
    let end = clock::parse_clock(&meet.meet_time_end)?;
    normalize_block(parse_days(&meet.meet_days), start, end, location_of(meet))
}

fn normalize_block(
    days: Vec<Weekday>,
    start: f64,
    end: f64,
    location: Option<String>,
) -> Option<MeetingBlock> {
    if days.is_empty() {
        return None;
    }
    // Times live in [0,24). The comparisons also reject NaN start/end
    // from malformed legacy numbers.
    if !(start < end) || !(start >= 0.0) || !(end <= 24.0) {
        return None;
    }
    Some(MeetingBlock {
        days,
        start,
        end,
        location,
    })
}

/// Building + room when both are present; no partial locations.
fn location_of(meet: &MeetTime) -> Option<String> {
    match (
        meet.meet_building.as_deref().filter(|s| !s.is_empty()),
        meet.meet_room.as_deref().filter(|s| !s.is_empty()),
    ) {
        (Some(building), Some(room)) => Some(format!("{} {}", building, room)),
        _ => None,
    }
}
