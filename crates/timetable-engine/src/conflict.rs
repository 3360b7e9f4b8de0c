//! Pairwise time/day conflict detection between scheduled course sections.
//!
//! Compares every unordered pair of sections exactly once, block by block
//! in normalized list order. Two blocks conflict when their day sets
//! intersect AND their windows overlap under `start_a < end_b && end_a >
//! start_b`. Blocks that merely touch at an endpoint (one ends at 10.0,
//! the other starts at 10.0) are NOT conflicts.

use serde::{Deserialize, Serialize};

use crate::course::{CourseSection, MeetingBlock, Schedule, TimeSlot, Weekday};

/// A detected conflict between two course sections: the pair, the shared
/// weekdays, and the overlapping window (max of starts, min of ends).
///
/// Records are computed fresh on every detection pass and have no
/// independent identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictRecord {
    pub course_a: CourseSection,
    pub course_b: CourseSection,
    pub conflicting_days: Vec<Weekday>,
    pub conflicting_times: TimeSlot,
}

/// Find all pairwise conflicts in a course list.
///
/// Each unordered pair is reported at most once: block comparison stops at
/// the first overlapping block pair, and the reported day set and window
/// come from that first match. Block iteration order is the order blocks
/// appear in each course's normalized list, which keeps detection
/// deterministic. Courses with empty block lists participate in nothing.
pub fn detect_conflicts(courses: &[CourseSection]) -> Vec<ConflictRecord> {
    let blocks: Vec<Vec<MeetingBlock>> = courses.iter().map(|c| c.meeting_blocks()).collect();

    let mut conflicts = Vec::new();
    for i in 0..courses.len() {
        for j in (i + 1)..courses.len() {
            if let Some((days, window)) = first_overlap(&blocks[i], &blocks[j]) {
                conflicts.push(ConflictRecord {
                    course_a: courses[i].clone(),
                    course_b: courses[j].clone(),
                    conflicting_days: days,
                    conflicting_times: window,
                });
            }
        }
    }
    conflicts
}

/// First overlapping block pair between two normalized block lists, in
/// list order.
fn first_overlap(
    blocks_a: &[MeetingBlock],
    blocks_b: &[MeetingBlock],
) -> Option<(Vec<Weekday>, TimeSlot)> {
    for a in blocks_a {
        for b in blocks_b {
            // Shared days in canonical order, so the record is identical
            // whichever course is evaluated first.
            let mut common: Vec<Weekday> = a
                .days
                .iter()
                .copied()
                .filter(|day| b.days.contains(day))
                .collect();
            common.sort();
            if common.is_empty() {
                continue;
            }
            // Strict inequalities exclude the touching-endpoint case.
            if a.start < b.end && a.end > b.start {
                let window = TimeSlot {
                    start: a.start.max(b.start),
                    end: a.end.min(b.end),
                };
                return Some((common, window));
            }
        }
    }
    None
}

/// Whether a course appears in any conflict record.
pub fn course_has_conflict(course: &CourseSection, conflicts: &[ConflictRecord]) -> bool {
    conflicts
        .iter()
        .any(|c| c.course_a.same_section(course) || c.course_b.same_section(course))
}

/// The conflict records a course participates in.
pub fn conflicts_for_course<'a>(
    course: &CourseSection,
    conflicts: &'a [ConflictRecord],
) -> Vec<&'a ConflictRecord> {
    conflicts
        .iter()
        .filter(|c| c.course_a.same_section(course) || c.course_b.same_section(course))
        .collect()
}

/// Aggregate numbers for a schedule, as shown in the schedule summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStats {
    pub total_credits: f64,
    pub total_courses: usize,
    pub conflict_count: usize,
    pub critical_tracking_count: usize,
}

/// Compute summary stats for a schedule, including a fresh conflict count.
pub fn schedule_stats(schedule: &Schedule) -> ScheduleStats {
    ScheduleStats {
        total_credits: schedule.courses.iter().map(|c| c.credits).sum(),
        total_courses: schedule.courses.len(),
        conflict_count: detect_conflicts(&schedule.courses).len(),
        critical_tracking_count: schedule
            .courses
            .iter()
            .filter(|c| c.is_critical_tracking)
            .count(),
    }
}
