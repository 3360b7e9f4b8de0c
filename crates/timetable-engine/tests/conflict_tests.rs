//! Tests for pairwise conflict detection.

use timetable_engine::{
    conflicts_for_course, course_has_conflict, detect_conflicts, schedule_stats, CourseSection,
    MeetTime, Schedule, TimeSlot, Weekday,
};

fn course(code: &str, days: &[&str], start: f64, end: f64) -> CourseSection {
    CourseSection {
        code: code.to_string(),
        name: format!("{} lecture", code),
        credits: 3.0,
        meet_days: days.iter().map(|d| d.to_string()).collect(),
        meet_period: Some(TimeSlot { start, end }),
        ..Default::default()
    }
}

fn meet_time(days: &[&str], begin: &str, end: &str) -> MeetTime {
    MeetTime {
        meet_days: days.iter().map(|d| d.to_string()).collect(),
        meet_time_begin: begin.to_string(),
        meet_time_end: end.to_string(),
        ..Default::default()
    }
}

#[test]
fn disjoint_days_never_conflict() {
    // Scenario A: MWF 9-10 vs TTh 9.5-10.5 — times overlap, days don't.
    let x = course("X", &["M", "W", "F"], 9.0, 10.0);
    let y = course("Y", &["T", "Th"], 9.5, 10.5);

    assert!(detect_conflicts(&[x, y]).is_empty());
}

#[test]
fn overlapping_window_reported_with_days_and_times() {
    // Scenario B: Mon 9-10 vs Mon 9.5-10.5 → window [9.5, 10.0].
    let x = course("X", &["M"], 9.0, 10.0);
    let y = course("Y", &["M"], 9.5, 10.5);

    let conflicts = detect_conflicts(&[x, y]);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].conflicting_days, vec![Weekday::Mon]);
    assert_eq!(conflicts[0].conflicting_times.start, 9.5);
    assert_eq!(conflicts[0].conflicting_times.end, 10.0);
}

#[test]
fn touching_endpoints_not_a_conflict() {
    // Scenario C: Mon 9-10 vs Mon 10-11 — adjacent, not overlapping.
    let x = course("X", &["M"], 9.0, 10.0);
    let y = course("Y", &["M"], 10.0, 11.0);

    assert!(detect_conflicts(&[x, y]).is_empty());
}

#[test]
fn single_course_never_self_conflicts() {
    let x = course("X", &["M", "W"], 9.0, 10.0);
    assert!(detect_conflicts(&[x]).is_empty());
}

#[test]
fn detection_is_symmetric() {
    let x = course("X", &["M", "W"], 9.0, 11.0);
    let y = course("Y", &["W", "F"], 10.0, 12.0);

    let forward = detect_conflicts(&[x.clone(), y.clone()]);
    let backward = detect_conflicts(&[y, x]);

    assert_eq!(forward.len(), 1);
    assert_eq!(backward.len(), 1);
    assert_eq!(
        forward[0].conflicting_days,
        backward[0].conflicting_days,
        "day set must not depend on evaluation order"
    );
    assert_eq!(forward[0].conflicting_times, backward[0].conflicting_times);
    // The unordered pair is the same either way.
    assert_eq!(forward[0].course_a.code, backward[0].course_b.code);
    assert_eq!(forward[0].course_b.code, backward[0].course_a.code);
}

#[test]
fn pair_reported_at_most_once_first_match_wins() {
    // Both of A's blocks overlap B; only the first block pair is reported.
    let a = CourseSection {
        code: "A".to_string(),
        name: "Lecture and lab".to_string(),
        meet_times: vec![
            meet_time(&["M"], "9:00 AM", "10:00 AM"),
            meet_time(&["M"], "11:00 AM", "12:00 PM"),
        ],
        ..Default::default()
    };
    let b = course("B", &["M"], 9.0, 12.0);

    let conflicts = detect_conflicts(&[a, b]);
    assert_eq!(conflicts.len(), 1, "one record per course pair");
    assert_eq!(conflicts[0].conflicting_times.start, 9.0);
    assert_eq!(
        conflicts[0].conflicting_times.end, 10.0,
        "window comes from the first overlapping block pair"
    );
}

#[test]
fn all_pairs_compared() {
    // Three courses all stacked on Monday 9-10 → 3 pairwise conflicts.
    let a = course("A", &["M"], 9.0, 10.0);
    let b = course("B", &["M"], 9.0, 10.0);
    let c = course("C", &["M"], 9.0, 10.0);

    let conflicts = detect_conflicts(&[a, b, c]);
    assert_eq!(conflicts.len(), 3);
}

#[test]
fn conflicting_days_limited_to_shared_days() {
    let x = course("X", &["M", "W", "F"], 9.0, 10.0);
    let y = course("Y", &["W", "F"], 9.0, 10.0);

    let conflicts = detect_conflicts(&[x, y]);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(
        conflicts[0].conflicting_days,
        vec![Weekday::Wed, Weekday::Fri]
    );
}

#[test]
fn meetingless_courses_participate_in_nothing() {
    let ghost = CourseSection {
        code: "GHOST".to_string(),
        ..Default::default()
    };
    let unparsed = CourseSection {
        code: "TBA1".to_string(),
        meet_times: vec![meet_time(&["M"], "TBA", "TBA")],
        ..Default::default()
    };
    let real = course("REAL", &["M"], 9.0, 10.0);

    assert!(detect_conflicts(&[ghost, unparsed, real]).is_empty());
}

#[test]
fn detection_is_idempotent() {
    let courses = vec![
        course("A", &["M", "W"], 9.0, 10.5),
        course("B", &["W"], 10.0, 11.0),
        course("C", &["T"], 9.0, 10.0),
    ];

    let first = detect_conflicts(&courses);
    let second = detect_conflicts(&courses);
    assert_eq!(first, second);
}

#[test]
fn conflict_lookup_helpers_match_by_section_identity() {
    let a = course("A", &["M"], 9.0, 10.0);
    let b = course("B", &["M"], 9.5, 10.5);
    let c = course("C", &["F"], 9.0, 10.0);

    let conflicts = detect_conflicts(&[a.clone(), b.clone(), c.clone()]);
    assert_eq!(conflicts.len(), 1);

    assert!(course_has_conflict(&a, &conflicts));
    assert!(course_has_conflict(&b, &conflicts));
    assert!(!course_has_conflict(&c, &conflicts));

    assert_eq!(conflicts_for_course(&a, &conflicts).len(), 1);
    assert!(conflicts_for_course(&c, &conflicts).is_empty());

    // Same course code but a different section is a different identity.
    let mut other_section = a.clone();
    other_section.section = Some("other".to_string());
    assert!(!course_has_conflict(&other_section, &conflicts));
}

#[test]
fn stats_aggregate_credits_conflicts_and_tracking() {
    let mut tracked = course("A", &["M"], 9.0, 10.0);
    tracked.is_critical_tracking = true;
    tracked.credits = 4.0;

    let schedule = Schedule {
        major_code: "CPS".to_string(),
        semester: "Spring 2024".to_string(),
        courses: vec![tracked, course("B", &["M"], 9.5, 10.5)],
    };

    let stats = schedule_stats(&schedule);
    assert_eq!(stats.total_courses, 2);
    assert_eq!(stats.total_credits, 7.0);
    assert_eq!(stats.conflict_count, 1);
    assert_eq!(stats.critical_tracking_count, 1);
}
