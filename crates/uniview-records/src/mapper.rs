use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;

use uniview_types::{
    CourseRecord, EvaluationEvent, EvaluationKind, Result, ScheduleDay, ScheduleSlot,
};

use crate::schema::{RawCourse, RawEvaluation, RawSlot};

/// Title shown when a slot's course reference was not populated.
const UNTITLED_COURSE: &str = "Cours sans titre";

/// Decode a catalog response body into course records.
pub fn courses_from_json(body: &str) -> Result<Vec<CourseRecord>> {
    let raw: Vec<RawCourse> = serde_json::from_str(body)?;
    Ok(normalize_courses(raw))
}

/// Decode a timetable response body into schedule slots.
pub fn slots_from_json(body: &str) -> Result<Vec<ScheduleSlot>> {
    let raw: Vec<RawSlot> = serde_json::from_str(body)?;
    Ok(normalize_slots(raw))
}

/// Decode an evaluations response body into evaluation events.
pub fn evaluations_from_json(body: &str) -> Result<Vec<EvaluationEvent>> {
    let raw: Vec<RawEvaluation> = serde_json::from_str(body)?;
    Ok(normalize_evaluations(raw))
}

pub fn normalize_courses(raw: Vec<RawCourse>) -> Vec<CourseRecord> {
    raw.into_iter()
        .map(|course| CourseRecord {
            id: course.id,
            title: course.title,
            description: course.description,
            filiere: course.filiere,
            niveau: course.niveau,
            institution: course.institution,
        })
        .collect()
}

/// Normalize timetable slots. A slot with a day the grid cannot place is
/// dropped; the rest of the page still renders.
pub fn normalize_slots(raw: Vec<RawSlot>) -> Vec<ScheduleSlot> {
    let mut slots = Vec::with_capacity(raw.len());
    for slot in raw {
        let day = match slot.day_of_week.parse::<ScheduleDay>() {
            Ok(day) => day,
            Err(err) => {
                warn!(slot = %slot.id, %err, "skipping slot");
                continue;
            }
        };
        let course_title = slot
            .course_id
            .and_then(|course| course.title)
            .unwrap_or_else(|| UNTITLED_COURSE.to_string());
        slots.push(ScheduleSlot {
            course_title,
            filiere: slot.filiere,
            niveau: slot.niveau,
            day,
            start_time: slot.start_time,
            end_time: slot.end_time,
            room: slot.room,
            instructor: slot.instructor,
        });
    }
    slots
}

/// Normalize evaluations. Records with an unknown type or an unreadable
/// date are dropped.
pub fn normalize_evaluations(raw: Vec<RawEvaluation>) -> Vec<EvaluationEvent> {
    let mut events = Vec::with_capacity(raw.len());
    for evaluation in raw {
        let kind = match evaluation.kind.parse::<EvaluationKind>() {
            Ok(kind) => kind,
            Err(err) => {
                warn!(evaluation = %evaluation.id, %err, "skipping evaluation");
                continue;
            }
        };
        let date = match parse_evaluation_date(&evaluation.evaluation_date) {
            Some(date) => date,
            None => {
                warn!(
                    evaluation = %evaluation.id,
                    date = %evaluation.evaluation_date,
                    "skipping evaluation with unreadable date"
                );
                continue;
            }
        };
        events.push(EvaluationEvent {
            title: evaluation.title,
            kind,
            date,
            start_time: evaluation.start_time,
            end_time: evaluation.end_time,
            location: evaluation.location,
            filiere: evaluation.filiere,
            niveau: evaluation.niveau,
            course_title: evaluation.course_id.and_then(|course| course.title),
        });
    }
    events
}

/// Evaluation dates arrive as RFC 3339 timestamps; older records carry a
/// bare `YYYY-MM-DD`, read as midnight UTC.
fn parse_evaluation_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}
