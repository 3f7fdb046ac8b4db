// Record adapters - decode backend JSON payloads and normalize them into
// domain types. Degradation policy: a malformed record is dropped with a
// warning, a malformed body is the caller's error.

pub mod mapper;
pub mod schema;

pub use mapper::{
    courses_from_json, evaluations_from_json, normalize_courses, normalize_evaluations,
    normalize_slots, slots_from_json,
};
pub use schema::{RawCourse, RawCourseRef, RawEvaluation, RawSlot};
