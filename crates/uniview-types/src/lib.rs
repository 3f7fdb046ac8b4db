pub mod catalog;
pub mod course;
pub mod error;
pub mod evaluation;
pub mod schedule;

pub use catalog::{CatalogFile, CatalogFolder, CatalogNode};
pub use course::{niveau_label, CourseRecord, FALLBACK_FILIERE, FALLBACK_NIVEAU};
pub use error::{Error, Result};
pub use evaluation::{EvaluationEvent, EvaluationKind, EvaluationStatus};
pub use schedule::{ScheduleDay, ScheduleSlot};
