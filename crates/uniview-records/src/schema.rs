use serde::Deserialize;

/// Populated course reference (`course_id: { title }`). The backend leaves
/// it out when the referenced course was deleted.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCourseRef {
    #[serde(default)]
    pub title: Option<String>,
}

/// Course document as served by the catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCourse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub filiere: Option<String>,
    #[serde(default)]
    pub niveau: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
}

/// Timetable slot document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSlot {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub course_id: Option<RawCourseRef>,
    #[serde(default)]
    pub filiere: Option<String>,
    #[serde(default)]
    pub niveau: Option<String>,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
}

/// Evaluation document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvaluation {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub evaluation_date: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub filiere: Option<String>,
    #[serde(default)]
    pub niveau: Option<String>,
    #[serde(default)]
    pub course_id: Option<RawCourseRef>,
}
