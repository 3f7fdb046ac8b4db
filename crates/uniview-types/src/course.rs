use serde::{Deserialize, Serialize};

/// Catalog bucket for courses without a filière.
pub const FALLBACK_FILIERE: &str = "Autre";

/// Niveau code for courses without one.
pub const FALLBACK_NIVEAU: &str = "autre";

/// A course as the catalog and search screens consume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub filiere: Option<String>,
    pub niveau: Option<String>,
    pub institution: Option<String>,
}

/// Display label for a niveau code. Known codes map to their long form,
/// anything else passes through verbatim so new codes still group and
/// render.
pub fn niveau_label(code: &str) -> String {
    match code {
        "licence1" => "Licence 1".to_string(),
        "licence2" => "Licence 2".to_string(),
        "licence3" => "Licence 3".to_string(),
        other => other.to_string(),
    }
}
