// Engine module - pure view-model computation for the portal screens
// This layer sits between normalized records (types) and presentation

pub mod catalog;
pub mod evaluations;
pub mod markup;
pub mod timegrid;

pub use catalog::{
    build_tree, filter_by_level, flatten, leaf_count, search_courses, visible_nodes,
};
pub use evaluations::{
    classify, date_key, filter_events, group_by_date, sorted_date_keys, summarize,
    upcoming_count, EvaluationFilter, EvaluationSummary,
};
pub use markup::render;
pub use timegrid::{
    build_week_grid, compute_position, parse_time_of_day, shift_week, week_dates, DayColumn,
    GridWindow, PositionedSlot, SlotPosition,
};

use chrono::NaiveDate;
use std::collections::BTreeMap;
use uniview_types::{CatalogNode, CourseRecord, EvaluationEvent, ScheduleSlot};

// Façade API - stable entry points for the presentation layer
// Screens should use these instead of reaching into internal modules

/// Lay out one slot inside the visible window.
pub fn layout_slot(slot: &ScheduleSlot, window: &GridWindow) -> Option<SlotPosition> {
    compute_position(&slot.start_time, &slot.end_time, window)
}

/// Monday..Saturday of the week containing `reference`.
pub fn week_of(reference: NaiveDate) -> [NaiveDate; 6] {
    timegrid::week_dates(reference)
}

/// Grouped evaluation calendar plus its day keys, oldest first.
pub fn evaluation_calendar(
    events: &[EvaluationEvent],
) -> (BTreeMap<String, Vec<EvaluationEvent>>, Vec<String>) {
    let groups = evaluations::group_by_date(events);
    let keys = evaluations::sorted_date_keys(&groups);
    (groups, keys)
}

/// Full catalog tree for a course list.
pub fn course_catalog(records: &[CourseRecord]) -> Vec<CatalogNode> {
    catalog::build_tree(records)
}

/// Render a course/news/discussion body to HTML.
pub fn render_text(content: &str) -> String {
    markup::render(content)
}
