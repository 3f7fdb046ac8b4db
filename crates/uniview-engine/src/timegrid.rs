use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use uniview_types::{ScheduleDay, ScheduleSlot};

/// Smallest height a slot may occupy, as a fraction of the visible window.
/// Keeps very short events visible and clickable.
const MIN_HEIGHT_FRACTION: f64 = 0.02;

/// The visible part of a grid day, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridWindow {
    pub start_min: u32,
    pub end_min: u32,
}

impl GridWindow {
    pub fn new(start_min: u32, end_min: u32) -> Self {
        Self { start_min, end_min }
    }

    fn span(&self) -> f64 {
        f64::from(self.end_min.saturating_sub(self.start_min))
    }
}

impl Default for GridWindow {
    /// The portal shows 07:00 through 18:00.
    fn default() -> Self {
        Self {
            start_min: 7 * 60,
            end_min: 18 * 60,
        }
    }
}

/// Fractional placement of a slot inside the visible window. Both fields
/// are in `[0, 1]`; the presentation layer multiplies by the column height
/// and applies its own minimum pixel height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotPosition {
    pub top_fraction: f64,
    pub height_fraction: f64,
}

/// A slot that survived layout, paired with its placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionedSlot {
    pub slot: ScheduleSlot,
    pub position: SlotPosition,
}

/// One weekday column: header date plus positioned slots in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayColumn {
    pub day: ScheduleDay,
    pub date: NaiveDate,
    pub slots: Vec<PositionedSlot>,
}

/// Parse an `H:MM`/`HH:MM` time of day into minutes since midnight.
///
/// Anything else (missing colon, letters, out-of-range parts, one-digit
/// minutes) is `None`; callers drop the slot instead of failing the page.
pub fn parse_time_of_day(s: &str) -> Option<u32> {
    let (hour, minute) = s.split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    if !hour.bytes().all(|b| b.is_ascii_digit()) || !minute.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}

/// Place a start/end pair inside the window.
///
/// `None` when either endpoint fails to parse or the interval is inverted
/// or empty. Overlapping slots are positioned independently; the grid does
/// not resolve them side by side.
pub fn compute_position(start: &str, end: &str, window: &GridWindow) -> Option<SlotPosition> {
    let start_min = parse_time_of_day(start)?;
    let end_min = parse_time_of_day(end)?;
    if end_min <= start_min {
        return None;
    }

    let span = window.span();
    if span <= 0.0 {
        return None;
    }

    let window_start = f64::from(window.start_min);
    let top = ((f64::from(start_min) - window_start) / span).clamp(0.0, 1.0);
    let bottom = ((f64::from(end_min) - window_start) / span).clamp(0.0, 1.0);
    let height = (bottom - top).max(MIN_HEIGHT_FRACTION);

    Some(SlotPosition {
        top_fraction: top,
        height_fraction: height,
    })
}

/// Monday through Saturday of the week containing `reference`.
///
/// A Sunday reference belongs to the week that just ended, so it maps to
/// the preceding Monday rather than the next one.
pub fn week_dates(reference: NaiveDate) -> [NaiveDate; 6] {
    let dow = i64::from(reference.weekday().num_days_from_sunday());
    let delta = if dow == 0 { -6 } else { 1 - dow };
    let monday = reference + Duration::days(delta);
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Move the reference date by whole weeks (negative = past). Backs the
/// week header's previous/next arrows.
pub fn shift_week(reference: NaiveDate, weeks: i64) -> NaiveDate {
    reference + Duration::days(7 * weeks)
}

/// Assemble the six Monday..Saturday columns for the week containing
/// `reference`. Slots keep their input order within a day; slots whose
/// times do not lay out are omitted.
pub fn build_week_grid(
    slots: &[ScheduleSlot],
    reference: NaiveDate,
    window: &GridWindow,
) -> Vec<DayColumn> {
    let dates = week_dates(reference);
    let mut columns: Vec<DayColumn> = ScheduleDay::ALL
        .iter()
        .zip(dates)
        .map(|(day, date)| DayColumn {
            day: *day,
            date,
            slots: Vec::new(),
        })
        .collect();

    let mut skipped = 0usize;
    for slot in slots {
        match compute_position(&slot.start_time, &slot.end_time, window) {
            Some(position) => columns[slot.day.index()].slots.push(PositionedSlot {
                slot: slot.clone(),
                position,
            }),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(skipped, "omitted slots that failed grid layout");
    }

    columns
}
