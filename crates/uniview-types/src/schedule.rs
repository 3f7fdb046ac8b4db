use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// One of the six working days shown by the grid. Sunday has no column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl ScheduleDay {
    /// Monday-first column order.
    pub const ALL: [ScheduleDay; 6] = [
        ScheduleDay::Monday,
        ScheduleDay::Tuesday,
        ScheduleDay::Wednesday,
        ScheduleDay::Thursday,
        ScheduleDay::Friday,
        ScheduleDay::Saturday,
    ];

    /// Column index in the Monday-first grid.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// French display name used by the week header.
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleDay::Monday => "Lundi",
            ScheduleDay::Tuesday => "Mardi",
            ScheduleDay::Wednesday => "Mercredi",
            ScheduleDay::Thursday => "Jeudi",
            ScheduleDay::Friday => "Vendredi",
            ScheduleDay::Saturday => "Samedi",
        }
    }
}

impl FromStr for ScheduleDay {
    type Err = Error;

    /// Backends have stored both French and English day names over time;
    /// both spellings are accepted, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lundi" | "monday" => Ok(ScheduleDay::Monday),
            "mardi" | "tuesday" => Ok(ScheduleDay::Tuesday),
            "mercredi" | "wednesday" => Ok(ScheduleDay::Wednesday),
            "jeudi" | "thursday" => Ok(ScheduleDay::Thursday),
            "vendredi" | "friday" => Ok(ScheduleDay::Friday),
            "samedi" | "saturday" => Ok(ScheduleDay::Saturday),
            other => Err(Error::Parse(format!("unknown day of week: {other}"))),
        }
    }
}

/// One recurring weekly timetable entry for a course.
///
/// Times stay as the `H:MM`/`HH:MM` strings the backend delivered; a slot
/// whose times do not parse is skipped by the grid, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub course_title: String,
    pub filiere: Option<String>,
    pub niveau: Option<String>,
    pub day: ScheduleDay,
    pub start_time: String,
    pub end_time: String,
    pub room: Option<String>,
    pub instructor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_from_french_and_english() {
        assert_eq!("lundi".parse::<ScheduleDay>().unwrap(), ScheduleDay::Monday);
        assert_eq!(
            "Saturday".parse::<ScheduleDay>().unwrap(),
            ScheduleDay::Saturday
        );
        assert_eq!(
            " MERCREDI ".parse::<ScheduleDay>().unwrap(),
            ScheduleDay::Wednesday
        );
    }

    #[test]
    fn test_day_from_unknown() {
        assert!("dimanche".parse::<ScheduleDay>().is_err());
        assert!("".parse::<ScheduleDay>().is_err());
    }

    #[test]
    fn test_day_order_matches_index() {
        for (i, day) in ScheduleDay::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
        }
    }
}
