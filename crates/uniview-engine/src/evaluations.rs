use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use uniview_types::{EvaluationEvent, EvaluationKind, EvaluationStatus};

/// Filter values the evaluation screen submits for "no constraint".
const WILDCARDS: [&str; 3] = ["", "Tous", "Toutes"];

/// Calendar-day key, `YYYY-MM-DD`. Lexicographic order on these keys equals
/// chronological order, which is what keeps the grouped map sorted.
pub fn date_key(event: &EvaluationEvent) -> String {
    event.date.date_naive().to_string()
}

/// Group events by calendar day. Within a day, events keep the order in
/// which they were encountered; across days the map iterates ascending.
pub fn group_by_date(events: &[EvaluationEvent]) -> BTreeMap<String, Vec<EvaluationEvent>> {
    let mut groups: BTreeMap<String, Vec<EvaluationEvent>> = BTreeMap::new();
    for event in events {
        groups.entry(date_key(event)).or_default().push(event.clone());
    }
    groups
}

/// Day keys of a grouped calendar, oldest first.
pub fn sorted_date_keys(groups: &BTreeMap<String, Vec<EvaluationEvent>>) -> Vec<String> {
    groups.keys().cloned().collect()
}

/// An event is `Past` strictly before `now`, `Upcoming` otherwise.
/// Recomputed on every call; the status is never stored.
pub fn classify(event: &EvaluationEvent, now: DateTime<Utc>) -> EvaluationStatus {
    if event.date < now {
        EvaluationStatus::Past
    } else {
        EvaluationStatus::Upcoming
    }
}

pub fn upcoming_count(events: &[EvaluationEvent], now: DateTime<Utc>) -> usize {
    events
        .iter()
        .filter(|event| classify(event, now) == EvaluationStatus::Upcoming)
        .count()
}

/// Filter selections as the screen submits them. `""`, `"Tous"` and
/// `"Toutes"` all mean "any".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationFilter {
    pub filiere: String,
    pub niveau: String,
    pub kind: String,
}

fn is_wildcard(value: &str) -> bool {
    WILDCARDS.contains(&value)
}

fn criterion_matches(criterion: &str, actual: Option<&str>) -> bool {
    is_wildcard(criterion) || actual == Some(criterion)
}

/// Conjunction of the three criteria: an event passes when every criterion
/// matches it or is a wildcard.
pub fn filter_events(events: &[EvaluationEvent], filter: &EvaluationFilter) -> Vec<EvaluationEvent> {
    events
        .iter()
        .filter(|event| {
            criterion_matches(&filter.filiere, event.filiere.as_deref())
                && criterion_matches(&filter.niveau, event.niveau.as_deref())
                && (is_wildcard(&filter.kind) || event.kind.as_str() == filter.kind)
        })
        .cloned()
        .collect()
}

/// Counts shown in the evaluation screen header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub total: usize,
    pub upcoming: usize,
    pub past: usize,
    pub by_kind: HashMap<EvaluationKind, usize>,
}

pub fn summarize(events: &[EvaluationEvent], now: DateTime<Utc>) -> EvaluationSummary {
    let mut upcoming = 0;
    let mut by_kind: HashMap<EvaluationKind, usize> = HashMap::new();

    for event in events {
        if classify(event, now) == EvaluationStatus::Upcoming {
            upcoming += 1;
        }
        *by_kind.entry(event.kind).or_insert(0) += 1;
    }

    EvaluationSummary {
        total: events.len(),
        upcoming,
        past: events.len() - upcoming,
        by_kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(title: &str, kind: EvaluationKind, date: &str) -> EvaluationEvent {
        EvaluationEvent {
            title: title.to_string(),
            kind,
            date: DateTime::parse_from_rfc3339(date).unwrap().with_timezone(&Utc),
            start_time: None,
            end_time: None,
            location: None,
            filiere: None,
            niveau: None,
            course_title: None,
        }
    }

    #[test]
    fn test_group_by_date_is_a_stable_partition() {
        let events = vec![
            event("b", EvaluationKind::Examen, "2024-06-14T08:00:00Z"),
            event("a", EvaluationKind::Controle, "2024-06-12T10:00:00Z"),
            event("c", EvaluationKind::Examen, "2024-06-14T14:00:00Z"),
        ];

        let groups = group_by_date(&events);
        let keys = sorted_date_keys(&groups);
        assert_eq!(keys, vec!["2024-06-12", "2024-06-14"]);

        // within a day, encounter order is preserved even when timestamps
        // would sort differently
        let day = &groups["2024-06-14"];
        assert_eq!(day[0].title, "b");
        assert_eq!(day[1].title, "c");
    }

    #[test]
    fn test_group_by_date_is_order_independent_across_groups() {
        let a = event("a", EvaluationKind::Tp, "2024-06-12T10:00:00Z");
        let b = event("b", EvaluationKind::Tp, "2024-06-14T08:00:00Z");

        let forward = group_by_date(&[a.clone(), b.clone()]);
        let backward = group_by_date(&[b, a]);
        assert_eq!(sorted_date_keys(&forward), sorted_date_keys(&backward));
    }

    #[test]
    fn test_classify_against_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 13, 12, 0, 0).unwrap();
        let past = event("p", EvaluationKind::Examen, "2024-06-13T11:59:59Z");
        let upcoming = event("u", EvaluationKind::Examen, "2024-06-13T12:00:00Z");

        assert_eq!(classify(&past, now), EvaluationStatus::Past);
        // an event exactly at "now" is still upcoming
        assert_eq!(classify(&upcoming, now), EvaluationStatus::Upcoming);
        assert_eq!(upcoming_count(&[past, upcoming], now), 1);
    }

    #[test]
    fn test_filter_wildcards_match_everything() {
        let mut ev = event("e", EvaluationKind::Examen, "2024-06-12T08:00:00Z");
        ev.filiere = Some("Informatique".to_string());
        ev.niveau = Some("licence2".to_string());

        for wildcard in ["", "Tous", "Toutes"] {
            let filter = EvaluationFilter {
                filiere: wildcard.to_string(),
                niveau: wildcard.to_string(),
                kind: wildcard.to_string(),
            };
            assert_eq!(filter_events(std::slice::from_ref(&ev), &filter).len(), 1);
        }
    }

    #[test]
    fn test_filter_is_conjunctive() {
        let mut ev = event("e", EvaluationKind::Examen, "2024-06-12T08:00:00Z");
        ev.filiere = Some("Informatique".to_string());
        ev.niveau = Some("licence2".to_string());

        let filter = EvaluationFilter {
            filiere: "Informatique".to_string(),
            niveau: "licence1".to_string(),
            kind: "Tous".to_string(),
        };
        assert!(filter_events(std::slice::from_ref(&ev), &filter).is_empty());

        let filter = EvaluationFilter {
            filiere: "Informatique".to_string(),
            niveau: "licence2".to_string(),
            kind: "examen".to_string(),
        };
        assert_eq!(filter_events(std::slice::from_ref(&ev), &filter).len(), 1);
    }

    #[test]
    fn test_filter_missing_field_fails_concrete_criterion() {
        let ev = event("e", EvaluationKind::Examen, "2024-06-12T08:00:00Z");
        let filter = EvaluationFilter {
            filiere: "Informatique".to_string(),
            ..Default::default()
        };
        assert!(filter_events(&[ev], &filter).is_empty());
    }

    #[test]
    fn test_summarize_counts() {
        let now = Utc.with_ymd_and_hms(2024, 6, 13, 0, 0, 0).unwrap();
        let events = vec![
            event("a", EvaluationKind::Examen, "2024-06-12T08:00:00Z"),
            event("b", EvaluationKind::Examen, "2024-06-14T08:00:00Z"),
            event("c", EvaluationKind::Tp, "2024-06-15T08:00:00Z"),
        ];

        let summary = summarize(&events, now);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.upcoming, 2);
        assert_eq!(summary.past, 1);
        assert_eq!(summary.by_kind[&EvaluationKind::Examen], 2);
        assert_eq!(summary.by_kind[&EvaluationKind::Tp], 1);
    }
}
