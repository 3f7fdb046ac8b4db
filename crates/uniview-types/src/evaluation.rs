use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// Kind of scheduled evaluation: exam, quiz, lab session, or project
/// deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationKind {
    Examen,
    Controle,
    Tp,
    Projet,
}

impl EvaluationKind {
    /// Backend slug, also the value the filter dropdown submits.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationKind::Examen => "examen",
            EvaluationKind::Controle => "controle",
            EvaluationKind::Tp => "tp",
            EvaluationKind::Projet => "projet",
        }
    }

    /// French display name.
    pub fn label(&self) -> &'static str {
        match self {
            EvaluationKind::Examen => "Examen",
            EvaluationKind::Controle => "Contrôle",
            EvaluationKind::Tp => "TP",
            EvaluationKind::Projet => "Projet",
        }
    }
}

impl FromStr for EvaluationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "examen" => Ok(EvaluationKind::Examen),
            "controle" => Ok(EvaluationKind::Controle),
            "tp" => Ok(EvaluationKind::Tp),
            "projet" => Ok(EvaluationKind::Projet),
            other => Err(Error::Parse(format!("unknown evaluation type: {other}"))),
        }
    }
}

/// Position of an event relative to "now". Derived at aggregation time and
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationStatus {
    Upcoming,
    Past,
}

/// A scheduled exam-like event as the evaluation screens consume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationEvent {
    pub title: String,
    pub kind: EvaluationKind,
    pub date: DateTime<Utc>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub filiere: Option<String>,
    pub niveau: Option<String>,
    pub course_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_slug() {
        assert_eq!(
            "controle".parse::<EvaluationKind>().unwrap(),
            EvaluationKind::Controle
        );
        assert_eq!("TP".parse::<EvaluationKind>().unwrap(), EvaluationKind::Tp);
        assert!("partiel".parse::<EvaluationKind>().is_err());
    }

    #[test]
    fn test_kind_slug_round() {
        assert_eq!(EvaluationKind::Projet.as_str(), "projet");
        assert_eq!(EvaluationKind::Controle.label(), "Contrôle");
    }
}
