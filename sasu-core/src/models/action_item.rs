use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "appel")]
    Call,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "rendez_vous")]
    Meeting,
    #[serde(rename = "relance")]
    FollowUp,
    #[serde(rename = "autre")]
    Other,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "appel",
            Self::Email => "email",
            Self::Meeting => "rendez_vous",
            Self::FollowUp => "relance",
            Self::Other => "autre",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "appel" => Some(Self::Call),
            "email" => Some(Self::Email),
            "rendez_vous" => Some(Self::Meeting),
            "relance" => Some(Self::FollowUp),
            "autre" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionStatus {
    #[serde(rename = "a_faire")]
    Todo,
    #[serde(rename = "en_cours")]
    InProgress,
    #[serde(rename = "termine")]
    Done,
    #[serde(rename = "annule")]
    Cancelled,
}

impl ActionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "a_faire",
            Self::InProgress => "en_cours",
            Self::Done => "termine",
            Self::Cancelled => "annule",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "a_faire" => Some(Self::Todo),
            "en_cours" => Some(Self::InProgress),
            "termine" => Some(Self::Done),
            "annule" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// A follow-up task attached to a deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: i64,
    pub deal_id: i64,
    pub kind: ActionKind,
    pub title: String,
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    pub status: ActionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// For creating new actions (no id, status or timestamps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActionItem {
    pub deal_id: i64,
    pub kind: ActionKind,
    pub title: String,
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn kind_round_trips_through_parse() {
        for kind in [
            ActionKind::Call,
            ActionKind::Email,
            ActionKind::Meeting,
            ActionKind::FollowUp,
            ActionKind::Other,
        ] {
            assert_eq!(ActionKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn status_round_trips_through_parse() {
        for status in [
            ActionStatus::Todo,
            ActionStatus::InProgress,
            ActionStatus::Done,
            ActionStatus::Cancelled,
        ] {
            assert_eq!(ActionStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert_eq!(ActionKind::parse("visite"), None);
        assert_eq!(ActionStatus::parse("fini"), None);
    }
}
