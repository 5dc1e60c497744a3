use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProspectStatus {
    #[serde(rename = "nouveau")]
    New,
    #[serde(rename = "qualifie")]
    Qualified,
    #[serde(rename = "interesse")]
    Interested,
    #[serde(rename = "non_interesse")]
    NotInterested,
    #[serde(rename = "converti")]
    Converted,
}

impl ProspectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "nouveau",
            Self::Qualified => "qualifie",
            Self::Interested => "interesse",
            Self::NotInterested => "non_interesse",
            Self::Converted => "converti",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "nouveau" => Some(Self::New),
            "qualifie" => Some(Self::Qualified),
            "interesse" => Some(Self::Interested),
            "non_interesse" => Some(Self::NotInterested),
            "converti" => Some(Self::Converted),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prospect {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: Option<String>,
    pub status: ProspectStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// For creating new prospects (no id, status or timestamps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProspect {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_round_trips_through_parse() {
        for status in [
            ProspectStatus::New,
            ProspectStatus::Qualified,
            ProspectStatus::Interested,
            ProspectStatus::NotInterested,
            ProspectStatus::Converted,
        ] {
            assert_eq!(ProspectStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(ProspectStatus::parse("perdu"), None);
        assert_eq!(ProspectStatus::parse(""), None);
    }
}
