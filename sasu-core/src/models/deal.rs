use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealStatus {
    #[serde(rename = "prospect")]
    Prospect,
    #[serde(rename = "negociation")]
    Negotiation,
    #[serde(rename = "proposition")]
    Proposal,
    #[serde(rename = "gagne")]
    Won,
    #[serde(rename = "perdu")]
    Lost,
}

impl DealStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prospect => "prospect",
            Self::Negotiation => "negociation",
            Self::Proposal => "proposition",
            Self::Won => "gagne",
            Self::Lost => "perdu",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "prospect" => Some(Self::Prospect),
            "negociation" => Some(Self::Negotiation),
            "proposition" => Some(Self::Proposal),
            "gagne" => Some(Self::Won),
            "perdu" => Some(Self::Lost),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub id: i64,
    pub client_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub expected_amount: Decimal,
    /// Closing probability in percent.
    pub probability: i32,
    pub status: DealStatus,
    pub expected_close: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// For creating new deals (no id, status or timestamps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDeal {
    pub client_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub expected_amount: Decimal,
    pub probability: i32,
    pub expected_close: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_round_trips_through_parse() {
        for status in [
            DealStatus::Prospect,
            DealStatus::Negotiation,
            DealStatus::Proposal,
            DealStatus::Won,
            DealStatus::Lost,
        ] {
            assert_eq!(DealStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(DealStatus::parse("gagnee"), None);
    }
}
