use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStatus {
    #[serde(rename = "brouillon")]
    Draft,
    #[serde(rename = "envoye")]
    Sent,
    #[serde(rename = "accepte")]
    Accepted,
    #[serde(rename = "refuse")]
    Refused,
    #[serde(rename = "expire")]
    Expired,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "brouillon",
            Self::Sent => "envoye",
            Self::Accepted => "accepte",
            Self::Refused => "refuse",
            Self::Expired => "expire",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "brouillon" => Some(Self::Draft),
            "envoye" => Some(Self::Sent),
            "accepte" => Some(Self::Accepted),
            "refuse" => Some(Self::Refused),
            "expire" => Some(Self::Expired),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: i64,
    pub client_id: i64,
    pub deal_id: Option<i64>,
    /// Sequential reference of the form `DEV-0001`, numbered from the
    /// live quote count. Deleting a quote frees its reference for the
    /// next one created.
    pub number: String,
    pub title: String,
    pub lines: Vec<QuoteLine>,
    pub net_total: Decimal,
    /// VAT rate in percent.
    pub vat_rate: Decimal,
    pub vat_amount: Decimal,
    pub gross_total: Decimal,
    pub status: QuoteStatus,
    pub valid_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// For creating new quotes; totals and the reference number are computed
/// by the repository at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    pub client_id: i64,
    pub deal_id: Option<i64>,
    pub title: String,
    pub lines: Vec<QuoteLine>,
    pub vat_rate: Decimal,
    pub valid_until: Option<DateTime<Utc>>,
}

impl NewQuote {
    /// Sums the line amounts and derives VAT and gross totals from the
    /// quote's VAT rate (expressed in percent).
    pub fn totals(&self) -> (Decimal, Decimal, Decimal) {
        let net: Decimal = self.lines.iter().map(|line| line.amount).sum();
        let vat = net * self.vat_rate / dec!(100);
        (net, vat, net + vat)
    }
}
