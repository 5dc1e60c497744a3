use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: Option<String>,
    pub address: Option<String>,
    pub siret: Option<String>,
    pub notes: Option<String>,
    /// Running total of revenue billed to this client.
    pub total_revenue: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// For creating new clients (no id, revenue total or timestamps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: Option<String>,
    pub address: Option<String>,
    pub siret: Option<String>,
    pub notes: Option<String>,
}
