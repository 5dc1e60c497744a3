use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate counters for the dashboard view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub prospects: u64,
    pub clients: u64,
    /// Deals not yet won.
    pub open_deals: u64,
    pub won_deals: u64,
    /// Sum of expected amounts over all deals that are not lost.
    pub pipeline_value: Decimal,
}
