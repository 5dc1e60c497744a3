use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of a progressive schedule.
///
/// Brackets belonging to the same schedule are contiguous, non-overlapping
/// and sorted ascending by `lower`; the last bracket has `upper` set to
/// `None` (unbounded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower: Decimal,
    pub upper: Option<Decimal>,
    /// Marginal rate applied to the portion of the base falling inside
    /// this bracket, as a decimal fraction (e.g. `0.30` for 30%).
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(lower: Decimal, upper: Option<Decimal>, rate: Decimal) -> Self {
        Self { lower, upper, rate }
    }
}
