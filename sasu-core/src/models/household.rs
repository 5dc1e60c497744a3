use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Marital situation of the dirigeant's household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FamilyStatus {
    #[serde(rename = "celibataire")]
    Single,
    #[serde(rename = "marie")]
    Married,
    #[serde(rename = "pacse")]
    CivilPartnership,
}

impl FamilyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "celibataire",
            Self::Married => "marie",
            Self::CivilPartnership => "pacse",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "celibataire" => Some(Self::Single),
            "marie" => Some(Self::Married),
            "pacse" => Some(Self::CivilPartnership),
            _ => None,
        }
    }
}

/// Household parameters for the personal income-tax side of a scenario.
///
/// `parts` is the family-quotient divisor and must be positive;
/// `other_income` is taxable income from outside the company and must be
/// non-negative. Both are supplied per request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    pub status: FamilyStatus,
    pub parts: Decimal,
    pub other_income: Decimal,
}

impl HouseholdProfile {
    pub fn new(status: FamilyStatus, parts: Decimal, other_income: Decimal) -> Self {
        Self {
            status,
            parts,
            other_income,
        }
    }

    /// Single dirigeant, one part, no outside income.
    pub fn single() -> Self {
        Self::new(FamilyStatus::Single, Decimal::ONE, Decimal::ZERO)
    }
}

impl Default for HouseholdProfile {
    fn default() -> Self {
        Self::single()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn status_round_trips_through_parse() {
        for status in [
            FamilyStatus::Single,
            FamilyStatus::Married,
            FamilyStatus::CivilPartnership,
        ] {
            assert_eq!(FamilyStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(FamilyStatus::parse("veuf"), None);
    }

    #[test]
    fn default_household_is_single_with_one_part() {
        let household = HouseholdProfile::default();
        assert_eq!(household.status, FamilyStatus::Single);
        assert_eq!(household.parts, Decimal::ONE);
        assert_eq!(household.other_income, Decimal::ZERO);
    }
}
