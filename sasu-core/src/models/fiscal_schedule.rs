use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::tax_bracket::TaxBracket;

/// Every rate, threshold and cap in effect for one fiscal year.
///
/// This is the single source of truth for the calculation modules: the
/// schedule evaluators, the scenario calculator and the solvers all read
/// from the same instance, and the same instance is what gets serialized
/// when a caller asks for the table currently in effect. Updating the
/// engine for a new fiscal year is a data swap here, not a code change.
///
/// The two composite contribution rates (`dirigeant_contribution_rate`,
/// `employer_contribution_rate`) are flat approximations standing in for
/// the itemized social-contribution schedules. They are kept apart from
/// the bracket tables so that accurate schedules can replace them without
/// touching the scenario calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalSchedule {
    pub year: i32,

    /// Corporate tax (IS) brackets: reduced rate up to the threshold,
    /// standard rate above.
    pub corporate_brackets: Vec<TaxBracket>,

    /// Progressive personal income-tax brackets, applied to the family
    /// quotient (taxable income divided by the number of parts).
    pub income_tax_brackets: Vec<TaxBracket>,

    /// Composite social-contribution rate on the dirigeant's salary.
    pub dirigeant_contribution_rate: Decimal,

    /// Composite employer-side contribution rate, used only for the
    /// cost-to-company figure of the net-to-gross solver.
    pub employer_contribution_rate: Decimal,

    /// Flat-tax income-tax component on dividends.
    pub dividend_income_tax_rate: Decimal,

    /// Flat-tax social-levy component on dividends.
    pub dividend_social_levy_rate: Decimal,

    /// Standard salary deduction rate (frais professionnels).
    pub salary_allowance_rate: Decimal,

    /// Cap on the standard salary deduction.
    pub salary_allowance_cap: Decimal,
}

impl FiscalSchedule {
    /// The schedule currently in effect (2024 barème).
    pub fn current() -> Self {
        Self {
            year: 2024,
            corporate_brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(42500)), dec!(0.15)),
                TaxBracket::new(dec!(42500), None, dec!(0.25)),
            ],
            income_tax_brackets: vec![
                TaxBracket::new(dec!(0), Some(dec!(11294)), dec!(0)),
                TaxBracket::new(dec!(11294), Some(dec!(28797)), dec!(0.11)),
                TaxBracket::new(dec!(28797), Some(dec!(82341)), dec!(0.30)),
                TaxBracket::new(dec!(82341), Some(dec!(177106)), dec!(0.41)),
                TaxBracket::new(dec!(177106), None, dec!(0.45)),
            ],
            dirigeant_contribution_rate: dec!(0.45),
            employer_contribution_rate: dec!(0.42),
            dividend_income_tax_rate: dec!(0.128),
            dividend_social_levy_rate: dec!(0.172),
            salary_allowance_rate: dec!(0.10),
            salary_allowance_cap: dec!(12829),
        }
    }
}
