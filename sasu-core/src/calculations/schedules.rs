//! Schedule evaluators: the pure tax and contribution formulas.
//!
//! Each function maps a monetary base onto one line of the fiscal
//! breakdown using the bracket tables and flat rates of a
//! [`FiscalSchedule`]. All functions are total (non-positive bases
//! short-circuit to zero) and free of side effects.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::{FiscalSchedule, TaxBracket};

/// Applies a progressive schedule to a base by summing the marginal
/// contribution of every bracket the base spans. The result is the sum of
/// `slice × rate` over all brackets, never a single bracket's flat rate
/// applied to the whole base.
pub fn progressive_tax(brackets: &[TaxBracket], base: Decimal) -> Decimal {
    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    for bracket in brackets {
        let ceiling = bracket.upper.unwrap_or(Decimal::MAX).min(base);
        if ceiling > bracket.lower {
            tax += (ceiling - bracket.lower) * bracket.rate;
        }
    }
    tax
}

/// Corporate tax (IS) on the annual profit.
pub fn corporate_tax(schedule: &FiscalSchedule, profit: Decimal) -> Decimal {
    round_half_up(progressive_tax(&schedule.corporate_brackets, profit))
}

/// Personal income tax with family quotient: the taxable income is divided
/// by the number of parts, the progressive schedule is applied to the
/// quotient, and the resulting tax is scaled back up by the same number of
/// parts. `parts` must be positive.
pub fn personal_income_tax(
    schedule: &FiscalSchedule,
    taxable_income: Decimal,
    parts: Decimal,
) -> Decimal {
    if taxable_income <= Decimal::ZERO || parts <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let quotient = taxable_income / parts;
    round_half_up(progressive_tax(&schedule.income_tax_brackets, quotient) * parts)
}

/// Composite social contributions on the dirigeant's gross salary.
pub fn dirigeant_social_contributions(schedule: &FiscalSchedule, gross_salary: Decimal) -> Decimal {
    if gross_salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_half_up(gross_salary * schedule.dirigeant_contribution_rate)
}

/// Flat-tax income-tax component on dividends.
pub fn dividend_income_tax(schedule: &FiscalSchedule, dividends: Decimal) -> Decimal {
    if dividends <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_half_up(dividends * schedule.dividend_income_tax_rate)
}

/// Flat-tax social-levy component on dividends.
pub fn dividend_social_levies(schedule: &FiscalSchedule, dividends: Decimal) -> Decimal {
    if dividends <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_half_up(dividends * schedule.dividend_social_levy_rate)
}

/// Composite employer-side contributions, used for the cost-to-company
/// figure of the net-to-gross solver.
pub fn employer_contributions(schedule: &FiscalSchedule, gross_salary: Decimal) -> Decimal {
    if gross_salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_half_up(gross_salary * schedule.employer_contribution_rate)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::FiscalSchedule;

    fn schedule() -> FiscalSchedule {
        FiscalSchedule::current()
    }

    // =========================================================================
    // corporate_tax tests
    // =========================================================================

    #[test]
    fn corporate_tax_is_zero_for_non_positive_profit() {
        assert_eq!(corporate_tax(&schedule(), dec!(0)), dec!(0));
        assert_eq!(corporate_tax(&schedule(), dec!(-5000)), dec!(0));
    }

    #[test]
    fn corporate_tax_applies_reduced_rate_below_threshold() {
        // 30000 * 0.15
        assert_eq!(corporate_tax(&schedule(), dec!(30000)), dec!(4500.00));
    }

    #[test]
    fn corporate_tax_at_threshold_uses_reduced_rate_only() {
        assert_eq!(corporate_tax(&schedule(), dec!(42500)), dec!(6375.00));
    }

    #[test]
    fn corporate_tax_above_threshold_sums_both_slices() {
        // 42500 * 0.15 + 57500 * 0.25
        assert_eq!(corporate_tax(&schedule(), dec!(100000)), dec!(20750.00));
    }

    // =========================================================================
    // personal_income_tax tests
    // =========================================================================

    #[test]
    fn income_tax_is_zero_below_first_threshold() {
        assert_eq!(personal_income_tax(&schedule(), dec!(10000), dec!(1)), dec!(0));
    }

    #[test]
    fn income_tax_is_zero_for_non_positive_income() {
        assert_eq!(personal_income_tax(&schedule(), dec!(0), dec!(1)), dec!(0));
        assert_eq!(personal_income_tax(&schedule(), dec!(-100), dec!(1)), dec!(0));
    }

    #[test]
    fn income_tax_sums_marginal_slices() {
        // (28797 - 11294) * 0.11 + (50000 - 28797) * 0.30
        assert_eq!(
            personal_income_tax(&schedule(), dec!(50000), dec!(1)),
            dec!(8286.23)
        );
    }

    #[test]
    fn income_tax_spans_the_top_bracket() {
        // 1925.33 + 16063.20 + 38853.65 + (200000 - 177106) * 0.45
        assert_eq!(
            personal_income_tax(&schedule(), dec!(200000), dec!(1)),
            dec!(67144.48)
        );
    }

    #[test]
    fn income_tax_scales_with_family_quotient() {
        // Quotient 25000 taxed per part, then doubled.
        assert_eq!(
            personal_income_tax(&schedule(), dec!(50000), dec!(2)),
            dec!(3015.32)
        );
    }

    #[test]
    fn income_tax_is_continuous_at_bracket_edges() {
        let below = personal_income_tax(&schedule(), dec!(28797), dec!(1));
        let above = personal_income_tax(&schedule(), dec!(28797.01), dec!(1));
        assert!(above - below <= dec!(0.01));
    }

    #[test]
    fn income_tax_is_non_decreasing() {
        let mut previous = dec!(0);
        for income in [10000, 20000, 30000, 60000, 100000, 200000] {
            let tax = personal_income_tax(&schedule(), Decimal::from(income), dec!(1));
            assert!(tax >= previous, "tax decreased at income {income}");
            previous = tax;
        }
    }

    // =========================================================================
    // flat-rate tests
    // =========================================================================

    #[test]
    fn dirigeant_contributions_apply_flat_rate() {
        assert_eq!(
            dirigeant_social_contributions(&schedule(), dec!(50000)),
            dec!(22500.00)
        );
        assert_eq!(dirigeant_social_contributions(&schedule(), dec!(0)), dec!(0));
        assert_eq!(
            dirigeant_social_contributions(&schedule(), dec!(-100)),
            dec!(0)
        );
    }

    #[test]
    fn dividend_taxes_apply_both_flat_components() {
        assert_eq!(dividend_income_tax(&schedule(), dec!(10000)), dec!(1280.00));
        assert_eq!(dividend_social_levies(&schedule(), dec!(10000)), dec!(1720.00));
        assert_eq!(dividend_income_tax(&schedule(), dec!(-1)), dec!(0));
        assert_eq!(dividend_social_levies(&schedule(), dec!(0)), dec!(0));
    }

    #[test]
    fn employer_contributions_apply_flat_rate() {
        assert_eq!(employer_contributions(&schedule(), dec!(50000)), dec!(21000.00));
        assert_eq!(employer_contributions(&schedule(), dec!(0)), dec!(0));
    }
}
