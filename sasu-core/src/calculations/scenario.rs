//! Full-year fiscal scenario for one salary/dividend split.
//!
//! Given the company's annual figures and a chosen gross salary, the
//! calculator walks the complete chain from revenue down to the net
//! amount in the dirigeant's pocket: social contributions, corporate
//! tax on the remaining profit, flat tax on the distributed dividends
//! and personal income tax on the salary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{ratio_as_percent, round_half_up};
use crate::calculations::schedules;
use crate::models::{FiscalSchedule, HouseholdProfile};

/// Company-year figures plus the salary choice under evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Annual revenue excluding VAT.
    pub revenue: Decimal,
    /// Deductible operating charges, excluding the dirigeant's pay.
    pub deductible_charges: Decimal,
    /// Gross annual salary of the dirigeant.
    pub gross_salary: Decimal,
    pub household: HouseholdProfile,
}

/// Complete breakdown of one salary/dividend split.
///
/// `total_levies` aggregates every tax and contribution triggered by the
/// scenario, on both the company side and the household side.
/// `net_disposable` is what reaches the dirigeant: net salary plus net
/// dividends. Income tax on the salary is a household levy settled outside
/// the company ledger, so the exact accounting identity is
/// `total_levies + net_disposable - income_tax_on_salary
///  == revenue - deductible_charges` whenever the profit after corporate
/// tax is non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalScenario {
    pub gross_salary: Decimal,
    pub social_contributions: Decimal,
    pub net_salary: Decimal,
    /// Profit before corporate tax, after charges and the full salary cost.
    pub pre_tax_profit: Decimal,
    pub corporate_tax: Decimal,
    /// Distributable profit, floored at zero. Despite the name this is the
    /// post-corporate-tax profit; the dividend flat tax is applied to this
    /// figure in full.
    pub gross_dividends: Decimal,
    /// Deduction applied to the net salary before income tax.
    pub salary_allowance: Decimal,
    /// Household taxable income: net salary after allowance plus other income.
    pub taxable_income: Decimal,
    pub income_tax_on_salary: Decimal,
    pub dividend_income_tax: Decimal,
    pub dividend_social_levies: Decimal,
    pub net_dividends: Decimal,
    pub total_levies: Decimal,
    pub net_disposable: Decimal,
    /// Total levies as a percentage of revenue.
    pub overall_levy_rate: Decimal,
}

/// Evaluates one compensation split against a fiscal schedule.
pub struct ScenarioCalculator<'a> {
    schedule: &'a FiscalSchedule,
}

impl<'a> ScenarioCalculator<'a> {
    pub fn new(schedule: &'a FiscalSchedule) -> Self {
        Self { schedule }
    }

    pub fn calculate(&self, input: &ScenarioInput) -> FiscalScenario {
        let gross_salary = input.gross_salary;
        let social_contributions =
            schedules::dirigeant_social_contributions(self.schedule, gross_salary);
        let net_salary = gross_salary - social_contributions;

        let pre_tax_profit = input.revenue - input.deductible_charges - gross_salary;
        let corporate_tax = schedules::corporate_tax(self.schedule, pre_tax_profit);
        let gross_dividends = (pre_tax_profit - corporate_tax).max(Decimal::ZERO);

        let salary_allowance = self.salary_allowance(net_salary);
        let taxable_income =
            (net_salary - salary_allowance).max(Decimal::ZERO) + input.household.other_income;
        let income_tax_on_salary = schedules::personal_income_tax(
            self.schedule,
            taxable_income,
            input.household.parts,
        );

        let dividend_income_tax = schedules::dividend_income_tax(self.schedule, gross_dividends);
        let dividend_social_levies =
            schedules::dividend_social_levies(self.schedule, gross_dividends);
        let net_dividends = gross_dividends - dividend_income_tax - dividend_social_levies;

        let total_levies = social_contributions
            + corporate_tax
            + income_tax_on_salary
            + dividend_income_tax
            + dividend_social_levies;
        let net_disposable = net_salary + net_dividends;
        let overall_levy_rate = ratio_as_percent(total_levies, input.revenue);

        FiscalScenario {
            gross_salary,
            social_contributions,
            net_salary,
            pre_tax_profit,
            corporate_tax,
            gross_dividends,
            salary_allowance,
            taxable_income,
            income_tax_on_salary,
            dividend_income_tax,
            dividend_social_levies,
            net_dividends,
            total_levies,
            net_disposable,
            overall_levy_rate,
        }
    }

    /// Capped percentage allowance on the net salary.
    fn salary_allowance(&self, net_salary: Decimal) -> Decimal {
        if net_salary <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        round_half_up(
            (net_salary * self.schedule.salary_allowance_rate)
                .min(self.schedule.salary_allowance_cap),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{FamilyStatus, FiscalSchedule, HouseholdProfile};

    fn calculate(input: &ScenarioInput) -> FiscalScenario {
        let schedule = FiscalSchedule::current();
        ScenarioCalculator::new(&schedule).calculate(input)
    }

    #[test]
    fn mixed_split_full_breakdown() {
        let scenario = calculate(&ScenarioInput {
            revenue: dec!(200000),
            deductible_charges: dec!(50000),
            gross_salary: dec!(60000),
            household: HouseholdProfile::single(),
        });

        assert_eq!(scenario.social_contributions, dec!(27000.00));
        assert_eq!(scenario.net_salary, dec!(33000.00));
        assert_eq!(scenario.pre_tax_profit, dec!(90000));
        assert_eq!(scenario.corporate_tax, dec!(18250.00));
        assert_eq!(scenario.gross_dividends, dec!(71750.00));
        assert_eq!(scenario.salary_allowance, dec!(3300.00));
        assert_eq!(scenario.taxable_income, dec!(29700.00));
        assert_eq!(scenario.income_tax_on_salary, dec!(2196.23));
        assert_eq!(scenario.dividend_income_tax, dec!(9184.00));
        assert_eq!(scenario.dividend_social_levies, dec!(12341.00));
        assert_eq!(scenario.net_dividends, dec!(50225.00));
        assert_eq!(scenario.total_levies, dec!(68971.23));
        assert_eq!(scenario.net_disposable, dec!(83225.00));
        assert_eq!(scenario.overall_levy_rate, dec!(34.49));
    }

    #[test]
    fn zero_salary_routes_everything_through_dividends() {
        let scenario = calculate(&ScenarioInput {
            revenue: dec!(200000),
            deductible_charges: dec!(50000),
            gross_salary: dec!(0),
            household: HouseholdProfile::single(),
        });

        assert_eq!(scenario.social_contributions, dec!(0));
        assert_eq!(scenario.net_salary, dec!(0));
        assert_eq!(scenario.income_tax_on_salary, dec!(0));
        assert_eq!(scenario.corporate_tax, dec!(33250.00));
        assert_eq!(scenario.gross_dividends, dec!(116750.00));
        assert_eq!(scenario.net_dividends, dec!(81725.00));
        assert_eq!(scenario.net_disposable, dec!(81725.00));
    }

    #[test]
    fn salary_exceeding_profit_clamps_dividends_to_zero() {
        let scenario = calculate(&ScenarioInput {
            revenue: dec!(100000),
            deductible_charges: dec!(30000),
            gross_salary: dec!(90000),
            household: HouseholdProfile::single(),
        });

        assert_eq!(scenario.pre_tax_profit, dec!(-20000));
        assert_eq!(scenario.corporate_tax, dec!(0));
        assert_eq!(scenario.gross_dividends, dec!(0));
        assert_eq!(scenario.net_dividends, dec!(0));
        assert_eq!(scenario.net_disposable, scenario.net_salary);
    }

    #[test]
    fn allowance_is_capped() {
        // Net salary 110000, ten percent would be 11000 which is below the
        // cap; net salary 140000 exceeds it.
        let scenario = calculate(&ScenarioInput {
            revenue: dec!(500000),
            deductible_charges: dec!(0),
            gross_salary: dec!(254545.46),
            household: HouseholdProfile::single(),
        });

        assert_eq!(scenario.net_salary, dec!(140000.00));
        assert_eq!(scenario.salary_allowance, dec!(12829.00));
    }

    #[test]
    fn family_quotient_lowers_income_tax() {
        let single = calculate(&ScenarioInput {
            revenue: dec!(100000),
            deductible_charges: dec!(20000),
            gross_salary: dec!(20000),
            household: HouseholdProfile::single(),
        });
        let married = calculate(&ScenarioInput {
            revenue: dec!(100000),
            deductible_charges: dec!(20000),
            gross_salary: dec!(20000),
            household: HouseholdProfile::new(FamilyStatus::Married, dec!(2), dec!(0)),
        });

        assert!(married.income_tax_on_salary <= single.income_tax_on_salary);
        assert_eq!(married.income_tax_on_salary, dec!(0));
        assert_eq!(married.total_levies, dec!(34525.00));
        assert_eq!(married.net_disposable, dec!(45475.00));
    }

    #[test]
    fn levies_and_disposable_reconcile_with_company_result() {
        for (revenue, charges, gross, parts) in [
            (dec!(100000), dec!(20000), dec!(20000), dec!(2)),
            (dec!(200000), dec!(50000), dec!(60000), dec!(1)),
            (dec!(150000), dec!(40000), dec!(0), dec!(1)),
        ] {
            let scenario = calculate(&ScenarioInput {
                revenue,
                deductible_charges: charges,
                gross_salary: gross,
                household: HouseholdProfile::new(FamilyStatus::Married, parts, dec!(0)),
            });

            assert_eq!(
                scenario.total_levies + scenario.net_disposable
                    - scenario.income_tax_on_salary,
                revenue - charges,
                "identity broken for gross {gross}"
            );
        }
    }

    #[test]
    fn other_income_raises_taxable_income_only() {
        let base = ScenarioInput {
            revenue: dec!(200000),
            deductible_charges: dec!(50000),
            gross_salary: dec!(60000),
            household: HouseholdProfile::single(),
        };
        let with_other = ScenarioInput {
            household: HouseholdProfile::new(FamilyStatus::Single, dec!(1), dec!(10000)),
            ..base.clone()
        };

        let plain = calculate(&base);
        let augmented = calculate(&with_other);

        assert_eq!(augmented.taxable_income, plain.taxable_income + dec!(10000));
        assert!(augmented.income_tax_on_salary > plain.income_tax_on_salary);
        assert_eq!(augmented.net_dividends, plain.net_dividends);
    }
}
