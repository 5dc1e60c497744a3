//! Discrete search for the best salary/dividend split.
//!
//! The search sweeps a fixed grid of salary fractions of the pre-tax
//! result, evaluates a full [`FiscalScenario`] at each point and keeps
//! the one with the highest net disposable income. Two reference
//! scenarios, all-dividends and maximum-salary, are always reported
//! alongside the winner so the caller can show the spread.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::advisory;
use crate::calculations::common::round_half_up;
use crate::calculations::scenario::{FiscalScenario, ScenarioCalculator, ScenarioInput};
use crate::models::{FiscalSchedule, HouseholdProfile};

/// Highest salary fraction of the pre-tax result the grid explores.
const MAX_SALARY_FRACTION: Decimal = dec!(0.80);
/// Grid step between candidate fractions.
const FRACTION_STEP: Decimal = dec!(0.05);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptimalSplitError {
    #[error(
        "pre-tax result is not positive (revenue {revenue}, charges {deductible_charges}); \
         nothing to split"
    )]
    NonPositivePreTaxResult {
        revenue: Decimal,
        deductible_charges: Decimal,
    },
    #[error(
        "net salary floor {requested} exceeds the maximum net salary {maximum} \
         reachable from the pre-tax result"
    )]
    InfeasibleNetSalaryFloor {
        requested: Decimal,
        maximum: Decimal,
    },
}

/// Parameters of an optimization request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalSplitInput {
    pub revenue: Decimal,
    pub deductible_charges: Decimal,
    pub household: HouseholdProfile,
    /// Minimum acceptable net salary. When set, only splits whose net
    /// salary reaches it are considered.
    pub net_salary_floor: Option<Decimal>,
}

/// Outcome of the grid search, echoing the company figures it was run on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub revenue: Decimal,
    pub deductible_charges: Decimal,
    /// Revenue minus charges, the amount being split.
    pub pre_tax_result: Decimal,
    pub optimal: FiscalScenario,
    /// Reference scenario with the entire result paid as salary.
    pub full_salary: FiscalScenario,
    /// Reference scenario with the entire result distributed as dividends.
    pub full_dividends: FiscalScenario,
    pub recommendations: Vec<String>,
}

/// Grid search over salary fractions of the pre-tax result.
pub struct OptimalSplitSearch<'a> {
    schedule: &'a FiscalSchedule,
}

impl<'a> OptimalSplitSearch<'a> {
    pub fn new(schedule: &'a FiscalSchedule) -> Self {
        Self { schedule }
    }

    pub fn calculate(
        &self,
        input: &OptimalSplitInput,
    ) -> Result<OptimizationResult, OptimalSplitError> {
        let pre_tax_result = input.revenue - input.deductible_charges;
        if pre_tax_result <= Decimal::ZERO {
            return Err(OptimalSplitError::NonPositivePreTaxResult {
                revenue: input.revenue,
                deductible_charges: input.deductible_charges,
            });
        }

        let calculator = ScenarioCalculator::new(self.schedule);
        let scenario_at = |gross_salary: Decimal| {
            calculator.calculate(&ScenarioInput {
                revenue: input.revenue,
                deductible_charges: input.deductible_charges,
                gross_salary,
                household: input.household.clone(),
            })
        };

        let full_dividends = scenario_at(Decimal::ZERO);
        let full_salary = scenario_at(round_half_up(pre_tax_result * MAX_SALARY_FRACTION));

        let mut candidates = Vec::new();
        let mut fraction = Decimal::ZERO;
        while fraction <= MAX_SALARY_FRACTION {
            candidates.push(scenario_at(round_half_up(pre_tax_result * fraction)));
            fraction += FRACTION_STEP;
        }

        if let Some(floor) = input.net_salary_floor {
            let net_rate = Decimal::ONE - self.schedule.dirigeant_contribution_rate;
            let maximum = round_half_up(pre_tax_result * net_rate);
            if maximum < floor {
                return Err(OptimalSplitError::InfeasibleNetSalaryFloor {
                    requested: floor,
                    maximum,
                });
            }
            candidates.retain(|scenario| scenario.net_salary >= floor);
            if candidates.is_empty() {
                // No grid point clears the floor; evaluate the exact gross
                // salary that does. Rounded up so the resulting net salary
                // never lands below the floor.
                let required_gross = (floor / net_rate)
                    .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::ToPositiveInfinity);
                candidates.push(scenario_at(required_gross));
            }
        }

        // First-found wins ties, so lower salary fractions are preferred
        // at equal disposable income.
        let mut remaining = candidates.into_iter();
        let mut best = remaining
            .next()
            .expect("grid always yields at least one candidate");
        for scenario in remaining {
            if scenario.net_disposable > best.net_disposable {
                best = scenario;
            }
        }

        debug!(
            gross_salary = %best.gross_salary,
            net_disposable = %best.net_disposable,
            "grid sweep complete"
        );

        let recommendations = advisory::recommendations(&best, input.revenue);

        Ok(OptimizationResult {
            revenue: input.revenue,
            deductible_charges: input.deductible_charges,
            pre_tax_result,
            optimal: best,
            full_salary,
            full_dividends,
            recommendations,
        })
    }
}
