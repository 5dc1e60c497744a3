//! Iterative inversion of the salary chain: from a desired net salary
//! after income tax back to the gross salary the company must pay.
//!
//! The forward chain (contributions, allowance, progressive income tax)
//! has no closed-form inverse, so the solver starts from a heuristic
//! gross estimate and rescales it by the ratio of desired to achieved
//! net until the two agree within a fixed tolerance.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{ratio_as_percent, round_half_up};
use crate::calculations::schedules;
use crate::models::{FiscalSchedule, HouseholdProfile};

/// First gross estimate as a multiple of the desired net.
const INITIAL_GROSS_FACTOR: Decimal = dec!(1.8);
/// Accept the estimate once achieved and desired net differ by less
/// than this many euros.
const CONVERGENCE_TOLERANCE: Decimal = dec!(100);
/// Rescaling factor applied when a round yields a non-positive net.
const FALLBACK_RATIO: Decimal = dec!(1.1);
const MAX_ITERATIONS: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetToGrossError {
    #[error("desired net salary must be positive, got {0}")]
    NonPositiveDesiredNet(Decimal),
}

/// Gross salary estimate and the cost breakdown around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetToGrossResult {
    /// The net salary that was asked for.
    pub desired_net: Decimal,
    pub gross_salary: Decimal,
    /// Net salary after contributions and income tax at the final estimate.
    pub net_salary: Decimal,
    pub social_contributions: Decimal,
    pub income_tax: Decimal,
    /// Gross salary plus employer contributions.
    pub employer_cost: Decimal,
    /// Contributions as a percentage of gross.
    pub social_charge_rate: Decimal,
    /// Contributions plus income tax as a percentage of gross.
    pub total_withholding_rate: Decimal,
    pub iterations: u32,
    /// False when the tolerance was not reached within the iteration
    /// budget; the result is then the last estimate.
    pub converged: bool,
}

/// Fixed-point solver for the gross salary behind a desired net.
pub struct NetToGrossSolver<'a> {
    schedule: &'a FiscalSchedule,
}

impl<'a> NetToGrossSolver<'a> {
    pub fn new(schedule: &'a FiscalSchedule) -> Self {
        Self { schedule }
    }

    pub fn calculate(
        &self,
        desired_net_salary: Decimal,
        household: &HouseholdProfile,
    ) -> Result<NetToGrossResult, NetToGrossError> {
        if desired_net_salary <= Decimal::ZERO {
            return Err(NetToGrossError::NonPositiveDesiredNet(desired_net_salary));
        }

        let mut gross = round_half_up(desired_net_salary * INITIAL_GROSS_FACTOR);
        let mut iterations = 0;
        let mut converged = false;
        let round;

        loop {
            iterations += 1;
            let current = self.evaluate(gross, household);

            let gap = (current.achieved_net - desired_net_salary).abs();
            if gap < CONVERGENCE_TOLERANCE {
                converged = true;
                round = current;
                break;
            }
            if iterations >= MAX_ITERATIONS {
                round = current;
                break;
            }

            let ratio = if current.achieved_net > Decimal::ZERO {
                desired_net_salary / current.achieved_net
            } else {
                FALLBACK_RATIO
            };
            gross = round_half_up(gross * ratio);
        }

        if !converged {
            warn!(
                desired = %desired_net_salary,
                achieved = %round.achieved_net,
                "net-to-gross solver did not converge, returning last estimate"
            );
        }

        let employer_cost =
            round_half_up(gross + schedules::employer_contributions(self.schedule, gross));

        Ok(NetToGrossResult {
            desired_net: desired_net_salary,
            gross_salary: gross,
            net_salary: round.achieved_net,
            social_contributions: round.contributions,
            income_tax: round.income_tax,
            employer_cost,
            social_charge_rate: ratio_as_percent(round.contributions, gross),
            total_withholding_rate: ratio_as_percent(
                round.contributions + round.income_tax,
                gross,
            ),
            iterations,
            converged,
        })
    }

    /// Forward pass: net salary achieved by a given gross.
    fn evaluate(&self, gross: Decimal, household: &HouseholdProfile) -> SolverRound {
        let contributions = schedules::dirigeant_social_contributions(self.schedule, gross);
        let net_before_tax = gross - contributions;
        let allowance = round_half_up(
            (net_before_tax * self.schedule.salary_allowance_rate)
                .min(self.schedule.salary_allowance_cap),
        );
        let taxable =
            (net_before_tax - allowance).max(Decimal::ZERO) + household.other_income;
        let income_tax = schedules::personal_income_tax(self.schedule, taxable, household.parts);
        let achieved_net = round_half_up(net_before_tax - income_tax);

        SolverRound {
            contributions,
            income_tax,
            achieved_net,
        }
    }
}

struct SolverRound {
    contributions: Decimal,
    income_tax: Decimal,
    achieved_net: Decimal,
}
