//! Fiscal calculation modules for the SASU compensation optimizer.
//!
//! Everything in here is pure computation: the schedule evaluators, the
//! scenario calculator that composes them, the discrete optimal-split
//! search, the iterative net-to-gross solver and the advisory generator.
//! No module touches storage or performs I/O; each invocation is
//! independent and safe to run concurrently with any other.

pub mod advisory;
pub mod common;
pub mod net_to_gross;
pub mod optimal_split;
pub mod scenario;
pub mod schedules;

use rust_decimal::Decimal;

use crate::models::{FiscalSchedule, HouseholdProfile};

pub use net_to_gross::{NetToGrossError, NetToGrossResult, NetToGrossSolver};
pub use optimal_split::{
    OptimalSplitError, OptimalSplitInput, OptimalSplitSearch, OptimizationResult,
};
pub use scenario::{FiscalScenario, ScenarioCalculator, ScenarioInput};

/// Runs the optimal-split search against the schedule currently in effect.
pub fn optimize_compensation(
    input: &OptimalSplitInput,
) -> Result<OptimizationResult, OptimalSplitError> {
    let schedule = FiscalSchedule::current();
    OptimalSplitSearch::new(&schedule).calculate(input)
}

/// Inverts a desired annual net salary into the gross salary required,
/// against the schedule currently in effect.
pub fn gross_for_net_salary(
    desired_net_salary: Decimal,
    household: &HouseholdProfile,
) -> Result<NetToGrossResult, NetToGrossError> {
    let schedule = FiscalSchedule::current();
    NetToGrossSolver::new(&schedule).calculate(desired_net_salary, household)
}
