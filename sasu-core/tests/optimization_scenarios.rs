//! End-to-end checks of the optimization engine on realistic company
//! profiles, exercised through the public crate surface.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use sasu_core::calculations::{gross_for_net_salary, optimize_compensation};
use sasu_core::{FamilyStatus, HouseholdProfile, OptimalSplitError, OptimalSplitInput};

fn input(
    revenue: rust_decimal::Decimal,
    charges: rust_decimal::Decimal,
    household: HouseholdProfile,
) -> OptimalSplitInput {
    OptimalSplitInput {
        revenue,
        deductible_charges: charges,
        household,
        net_salary_floor: None,
    }
}

#[test]
fn consulting_company_lands_on_a_mixed_split() {
    let result = optimize_compensation(&input(
        dec!(200000),
        dec!(50000),
        HouseholdProfile::new(FamilyStatus::Single, dec!(1), dec!(10000)),
    ))
    .unwrap();

    assert_eq!(result.optimal.gross_salary, dec!(105000.00));
    assert_eq!(result.optimal.net_disposable, dec!(84350.00));

    // The mixed split strictly beats both pure strategies.
    assert_eq!(result.full_salary.net_disposable, dec!(83850.00));
    assert_eq!(result.full_dividends.net_disposable, dec!(81725.00));
    assert!(result.optimal.net_disposable > result.full_salary.net_disposable);
    assert!(result.optimal.net_disposable > result.full_dividends.net_disposable);

    assert!(!result.recommendations.is_empty());
}

#[test]
fn loss_making_company_is_rejected_up_front() {
    let error = optimize_compensation(&input(
        dec!(40000),
        dec!(55000),
        HouseholdProfile::single(),
    ))
    .unwrap_err();

    assert_eq!(
        error,
        OptimalSplitError::NonPositivePreTaxResult {
            revenue: dec!(40000),
            deductible_charges: dec!(55000),
        }
    );
}

#[test]
fn salary_floor_feasibility_depends_on_the_pre_tax_result() {
    // 70000 of pre-tax result caps the net salary at 38500.
    let mut too_high = input(dec!(120000), dec!(50000), HouseholdProfile::single());
    too_high.net_salary_floor = Some(dec!(40000));

    assert_eq!(
        optimize_compensation(&too_high).unwrap_err(),
        OptimalSplitError::InfeasibleNetSalaryFloor {
            requested: dec!(40000),
            maximum: dec!(38500.00),
        }
    );

    let mut reachable = input(dec!(120000), dec!(50000), HouseholdProfile::single());
    reachable.net_salary_floor = Some(dec!(35000));

    let result = optimize_compensation(&reachable).unwrap();
    assert!(result.optimal.net_salary >= dec!(35000));
    assert_eq!(result.optimal.net_salary, dec!(35000.00));
}

#[test]
fn salary_floor_costs_disposable_income() {
    let free = optimize_compensation(&input(
        dec!(120000),
        dec!(50000),
        HouseholdProfile::single(),
    ))
    .unwrap();

    let mut constrained_input = input(dec!(120000), dec!(50000), HouseholdProfile::single());
    constrained_input.net_salary_floor = Some(dec!(35000));
    let constrained = optimize_compensation(&constrained_input).unwrap();

    assert_eq!(free.optimal.net_disposable, dec!(40390.00));
    assert_eq!(constrained.optimal.net_disposable, dec!(38786.37));
    assert!(constrained.optimal.net_disposable <= free.optimal.net_disposable);
}

#[test]
fn net_to_gross_round_trip_for_a_common_salary_target() {
    let result = gross_for_net_salary(dec!(30000), &HouseholdProfile::single()).unwrap();

    assert!(result.converged);
    assert_eq!(result.iterations, 2);
    assert_eq!(result.gross_salary, dec!(57852.93));
    assert_eq!(result.net_salary, dec!(29911.36));
    assert_eq!(result.employer_cost, dec!(82151.16));
    assert!((result.net_salary - dec!(30000)).abs() < dec!(100));
}
