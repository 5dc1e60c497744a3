//! Plain-language recommendations derived from an optimized scenario.
//!
//! The wording is aimed at the dirigeant, not at an accountant, so the
//! messages stay in French and avoid schedule jargon.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::scenario::FiscalScenario;

/// Overall levy rate under which the split is considered well optimized.
const COMFORTABLE_LEVY_RATE: Decimal = dec!(35);
/// Overall levy rate above which professional advice is suggested.
const HEAVY_LEVY_RATE: Decimal = dec!(45);
/// Revenue above which a holding structure becomes worth considering.
const HOLDING_REVENUE_THRESHOLD: Decimal = dec!(100000);
/// Gross salary under which retirement rights start to suffer.
const RETIREMENT_SALARY_THRESHOLD: Decimal = dec!(45000);

/// Builds the list of recommendations for an optimized scenario.
///
/// The first entry always qualifies the overall levy rate; further
/// entries are appended when the revenue or salary levels call for them.
pub fn recommendations(scenario: &FiscalScenario, revenue: Decimal) -> Vec<String> {
    let mut advice = Vec::new();

    if scenario.overall_levy_rate < COMFORTABLE_LEVY_RATE {
        advice.push(
            "Votre répartition est bien optimisée : le taux de prélèvement global reste \
             contenu."
                .to_string(),
        );
    } else if scenario.overall_levy_rate < HEAVY_LEVY_RATE {
        advice.push(
            "Il reste une marge d'optimisation : pensez aux dispositifs d'épargne retraite \
             (PER) ou à l'épargne salariale pour alléger la pression fiscale."
                .to_string(),
        );
    } else {
        advice.push(
            "Le taux de prélèvement global est élevé : un rendez-vous avec un \
             expert-comptable est recommandé pour revoir la structure de rémunération."
                .to_string(),
        );
    }

    if revenue > HOLDING_REVENUE_THRESHOLD {
        advice.push(
            "Avec ce niveau de chiffre d'affaires, une structure de holding peut faciliter \
             la capitalisation des bénéfices."
                .to_string(),
        );
    }

    if scenario.gross_salary < RETIREMENT_SALARY_THRESHOLD {
        advice.push(
            "Un salaire brut limité réduit vos droits à la retraite : vérifiez la \
             validation de vos trimestres."
                .to_string(),
        );
    }

    advice
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::scenario::{ScenarioCalculator, ScenarioInput};
    use crate::models::{FiscalSchedule, HouseholdProfile};

    fn scenario(revenue: rust_decimal::Decimal, charges: rust_decimal::Decimal, gross: rust_decimal::Decimal) -> FiscalScenario {
        let schedule = FiscalSchedule::current();
        ScenarioCalculator::new(&schedule).calculate(&ScenarioInput {
            revenue,
            deductible_charges: charges,
            gross_salary: gross,
            household: HouseholdProfile::single(),
        })
    }

    #[test]
    fn comfortable_rate_with_high_revenue() {
        let scenario = scenario(dec!(200000), dec!(50000), dec!(60000));
        assert_eq!(scenario.overall_levy_rate, dec!(34.49));

        let advice = recommendations(&scenario, dec!(200000));

        assert_eq!(advice.len(), 2);
        assert!(advice[0].contains("bien optimisée"));
        assert!(advice[1].contains("holding"));
    }

    #[test]
    fn moderate_rate_suggests_savings_vehicles() {
        let scenario = scenario(dec!(100000), dec!(0), dec!(50000));
        assert_eq!(scenario.overall_levy_rate, dec!(44.76));

        let advice = recommendations(&scenario, dec!(100000));

        assert_eq!(advice.len(), 1);
        assert!(advice[0].contains("PER"));
    }

    #[test]
    fn heavy_rate_suggests_professional_advice() {
        let scenario = scenario(dec!(100000), dec!(0), dec!(80000));
        assert_eq!(scenario.overall_levy_rate, dec!(49.27));

        let advice = recommendations(&scenario, dec!(100000));

        assert_eq!(advice.len(), 1);
        assert!(advice[0].contains("expert-comptable"));
    }

    #[test]
    fn low_salary_flags_retirement_rights() {
        let scenario = scenario(dec!(80000), dec!(20000), dec!(30000));

        let advice = recommendations(&scenario, dec!(80000));

        assert_eq!(advice.len(), 2);
        assert!(advice[1].contains("retraite"));
    }
}
