//! Derived-assumption calculation.
//!
//! This module back-solves the per-computation assumptions the cost stages
//! consume: the replacement batch units, the salary per working day, and the
//! two sick-day baselines (with and without untreated symptoms). The sick-day
//! baselines are deliberately left unrounded; rounding is deferred to the
//! cost stage so integer error does not compound early in the chain.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::PolicyConstants;
use crate::models::AuditStep;

use super::rounding::round_up;

/// Working days assumed per year when annualizing a monthly salary.
pub const WORKING_DAYS_PER_YEAR: u32 = 220;

/// Batch size used to normalize the affected population into replacement
/// units.
pub const REPLACEMENT_BATCH_SIZE: u32 = 25;

/// Share of the affected population with symptoms, from the epidemiological
/// weighting behind the sick-day decomposition.
fn symptomatic_share() -> Decimal {
    Decimal::new(44, 2)
}

/// Sick-day multiplier for the symptomatic, untreated condition.
fn symptom_uplift() -> Decimal {
    Decimal::new(157, 2)
}

/// Share of the affected population without symptoms.
fn asymptomatic_share() -> Decimal {
    Decimal::new(66, 2)
}

/// Denominator of the sick-day back-solve: `0.44*1.57 + 0.66`. A nonzero
/// constant, so the division below needs no guard.
fn sick_day_weighting() -> Decimal {
    symptomatic_share() * symptom_uplift() + asymptomatic_share()
}

/// The assumptions derived from raw inputs and policy constants.
///
/// Recomputed from scratch on every cycle; never persisted and never mixed
/// back into the policy record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedAssumptions {
    /// The affected population normalized into batches of
    /// [`REPLACEMENT_BATCH_SIZE`], the common scaling factor for every
    /// replacement-cost term.
    pub replacement_units: u64,
    /// Salary per working day: annualized monthly salary over a 220-day
    /// working year, rounded up.
    pub salary_per_working_day: Decimal,
    /// Baseline yearly sick days without untreated symptoms (unrounded).
    pub sick_days_without_symptoms: Decimal,
    /// Projected yearly sick days with untreated symptoms (unrounded).
    pub sick_days_with_symptoms: Decimal,
}

/// The result of deriving assumptions, including the audit step.
#[derive(Debug, Clone)]
pub struct AssumptionsResult {
    /// The derived assumptions.
    pub assumptions: DerivedAssumptions,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives the per-computation assumptions from raw inputs and policy.
///
/// - `replacement units = roundUp(population / 25)`
/// - `salary per working day = roundUp(avgSalary * 12 / 220)`
/// - `sick days without symptoms = avgSickLeave / (0.44*1.57 + 0.66)`
/// - `sick days with symptoms = sick days without symptoms * 1.57`
///
/// The two sick-day quantities are exact divisions, not rounded here.
pub fn derive_assumptions(
    transition_population: u64,
    avg_monthly_salary: Decimal,
    avg_sick_leave_days: Decimal,
    policy: &PolicyConstants,
    step_number: u32,
) -> AssumptionsResult {
    let batch = Decimal::from(REPLACEMENT_BATCH_SIZE);
    let months = Decimal::new(12, 0);
    let working_days = Decimal::from(WORKING_DAYS_PER_YEAR);

    let units = round_up(Decimal::from(transition_population) / batch);
    // Integral and at most transition_population after the division by 25.
    let replacement_units = units.to_u64().unwrap_or(transition_population);

    let salary_per_working_day = round_up(avg_monthly_salary * months / working_days);

    let sick_days_without_symptoms = avg_sick_leave_days / sick_day_weighting();
    let sick_days_with_symptoms = sick_days_without_symptoms * symptom_uplift();

    let audit_step = AuditStep {
        step_number,
        rule_id: "derived_assumptions".to_string(),
        rule_name: "Assumption Derivation".to_string(),
        formula: "units = roundUp(population/25); salary/day = roundUp(salary*12/220); \
                  sickDaysWithout = sickLeave/(0.44*1.57+0.66); sickDaysWith = without*1.57"
            .to_string(),
        input: serde_json::json!({
            "transition_population": transition_population,
            "avg_monthly_salary": avg_monthly_salary.normalize().to_string(),
            "avg_sick_leave_days": avg_sick_leave_days.normalize().to_string(),
            "replacement_cost_band": [
                policy.replacement_cost_lower.normalize().to_string(),
                policy.replacement_cost_higher.normalize().to_string()
            ]
        }),
        output: serde_json::json!({
            "replacement_units": replacement_units,
            "salary_per_working_day": salary_per_working_day.normalize().to_string(),
            "sick_days_without_symptoms": sick_days_without_symptoms.to_string(),
            "sick_days_with_symptoms": sick_days_with_symptoms.to_string()
        }),
        reasoning: format!(
            "{} affected employees form {} replacement units; salary per working day is {}",
            transition_population,
            replacement_units,
            salary_per_working_day.normalize()
        ),
    };

    AssumptionsResult {
        assumptions: DerivedAssumptions {
            replacement_units,
            salary_per_working_day,
            sick_days_without_symptoms,
            sick_days_with_symptoms,
        },
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn derive_fixture() -> DerivedAssumptions {
        derive_assumptions(100, dec("3750"), dec("25"), &PolicyConstants::default(), 2)
            .assumptions
    }

    #[test]
    fn test_canonical_fixture_units_and_salary() {
        let assumptions = derive_fixture();
        assert_eq!(assumptions.replacement_units, 4);
        // 3750 * 12 / 220 = 204.545..., rounded up.
        assert_eq!(assumptions.salary_per_working_day, dec("205"));
    }

    #[test]
    fn test_sick_day_baselines_use_exact_division() {
        let assumptions = derive_fixture();
        let expected_without = dec("25") / (dec("0.44") * dec("1.57") + dec("0.66"));

        assert_eq!(assumptions.sick_days_without_symptoms, expected_without);
        assert_eq!(
            assumptions.sick_days_with_symptoms,
            expected_without * dec("1.57")
        );
        // Deferred rounding: the baselines are not integers.
        assert_ne!(
            assumptions.sick_days_without_symptoms.fract(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_with_symptoms_exceeds_without_for_positive_leave() {
        let assumptions = derive_fixture();
        assert!(assumptions.sick_days_with_symptoms > assumptions.sick_days_without_symptoms);
    }

    #[test]
    fn test_partial_batch_rounds_up_to_a_full_unit() {
        let result =
            derive_assumptions(26, dec("3750"), dec("25"), &PolicyConstants::default(), 2);
        assert_eq!(result.assumptions.replacement_units, 2);
    }

    #[test]
    fn test_single_affected_employee_is_one_unit() {
        let result =
            derive_assumptions(1, dec("3750"), dec("25"), &PolicyConstants::default(), 2);
        assert_eq!(result.assumptions.replacement_units, 1);
    }

    #[test]
    fn test_zero_population_gives_zero_units() {
        let result =
            derive_assumptions(0, dec("3750"), dec("25"), &PolicyConstants::default(), 2);
        assert_eq!(result.assumptions.replacement_units, 0);
    }

    #[test]
    fn test_zero_sick_leave_gives_zero_baselines() {
        let result =
            derive_assumptions(100, dec("3750"), dec("0"), &PolicyConstants::default(), 2);
        assert_eq!(
            result.assumptions.sick_days_without_symptoms,
            Decimal::ZERO
        );
        assert_eq!(result.assumptions.sick_days_with_symptoms, Decimal::ZERO);
    }

    #[test]
    fn test_salary_per_day_exact_division_is_not_bumped() {
        // 2200 * 12 / 220 = 120 exactly.
        let result =
            derive_assumptions(100, dec("2200"), dec("25"), &PolicyConstants::default(), 2);
        assert_eq!(result.assumptions.salary_per_working_day, dec("120"));
    }

    #[test]
    fn test_audit_step_surfaces_replacement_cost_band() {
        let result =
            derive_assumptions(100, dec("3750"), dec("25"), &PolicyConstants::default(), 2);
        let band = &result.audit_step.input["replacement_cost_band"];
        assert_eq!(band[0].as_str().unwrap(), "0.5");
        assert_eq!(band[1].as_str().unwrap(), "2");
    }
}
