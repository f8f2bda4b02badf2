//! Transition population estimation.
//!
//! This module estimates how many employees are undergoing the menopause
//! transition, from the head count and the two demographic percentages.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::AuditStep;

use super::rounding::round_up;

/// The result of estimating the transition population, including the audit
/// step.
#[derive(Debug, Clone)]
pub struct TransitionPopulationResult {
    /// The estimated number of affected employees.
    pub population: u64,
    /// The audit step recording this estimate.
    pub audit_step: AuditStep,
}

/// Estimates the number of employees undergoing the menopause transition.
///
/// Formula: `roundUp(numEmployees * percentFemale/100 * percentOver40/100)`.
/// The estimate always rounds up, never down, and is floored at zero. Both
/// percentages are assumed to be pre-clamped to [0, 100] at the boundary.
///
/// # Example
///
/// ```
/// use roi_engine::calculation::estimate_transition_population;
/// use rust_decimal::Decimal;
///
/// let result = estimate_transition_population(
///     500,
///     Decimal::new(50, 0),
///     Decimal::new(40, 0),
///     1,
/// );
/// assert_eq!(result.population, 100);
/// ```
pub fn estimate_transition_population(
    num_employees: u32,
    percent_female: Decimal,
    percent_female_over_40: Decimal,
    step_number: u32,
) -> TransitionPopulationResult {
    let hundred = Decimal::new(100, 0);
    let estimate = Decimal::from(num_employees) * (percent_female / hundred)
        * (percent_female_over_40 / hundred);
    let rounded = round_up(estimate);

    // Bounded by the head count: both percentage factors are at most 1.
    let population = rounded.to_u64().unwrap_or(u64::from(num_employees));

    let audit_step = AuditStep {
        step_number,
        rule_id: "transition_population".to_string(),
        rule_name: "Transition Population Estimate".to_string(),
        formula: "roundUp(numEmployees * percentFemale/100 * percentFemaleOver40/100)"
            .to_string(),
        input: serde_json::json!({
            "num_employees": num_employees,
            "percent_female": percent_female.normalize().to_string(),
            "percent_female_over_40": percent_female_over_40.normalize().to_string()
        }),
        output: serde_json::json!({
            "unrounded_estimate": estimate.normalize().to_string(),
            "transition_population": population
        }),
        reasoning: format!(
            "{} employees, {}% female, {}% of those over 40 gives {} affected employees",
            num_employees,
            percent_female.normalize(),
            percent_female_over_40.normalize(),
            population
        ),
    };

    TransitionPopulationResult {
        population,
        audit_step,
    }
}
