//! Sick-day cost calculation.
//!
//! Values the difference between the symptomatic and baseline sick-day
//! rates, scaled by the share of sick days attributable to symptoms, the
//! salary per working day, and the affected population.

use rust_decimal::Decimal;

use crate::config::PolicyConstants;
use crate::models::AuditStep;

use super::assumptions::DerivedAssumptions;
use super::rounding::round_up;

/// The result of the sick-day cost calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct SickDayCostResult {
    /// The yearly cost of sick days attributable to untreated symptoms.
    pub cost: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the yearly cost of sick days due to untreated symptoms.
///
/// Formula: `roundUp((with - without) * pctSickDueToSymptoms/100
/// * salaryPerWorkingDay * population)`.
///
/// The difference can be negative when the supplied sick-leave figures
/// invert the relationship; no special case is applied, since the final
/// rounding clamps the cost at zero.
pub fn calculate_sick_day_cost(
    assumptions: &DerivedAssumptions,
    transition_population: u64,
    policy: &PolicyConstants,
    step_number: u32,
) -> SickDayCostResult {
    let difference =
        assumptions.sick_days_with_symptoms - assumptions.sick_days_without_symptoms;
    let adjusted = difference * (policy.percent_sick_due_to_symptoms / Decimal::new(100, 0));
    let per_employee = adjusted * assumptions.salary_per_working_day;
    let cost = round_up(per_employee * Decimal::from(transition_population));

    let audit_step = AuditStep {
        step_number,
        rule_id: "sick_day_cost".to_string(),
        rule_name: "Sick-Day Cost".to_string(),
        formula: "roundUp((sickDaysWith - sickDaysWithout) * pctSickDueToSymptoms/100 \
                  * salaryPerWorkingDay * population)"
            .to_string(),
        input: serde_json::json!({
            "sick_days_with_symptoms": assumptions.sick_days_with_symptoms.to_string(),
            "sick_days_without_symptoms": assumptions.sick_days_without_symptoms.to_string(),
            "percent_sick_due_to_symptoms":
                policy.percent_sick_due_to_symptoms.normalize().to_string(),
            "salary_per_working_day":
                assumptions.salary_per_working_day.normalize().to_string(),
            "transition_population": transition_population
        }),
        output: serde_json::json!({
            "sick_day_difference": difference.to_string(),
            "adjusted_days_per_employee": adjusted.to_string(),
            "cost_per_employee": per_employee.to_string(),
            "cost": cost.normalize().to_string()
        }),
        reasoning: format!(
            "{} additional symptom sick days per employee, {}% attributable, across {} employees",
            difference.round_dp(2).normalize(),
            policy.percent_sick_due_to_symptoms.normalize(),
            transition_population
        ),
    };

    SickDayCostResult { cost, audit_step }
}
