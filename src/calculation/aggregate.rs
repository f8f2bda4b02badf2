//! Cost aggregation.
//!
//! Sums the component costs into the total yearly cost of untreated
//! symptoms, and computes the yearly program cost from the subscription
//! price and the affected population.

use rust_decimal::Decimal;

use crate::config::PolicyConstants;
use crate::models::AuditStep;

use super::rounding::round_up;

/// The result of the total-cost aggregation, including the audit step.
#[derive(Debug, Clone)]
pub struct TotalCostResult {
    /// The total yearly cost of untreated symptoms.
    pub total_yearly_cost: Decimal,
    /// The audit step recording this aggregation.
    pub audit_step: AuditStep,
}

/// Sums the sick-day and replacement costs into the total yearly cost.
///
/// Both inputs are already integers, so the `roundUp` here is an arithmetic
/// no-op; it is kept so every monetary figure leaves the pipeline under the
/// same integerization contract.
pub fn calculate_total_yearly_cost(
    sick_day_cost: Decimal,
    replacement_cost: Decimal,
    step_number: u32,
) -> TotalCostResult {
    let total_yearly_cost = round_up(sick_day_cost + replacement_cost);

    let audit_step = AuditStep {
        step_number,
        rule_id: "total_yearly_cost".to_string(),
        rule_name: "Total Yearly Cost".to_string(),
        formula: "roundUp(sickDayCost + replacementCost)".to_string(),
        input: serde_json::json!({
            "sick_day_cost": sick_day_cost.normalize().to_string(),
            "replacement_cost": replacement_cost.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_yearly_cost": total_yearly_cost.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} = {}",
            sick_day_cost.normalize(),
            replacement_cost.normalize(),
            total_yearly_cost.normalize()
        ),
    };

    TotalCostResult {
        total_yearly_cost,
        audit_step,
    }
}

/// The result of the program-cost calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ProgramCostResult {
    /// The yearly cost of the wellness program subscription.
    pub program_cost: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the yearly program cost:
/// `roundUp(monthlySubscription * population * 12)`.
pub fn calculate_program_cost(
    transition_population: u64,
    policy: &PolicyConstants,
    step_number: u32,
) -> ProgramCostResult {
    let program_cost = round_up(
        policy.monthly_subscription
            * Decimal::from(transition_population)
            * Decimal::new(12, 0),
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "program_cost".to_string(),
        rule_name: "Yearly Program Cost".to_string(),
        formula: "roundUp(monthlySubscription * population * 12)".to_string(),
        input: serde_json::json!({
            "monthly_subscription": policy.monthly_subscription.normalize().to_string(),
            "transition_population": transition_population
        }),
        output: serde_json::json!({
            "program_cost": program_cost.normalize().to_string()
        }),
        reasoning: format!(
            "{} per employee per month for {} employees over 12 months",
            policy.monthly_subscription.normalize(),
            transition_population
        ),
    };

    ProgramCostResult {
        program_cost,
        audit_step,
    }
}
