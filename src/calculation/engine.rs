//! The computation pipeline.
//!
//! [`compute`] is the single operation the engine exposes: one full,
//! synchronous top-to-bottom run over an immutable snapshot of the raw
//! inputs. Validation happens exactly once at the top; every later stage
//! assumes complete input. No state survives between calls, so identical
//! inputs always produce identical derived values.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::config::PolicyConstants;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, DerivedValues, EstimateOutcome, EstimateResult,
    RawInputs,
};

use super::aggregate::{calculate_program_cost, calculate_total_yearly_cost};
use super::assumptions::derive_assumptions;
use super::population::estimate_transition_population;
use super::replacement_cost::calculate_replacement_cost;
use super::roi::calculate_roi;
use super::sick_day_cost::calculate_sick_day_cost;

/// Runs one full computation cycle over a snapshot of the raw inputs.
///
/// Pure, deterministic, and total: it never panics or returns an error for
/// any well-typed input. Incomplete inputs yield
/// [`EstimateOutcome::Undefined`] for every derived field at once; a zero
/// program cost leaves the other fields computed and only the ROI undefined.
///
/// # Example
///
/// ```
/// use roi_engine::calculation::compute;
/// use roi_engine::config::PolicyConstants;
/// use roi_engine::models::RawInputs;
///
/// let result = compute(&RawInputs::session_defaults(), &PolicyConstants::default());
/// let values = result.outcome.values().unwrap();
/// assert_eq!(values.transition_population, 100);
///
/// let undefined = compute(&RawInputs::default(), &PolicyConstants::default());
/// assert!(undefined.outcome.is_undefined());
/// ```
pub fn compute(inputs: &RawInputs, policy: &PolicyConstants) -> EstimateResult {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();

    let outcome = match (
        inputs.num_employees,
        inputs.percent_female,
        inputs.percent_female_over_40,
        inputs.avg_monthly_salary,
        inputs.avg_sick_leave_days,
    ) {
        (
            Some(num_employees),
            Some(percent_female),
            Some(percent_female_over_40),
            Some(avg_monthly_salary),
            Some(avg_sick_leave_days),
        ) => {
            let mut step_number: u32 = 1;

            let population_result = estimate_transition_population(
                num_employees,
                percent_female,
                percent_female_over_40,
                step_number,
            );
            let population = population_result.population;
            steps.push(population_result.audit_step);
            step_number += 1;

            let assumptions_result = derive_assumptions(
                population,
                avg_monthly_salary,
                avg_sick_leave_days,
                policy,
                step_number,
            );
            let assumptions = assumptions_result.assumptions;
            steps.push(assumptions_result.audit_step);
            step_number += 1;

            if assumptions.sick_days_with_symptoms < assumptions.sick_days_without_symptoms {
                warnings.push(AuditWarning {
                    code: "INVERTED_SICK_DAY_BASELINES".to_string(),
                    message: "projected symptomatic sick days fell below the baseline; \
                              the sick-day cost clamps to zero"
                        .to_string(),
                    severity: "low".to_string(),
                });
            }

            let sick_day_result =
                calculate_sick_day_cost(&assumptions, population, policy, step_number);
            steps.push(sick_day_result.audit_step);
            step_number += 1;

            let replacement_result = calculate_replacement_cost(
                assumptions.replacement_units,
                avg_monthly_salary,
                policy,
                step_number,
            );
            steps.push(replacement_result.audit_step);
            step_number += 1;

            let total_result = calculate_total_yearly_cost(
                sick_day_result.cost,
                replacement_result.costs.total,
                step_number,
            );
            steps.push(total_result.audit_step);
            step_number += 1;

            let program_result = calculate_program_cost(population, policy, step_number);
            steps.push(program_result.audit_step);
            step_number += 1;

            let roi_result = calculate_roi(
                total_result.total_yearly_cost,
                program_result.program_cost,
                step_number,
            );
            steps.push(roi_result.audit_step);

            EstimateOutcome::Computed(DerivedValues {
                transition_population: population,
                sick_day_cost: sick_day_result.cost,
                replacement: replacement_result.costs,
                total_yearly_cost: total_result.total_yearly_cost,
                program_cost: program_result.program_cost,
                total_savings: total_result.total_yearly_cost - program_result.program_cost,
                roi: roi_result.roi,
            })
        }
        _ => {
            steps.push(incomplete_input_step(inputs));
            EstimateOutcome::Undefined
        }
    };

    EstimateResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        outcome,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

/// Builds the single audit step recorded when validation fails.
fn incomplete_input_step(inputs: &RawInputs) -> AuditStep {
    let mut missing: Vec<&str> = Vec::new();
    if inputs.num_employees.is_none() {
        missing.push("num_employees");
    }
    if inputs.percent_female.is_none() {
        missing.push("percent_female");
    }
    if inputs.percent_female_over_40.is_none() {
        missing.push("percent_female_over_40");
    }
    if inputs.avg_monthly_salary.is_none() {
        missing.push("avg_monthly_salary");
    }
    if inputs.avg_sick_leave_days.is_none() {
        missing.push("avg_sick_leave_days");
    }

    AuditStep {
        step_number: 1,
        rule_id: "input_validation".to_string(),
        rule_name: "Input Validation".to_string(),
        formula: "all five raw inputs must be present".to_string(),
        input: serde_json::json!({ "missing": missing }),
        output: serde_json::json!({ "complete": false }),
        reasoning: format!(
            "Unset inputs: {}; every derived field is undefined",
            missing.join(", ")
        ),
    }
}
