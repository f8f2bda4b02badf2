//! Yearly replacement cost calculation.
//!
//! Values the cost of replacing affected employees who move to part-time,
//! resign, or change jobs. The three terms share the same scaling (batch
//! units, annual salary, lower replacement-cost bound) and are each rounded
//! up independently before summation; the sum is never re-rounded. This
//! leaf-rounding convention is load-bearing for reproducing known outputs.

use rust_decimal::Decimal;

use crate::config::PolicyConstants;
use crate::models::{AuditStep, ReplacementCosts};

use super::rounding::round_up;

/// The result of the replacement cost calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ReplacementCostResult {
    /// The per-term breakdown and total.
    pub costs: ReplacementCosts,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the yearly replacement cost for part-time moves, resignations,
/// and job changes.
///
/// Each term is `roundUp(units * percentage/100 [* reduction/100]
/// * annualSalary * replacementCostLower)`; the part-time term additionally
/// scales by the hours-reduction assumption. `replacement_cost_higher` is
/// configured but not consumed here.
pub fn calculate_replacement_cost(
    replacement_units: u64,
    avg_monthly_salary: Decimal,
    policy: &PolicyConstants,
    step_number: u32,
) -> ReplacementCostResult {
    let hundred = Decimal::new(100, 0);
    let units = Decimal::from(replacement_units);
    let annual_salary = avg_monthly_salary * Decimal::new(12, 0);
    let cost_factor = annual_salary * policy.replacement_cost_lower;

    let part_time = round_up(
        units
            * (policy.part_time_percentage / hundred)
            * (policy.reduction_assumption / hundred)
            * cost_factor,
    );
    let resignation = round_up(units * (policy.resigning_percentage / hundred) * cost_factor);
    let job_change = round_up(units * (policy.job_change_percentage / hundred) * cost_factor);

    let total = part_time + resignation + job_change;

    let audit_step = AuditStep {
        step_number,
        rule_id: "replacement_cost".to_string(),
        rule_name: "Yearly Replacement Cost".to_string(),
        formula: "sum of roundUp(units * pct/100 [* reduction/100] * annualSalary \
                  * replacementCostLower) per term"
            .to_string(),
        input: serde_json::json!({
            "replacement_units": replacement_units,
            "annual_salary": annual_salary.normalize().to_string(),
            "part_time_percentage": policy.part_time_percentage.normalize().to_string(),
            "reduction_assumption": policy.reduction_assumption.normalize().to_string(),
            "resigning_percentage": policy.resigning_percentage.normalize().to_string(),
            "job_change_percentage": policy.job_change_percentage.normalize().to_string(),
            "replacement_cost_lower": policy.replacement_cost_lower.normalize().to_string()
        }),
        output: serde_json::json!({
            "part_time": part_time.normalize().to_string(),
            "resignation": resignation.normalize().to_string(),
            "job_change": job_change.normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "part-time {} + resignation {} + job change {} = {}",
            part_time.normalize(),
            resignation.normalize(),
            job_change.normalize(),
            total.normalize()
        ),
    };

    ReplacementCostResult {
        costs: ReplacementCosts {
            part_time,
            resignation,
            job_change,
            total,
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

    #[test]
    fn test_canonical_fixture_breakdown() {
        let result =
            calculate_replacement_cost(4, dec("3750"), &PolicyConstants::default(), 4);

        // Annual salary 45000, cost factor 22500 per unit-percentage point.
        assert_eq!(result.costs.part_time, dec("5400"));
        assert_eq!(result.costs.resignation, dec("9000"));
        assert_eq!(result.costs.job_change, dec("16200"));
        assert_eq!(result.costs.total, dec("30600"));
    }

    #[test]
    fn test_total_is_exact_sum_of_pre_rounded_terms() {
        // Annual salary 12012 makes every term fractional before rounding:
        // part-time 360.36 -> 361, resignation 600.6 -> 601,
        // job change 1081.08 -> 1082. Rounding once after summing would give
        // ceil(2042.04) = 2043 instead.
        let result =
            calculate_replacement_cost(1, dec("1001"), &PolicyConstants::default(), 4);

        assert_eq!(result.costs.part_time, dec("361"));
        assert_eq!(result.costs.resignation, dec("601"));
        assert_eq!(result.costs.job_change, dec("1082"));
        assert_eq!(result.costs.total, dec("2044"));
        assert_eq!(
            result.costs.total,
            result.costs.part_time + result.costs.resignation + result.costs.job_change
        );
    }

    #[test]
    fn test_zero_units_cost_nothing() {
        let result =
            calculate_replacement_cost(0, dec("3750"), &PolicyConstants::default(), 4);

        assert_eq!(result.costs.part_time, Decimal::ZERO);
        assert_eq!(result.costs.resignation, Decimal::ZERO);
        assert_eq!(result.costs.job_change, Decimal::ZERO);
        assert_eq!(result.costs.total, Decimal::ZERO);
    }

    #[test]
    fn test_zero_salary_costs_nothing() {
        let result = calculate_replacement_cost(4, dec("0"), &PolicyConstants::default(), 4);
        assert_eq!(result.costs.total, Decimal::ZERO);
    }

    #[test]
    fn test_higher_bound_does_not_change_the_result() {
        let default_policy = PolicyConstants::default();
        let widened = PolicyConstants {
            replacement_cost_higher: dec("10"),
            ..default_policy.clone()
        };

        let base = calculate_replacement_cost(4, dec("3750"), &default_policy, 4);
        let with_widened_band = calculate_replacement_cost(4, dec("3750"), &widened, 4);

        assert_eq!(base.costs, with_widened_band.costs);
    }

    #[test]
    fn test_lower_bound_scales_every_term() {
        let policy = PolicyConstants {
            replacement_cost_lower: dec("1"),
            ..PolicyConstants::default()
        };
        let result = calculate_replacement_cost(4, dec("3750"), &policy, 4);

        assert_eq!(result.costs.part_time, dec("10800"));
        assert_eq!(result.costs.resignation, dec("18000"));
        assert_eq!(result.costs.job_change, dec("32400"));
    }

    #[test]
    fn test_audit_step_reports_all_terms() {
        let result =
            calculate_replacement_cost(4, dec("3750"), &PolicyConstants::default(), 4);

        assert_eq!(result.audit_step.rule_id, "replacement_cost");
        assert_eq!(
            result.audit_step.output["part_time"].as_str().unwrap(),
            "5400"
        );
        assert_eq!(result.audit_step.output["total"].as_str().unwrap(), "30600");
    }
}
