//! ROI calculation.
//!
//! Combines the total yearly cost and the program cost into the final
//! return-on-investment figure. The figure is first rounded to whole
//! percentage points, then re-expressed as a ratio with at most one decimal
//! place; rounding the integer percent first avoids double-rounding
//! divergence in the decimal view.

use rust_decimal::Decimal;

use crate::models::{AuditStep, RoiEstimate};

/// Rounds to the nearest integer, breaking ties toward positive infinity:
/// 0.5 rounds to 1 and -0.5 rounds to 0.
fn round_half_up(value: Decimal) -> Decimal {
    (value + Decimal::new(5, 1)).floor()
}

/// The result of the ROI calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct RoiResult {
    /// The ROI figure; `None` when the program has no positive cost basis.
    pub roi: Option<RoiEstimate>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the ROI from the total yearly cost and the program cost.
///
/// When `program_cost <= 0` (which includes a zero affected population) the
/// ROI is undefined: the division is never performed and no misleading
/// figure is reported. Otherwise
/// `percent = round((totalYearlyCost - programCost) / programCost * 100)`
/// to the nearest whole percentage point, and the ratio view is `percent /
/// 100` re-expressed as an integer when exact or with exactly one decimal
/// digit. Both roundings break ties toward positive infinity, so a raw
/// -0.5% reports as 0, not -1.
pub fn calculate_roi(
    total_yearly_cost: Decimal,
    program_cost: Decimal,
    step_number: u32,
) -> RoiResult {
    if program_cost <= Decimal::ZERO {
        let audit_step = AuditStep {
            step_number,
            rule_id: "roi".to_string(),
            rule_name: "Return on Investment".to_string(),
            formula: "round((totalYearlyCost - programCost) / programCost * 100)".to_string(),
            input: serde_json::json!({
                "total_yearly_cost": total_yearly_cost.normalize().to_string(),
                "program_cost": program_cost.normalize().to_string()
            }),
            output: serde_json::json!({ "roi": null }),
            reasoning: "Program cost is not positive; ROI has no cost basis and is undefined"
                .to_string(),
        };

        return RoiResult {
            roi: None,
            audit_step,
        };
    }

    let hundred = Decimal::new(100, 0);
    let ten = Decimal::new(10, 0);
    let percent =
        round_half_up((total_yearly_cost - program_cost) / program_cost * hundred).normalize();

    let exact = percent % hundred == Decimal::ZERO;
    let ratio = if exact {
        (percent / hundred).normalize()
    } else {
        let mut rounded = round_half_up(percent / hundred * ten) / ten;
        rounded.rescale(1);
        rounded
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "roi".to_string(),
        rule_name: "Return on Investment".to_string(),
        formula: "round((totalYearlyCost - programCost) / programCost * 100)".to_string(),
        input: serde_json::json!({
            "total_yearly_cost": total_yearly_cost.normalize().to_string(),
            "program_cost": program_cost.normalize().to_string()
        }),
        output: serde_json::json!({
            "percent": percent.to_string(),
            "ratio": ratio.to_string()
        }),
        reasoning: format!(
            "Savings of {} against a program cost of {} give {}% return",
            (total_yearly_cost - program_cost).normalize(),
            program_cost.normalize(),
            percent
        ),
    };

    RoiResult {
        roi: Some(RoiEstimate { percent, ratio }),
        audit_step,
    }
}
