//! Estimate result models for the ROI Estimation Engine.
//!
//! This module contains the [`EstimateResult`] envelope and its associated
//! structures: the derived values of one computation, the replacement-cost
//! breakdown, the guarded ROI figure, and the audit trace recording every
//! stage decision.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The yearly replacement cost, broken down into its three terms.
///
/// Each term is rounded up independently before summation; `total` is the
/// exact sum of the three pre-rounded components and is never re-rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementCosts {
    /// Cost of employees reducing to part-time hours.
    pub part_time: Decimal,
    /// Cost of employees resigning.
    pub resignation: Decimal,
    /// Cost of employees changing jobs internally.
    pub job_change: Decimal,
    /// Sum of the three components.
    pub total: Decimal,
}

/// The return-on-investment figure, present only when the program has a
/// positive cost basis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiEstimate {
    /// ROI rounded to whole percentage points (e.g. 704 for 704%).
    pub percent: Decimal,
    /// `percent` re-expressed as a ratio: an integer when exact, otherwise
    /// exactly one decimal place (e.g. 7.0).
    pub ratio: Decimal,
}

/// The fully-determined derived values of one complete computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedValues {
    /// Estimated number of employees undergoing the menopause transition.
    pub transition_population: u64,
    /// Yearly cost of sick days attributable to untreated symptoms.
    pub sick_day_cost: Decimal,
    /// Yearly replacement cost breakdown.
    pub replacement: ReplacementCosts,
    /// Total yearly cost of untreated symptoms (sick days + replacement).
    pub total_yearly_cost: Decimal,
    /// Yearly cost of the wellness program subscription.
    pub program_cost: Decimal,
    /// Yearly savings from running the program: total yearly cost minus
    /// program cost. Negative when the program costs more than it saves.
    pub total_savings: Decimal,
    /// The ROI figure; `None` when the program cost is zero.
    pub roi: Option<RoiEstimate>,
}

/// The outcome of one computation cycle.
///
/// Incomplete input yields `Undefined` with no fields at all, so a mix of
/// computed and missing values cannot be observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "values", rename_all = "snake_case")]
pub enum EstimateOutcome {
    /// At least one raw input was unset; every derived field is undefined.
    Undefined,
    /// All inputs were present; every derived field is populated.
    Computed(DerivedValues),
}

impl EstimateOutcome {
    /// Returns true when the outcome is undefined.
    pub fn is_undefined(&self) -> bool {
        matches!(self, EstimateOutcome::Undefined)
    }

    /// Returns the derived values when the outcome was computed.
    pub fn values(&self) -> Option<&DerivedValues> {
        match self {
            EstimateOutcome::Undefined => None,
            EstimateOutcome::Computed(values) => Some(values),
        }
    }
}

/// A single step in the audit trace recording a stage decision.
///
/// Each step captures the formula, input, output, and reasoning for one
/// pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the stage that was applied.
    pub rule_id: String,
    /// The human-readable name of the stage.
    pub rule_name: String,
    /// The formula applied by this stage.
    pub formula: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the result.
    pub reasoning: String,
}

/// A warning generated during a computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for one computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of stage steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during the computation.
    pub warnings: Vec<AuditWarning>,
    /// The total computation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of one computation cycle.
///
/// The outcome and its derived values are deterministic for identical
/// inputs; the identifier, timestamp, and trace duration are per-run
/// metadata.
///
/// # Example
///
/// ```
/// use roi_engine::models::{AuditTrace, EstimateOutcome, EstimateResult};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let result = EstimateResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     outcome: EstimateOutcome::Undefined,
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// assert!(result.outcome.is_undefined());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Unique identifier for this computation.
    pub calculation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// The outcome of the computation.
    pub outcome: EstimateOutcome,
    /// Complete audit trace of stage decisions.
    pub audit_trace: AuditTrace,
}
