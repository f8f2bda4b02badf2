//! Policy constant types for the ROI Estimation Engine.
//!
//! This module contains the strongly-typed policy record that is
//! deserialized from a YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// The fixed policy constants behind the ROI estimate.
///
/// These eleven values parameterize the assumption-derivation and cost
/// stages. They are not user-editable inputs: they are injected once by the
/// host and stay constant for the lifetime of a computation, though a whole
/// record may be swapped for sensitivity analysis.
///
/// [`PolicyConstants::default`] provides the documented product values.
///
/// # Example
///
/// ```
/// use roi_engine::config::PolicyConstants;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConstants::default();
/// assert_eq!(policy.monthly_subscription, Decimal::new(99, 1)); // 9.9
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PolicyConstants {
    /// Percentage of affected women experiencing severe symptoms.
    ///
    /// Configured for sensitivity analysis; not consumed by the current
    /// formula set.
    pub percent_severe_symptoms: Decimal,
    /// Average duration of the menopause transition, in years.
    ///
    /// Configured for sensitivity analysis; not consumed by the current
    /// formula set.
    pub avg_transition_years: Decimal,
    /// Percentage of affected employees who resign.
    pub resigning_percentage: Decimal,
    /// Percentage of affected employees who move to part-time work.
    pub part_time_percentage: Decimal,
    /// Assumed percentage reduction in hours for part-time moves.
    pub reduction_assumption: Decimal,
    /// Percentage of affected employees who change jobs internally.
    pub job_change_percentage: Decimal,
    /// Lower bound of the replacement-cost multiplier (fraction of annual
    /// salary). This is the bound the replacement formulas consume.
    pub replacement_cost_lower: Decimal,
    /// Upper bound of the replacement-cost multiplier.
    ///
    /// Kept as a configured-but-inactive parameter: no formula consumes it
    /// yet, but dropping it would lose the upper end of the sensitivity band.
    pub replacement_cost_higher: Decimal,
    /// Percentage of sick days attributable to untreated symptoms.
    pub percent_sick_due_to_symptoms: Decimal,
    /// Monthly program subscription price per affected employee.
    pub monthly_subscription: Decimal,
    /// Baseline average yearly sick days for the affected demographic.
    pub avg_sick_days: Decimal,
}

impl Default for PolicyConstants {
    fn default() -> Self {
        Self {
            percent_severe_symptoms: Decimal::new(75, 0),
            avg_transition_years: Decimal::new(85, 1),
            resigning_percentage: Decimal::new(10, 0),
            part_time_percentage: Decimal::new(24, 0),
            reduction_assumption: Decimal::new(25, 0),
            job_change_percentage: Decimal::new(18, 0),
            replacement_cost_lower: Decimal::new(5, 1),
            replacement_cost_higher: Decimal::new(2, 0),
            percent_sick_due_to_symptoms: Decimal::new(30, 0),
            monthly_subscription: Decimal::new(99, 1),
            avg_sick_days: Decimal::new(25, 0),
        }
    }
}

impl PolicyConstants {
    /// Checks that every constant is within its valid range.
    ///
    /// Percentage fields must lie in [0, 100]; all other fields must be
    /// non-negative. Returns the first violation found.
    pub fn validate(&self) -> EngineResult<()> {
        let percentages = [
            ("percent_severe_symptoms", self.percent_severe_symptoms),
            ("resigning_percentage", self.resigning_percentage),
            ("part_time_percentage", self.part_time_percentage),
            ("reduction_assumption", self.reduction_assumption),
            ("job_change_percentage", self.job_change_percentage),
            (
                "percent_sick_due_to_symptoms",
                self.percent_sick_due_to_symptoms,
            ),
        ];
        for (field, value) in percentages {
            if value < Decimal::ZERO || value > Decimal::new(100, 0) {
                return Err(EngineError::InvalidPolicy {
                    field: field.to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }

        let non_negative = [
            ("avg_transition_years", self.avg_transition_years),
            ("replacement_cost_lower", self.replacement_cost_lower),
            ("replacement_cost_higher", self.replacement_cost_higher),
            ("monthly_subscription", self.monthly_subscription),
            ("avg_sick_days", self.avg_sick_days),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidPolicy {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }

        Ok(())
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
    fn test_default_policy_matches_documented_values() {
        let policy = PolicyConstants::default();
        assert_eq!(policy.percent_severe_symptoms, dec("75"));
        assert_eq!(policy.avg_transition_years, dec("8.5"));
        assert_eq!(policy.resigning_percentage, dec("10"));
        assert_eq!(policy.part_time_percentage, dec("24"));
        assert_eq!(policy.reduction_assumption, dec("25"));
        assert_eq!(policy.job_change_percentage, dec("18"));
        assert_eq!(policy.replacement_cost_lower, dec("0.5"));
        assert_eq!(policy.replacement_cost_higher, dec("2"));
        assert_eq!(policy.percent_sick_due_to_symptoms, dec("30"));
        assert_eq!(policy.monthly_subscription, dec("9.9"));
        assert_eq!(policy.avg_sick_days, dec("25"));
    }

    #[test]
    fn test_default_policy_validates() {
        assert!(PolicyConstants::default().validate().is_ok());
    }

    #[test]
    fn test_percentage_above_100_is_rejected() {
        let policy = PolicyConstants {
            resigning_percentage: dec("101"),
            ..PolicyConstants::default()
        };

        match policy.validate() {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "resigning_percentage");
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_percentage_is_rejected() {
        let policy = PolicyConstants {
            percent_sick_due_to_symptoms: dec("-1"),
            ..PolicyConstants::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_negative_subscription_is_rejected() {
        let policy = PolicyConstants {
            monthly_subscription: dec("-9.9"),
            ..PolicyConstants::default()
        };

        match policy.validate() {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "monthly_subscription");
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_deserializes_from_yaml() {
        let yaml = r#"
percent_severe_symptoms: "75"
avg_transition_years: "8.5"
resigning_percentage: "10"
part_time_percentage: "24"
reduction_assumption: "25"
job_change_percentage: "18"
replacement_cost_lower: "0.5"
replacement_cost_higher: "2"
percent_sick_due_to_symptoms: "30"
monthly_subscription: "9.9"
avg_sick_days: "25"
"#;

        let policy: PolicyConstants = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy, PolicyConstants::default());
    }

    #[test]
    fn test_replacement_cost_band_is_ordered_by_default() {
        let policy = PolicyConstants::default();
        assert!(policy.replacement_cost_lower <= policy.replacement_cost_higher);
    }
}
