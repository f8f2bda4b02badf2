//! Raw organizational inputs supplied by the host.
//!
//! Every field is optional: an unset field means the value has not been
//! entered yet, and the engine reports an undefined outcome until all five
//! are present. Percentages are clamped to [0, 100] at the boundary (request
//! conversion or the setter helpers here); the calculation stages assume
//! already-clamped values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Clamps a percentage to the [0, 100] range.
///
/// # Example
///
/// ```
/// use roi_engine::models::clamp_percent;
/// use rust_decimal::Decimal;
///
/// assert_eq!(clamp_percent(Decimal::new(150, 0)), Decimal::new(100, 0));
/// assert_eq!(clamp_percent(Decimal::new(-5, 0)), Decimal::ZERO);
/// assert_eq!(clamp_percent(Decimal::new(40, 0)), Decimal::new(40, 0));
/// ```
pub fn clamp_percent(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::new(100, 0))
}

/// The five raw inputs behind one ROI estimate.
///
/// `Default` yields a fully unset record; [`RawInputs::session_defaults`]
/// returns the prefilled values a session starts with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawInputs {
    /// Total number of employees in the organization.
    pub num_employees: Option<u32>,
    /// Percentage of employees who are female, in [0, 100].
    pub percent_female: Option<Decimal>,
    /// Percentage of female employees over 40, in [0, 100].
    pub percent_female_over_40: Option<Decimal>,
    /// Average monthly gross salary of a female employee over 40.
    pub avg_monthly_salary: Option<Decimal>,
    /// Average yearly sick-leave days for female employees over 40.
    pub avg_sick_leave_days: Option<Decimal>,
}

impl RawInputs {
    /// Returns the default-populated inputs a session starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use roi_engine::models::RawInputs;
    ///
    /// let inputs = RawInputs::session_defaults();
    /// assert!(inputs.is_complete());
    /// assert_eq!(inputs.num_employees, Some(500));
    /// ```
    pub fn session_defaults() -> Self {
        Self {
            num_employees: Some(500),
            percent_female: Some(Decimal::new(50, 0)),
            percent_female_over_40: Some(Decimal::new(40, 0)),
            avg_monthly_salary: Some(Decimal::new(3750, 0)),
            avg_sick_leave_days: Some(Decimal::new(25, 0)),
        }
    }

    /// Returns true iff every one of the five inputs is present.
    ///
    /// This is the only validation the engine performs: range checks on
    /// percentages happen at the boundary, before values reach the engine.
    pub fn is_complete(&self) -> bool {
        self.num_employees.is_some()
            && self.percent_female.is_some()
            && self.percent_female_over_40.is_some()
            && self.avg_monthly_salary.is_some()
            && self.avg_sick_leave_days.is_some()
    }

    /// Sets the female-employee percentage, clamping to [0, 100].
    pub fn set_percent_female(&mut self, value: Option<Decimal>) {
        self.percent_female = value.map(clamp_percent);
    }

    /// Sets the over-40 percentage, clamping to [0, 100].
    pub fn set_percent_female_over_40(&mut self, value: Option<Decimal>) {
        self.percent_female_over_40 = value.map(clamp_percent);
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
    fn test_default_is_fully_unset() {
        let inputs = RawInputs::default();
        assert!(!inputs.is_complete());
        assert_eq!(inputs.num_employees, None);
        assert_eq!(inputs.percent_female, None);
        assert_eq!(inputs.percent_female_over_40, None);
        assert_eq!(inputs.avg_monthly_salary, None);
        assert_eq!(inputs.avg_sick_leave_days, None);
    }

    #[test]
    fn test_session_defaults_are_complete() {
        let inputs = RawInputs::session_defaults();
        assert!(inputs.is_complete());
        assert_eq!(inputs.percent_female, Some(dec("50")));
        assert_eq!(inputs.percent_female_over_40, Some(dec("40")));
        assert_eq!(inputs.avg_monthly_salary, Some(dec("3750")));
        assert_eq!(inputs.avg_sick_leave_days, Some(dec("25")));
    }

    #[test]
    fn test_any_single_unset_field_makes_inputs_incomplete() {
        let complete = RawInputs::session_defaults();

        let variants = [
            RawInputs {
                num_employees: None,
                ..complete.clone()
            },
            RawInputs {
                percent_female: None,
                ..complete.clone()
            },
            RawInputs {
                percent_female_over_40: None,
                ..complete.clone()
            },
            RawInputs {
                avg_monthly_salary: None,
                ..complete.clone()
            },
            RawInputs {
                avg_sick_leave_days: None,
                ..complete.clone()
            },
        ];

        for inputs in variants {
            assert!(!inputs.is_complete(), "expected incomplete: {:?}", inputs);
        }
    }

    #[test]
    fn test_clamp_percent_bounds() {
        assert_eq!(clamp_percent(dec("150")), dec("100"));
        assert_eq!(clamp_percent(dec("-10")), dec("0"));
        assert_eq!(clamp_percent(dec("100")), dec("100"));
        assert_eq!(clamp_percent(dec("0")), dec("0"));
        assert_eq!(clamp_percent(dec("33.3")), dec("33.3"));
    }

    #[test]
    fn test_setters_clamp() {
        let mut inputs = RawInputs::default();
        inputs.set_percent_female(Some(dec("250")));
        inputs.set_percent_female_over_40(Some(dec("-40")));

        assert_eq!(inputs.percent_female, Some(dec("100")));
        assert_eq!(inputs.percent_female_over_40, Some(dec("0")));
    }

    #[test]
    fn test_setters_accept_unset() {
        let mut inputs = RawInputs::session_defaults();
        inputs.set_percent_female(None);
        assert_eq!(inputs.percent_female, None);
        assert!(!inputs.is_complete());
    }

    #[test]
    fn test_serde_round_trip() {
        let inputs = RawInputs::session_defaults();
        let json = serde_json::to_string(&inputs).unwrap();
        let back: RawInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(inputs, back);
    }

    #[test]
    fn test_unset_fields_serialize_as_null() {
        let inputs = RawInputs::default();
        let json = serde_json::to_string(&inputs).unwrap();
        assert!(json.contains("\"num_employees\":null"));
    }
}
