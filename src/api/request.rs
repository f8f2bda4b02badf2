//! Request types for the ROI Estimation Engine API.
//!
//! The request mirrors the five raw inputs. Conversion into the domain type
//! is where the boundary clamps live: percentages are clamped to [0, 100]
//! and negative monetary values are floored to zero, so the engine only
//! ever sees pre-clamped input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RawInputs, clamp_percent};

/// The body of an estimate request. Any field may be omitted or null; an
/// incomplete set of inputs yields an undefined outcome rather than an
/// error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Total number of employees in the organization.
    #[serde(default)]
    pub num_employees: Option<u32>,
    /// Percentage of employees who are female.
    #[serde(default)]
    pub percent_female: Option<Decimal>,
    /// Percentage of female employees over 40.
    #[serde(default)]
    pub percent_female_over_40: Option<Decimal>,
    /// Average monthly gross salary of a female employee over 40.
    #[serde(default)]
    pub avg_monthly_salary: Option<Decimal>,
    /// Average yearly sick-leave days for female employees over 40.
    #[serde(default)]
    pub avg_sick_leave_days: Option<Decimal>,
}

impl From<EstimateRequest> for RawInputs {
    fn from(request: EstimateRequest) -> Self {
        RawInputs {
            num_employees: request.num_employees,
            percent_female: request.percent_female.map(clamp_percent),
            percent_female_over_40: request.percent_female_over_40.map(clamp_percent),
            avg_monthly_salary: request
                .avg_monthly_salary
                .map(|salary| salary.max(Decimal::ZERO)),
            avg_sick_leave_days: request
                .avg_sick_leave_days
                .map(|days| days.max(Decimal::ZERO)),
        }
    }
}
