//! Calculation logic for the ROI Estimation Engine.
//!
//! This module contains the pipeline stages that turn raw organizational
//! inputs into a return-on-investment estimate: transition-population
//! estimation, assumption derivation, sick-day and replacement cost
//! calculation, cost aggregation, program cost, and the guarded ROI figure,
//! plus the `compute` entry point that runs them in order.

mod aggregate;
mod assumptions;
mod engine;
mod population;
mod replacement_cost;
mod roi;
mod rounding;
mod sick_day_cost;

pub use aggregate::{
    ProgramCostResult, TotalCostResult, calculate_program_cost, calculate_total_yearly_cost,
};
pub use assumptions::{
    AssumptionsResult, DerivedAssumptions, REPLACEMENT_BATCH_SIZE, WORKING_DAYS_PER_YEAR,
    derive_assumptions,
};
pub use engine::compute;
pub use population::{TransitionPopulationResult, estimate_transition_population};
pub use replacement_cost::{ReplacementCostResult, calculate_replacement_cost};
pub use roi::{RoiResult, calculate_roi};
pub use rounding::round_up;
pub use sick_day_cost::{SickDayCostResult, calculate_sick_day_cost};
