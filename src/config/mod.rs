//! Configuration for the ROI Estimation Engine.
//!
//! Policy constants are immutable, process-wide configuration: they are read
//! by the calculation stages but never mutated during a computation. A whole
//! record can be swapped out for scenario testing.

mod loader;
mod types;

pub use loader::load_policy;
pub use types::PolicyConstants;
