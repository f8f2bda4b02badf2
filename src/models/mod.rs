//! Core data models for the ROI Estimation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod inputs;
mod result;

pub use inputs::{RawInputs, clamp_percent};
pub use result::{
    AuditStep, AuditTrace, AuditWarning, DerivedValues, EstimateOutcome, EstimateResult,
    ReplacementCosts, RoiEstimate,
};
