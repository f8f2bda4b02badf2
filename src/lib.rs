//! ROI Estimation Engine for workplace wellness programs.
//!
//! This crate computes a deterministic return-on-investment estimate for an
//! employer-sponsored menopause wellness program from five organizational
//! inputs (headcount, two demographic percentages, average monthly salary,
//! and a yearly sick-leave baseline).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
