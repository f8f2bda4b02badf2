//! HTTP API module for the ROI Estimation Engine.
//!
//! This module is the thin embedding host around the pure calculation
//! pipeline: it collects the raw inputs, applies the boundary clamps, and
//! returns the estimate.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EstimateRequest;
pub use response::ApiError;
pub use state::AppState;
