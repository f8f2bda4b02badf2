//! Application state for the ROI Estimation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PolicyConstants;

/// Shared application state.
///
/// Holds the policy constants injected at startup; they are immutable for
/// the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    /// The active policy constants.
    policy: Arc<PolicyConstants>,
}

impl AppState {
    /// Creates a new application state with the given policy constants.
    pub fn new(policy: PolicyConstants) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns a reference to the active policy constants.
    pub fn policy(&self) -> &PolicyConstants {
        &self.policy
    }
}
