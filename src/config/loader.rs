//! Policy loading functionality.
//!
//! This module loads the [`PolicyConstants`] record from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PolicyConstants;

/// Loads and validates policy constants from a YAML file.
///
/// # Arguments
///
/// * `path` - Path to the policy file (e.g., "./config/policy.yaml")
///
/// # Returns
///
/// Returns the validated [`PolicyConstants`] on success, or an error if the
/// file is missing, contains invalid YAML, or holds an out-of-range constant.
///
/// # Example
///
/// ```no_run
/// use roi_engine::config::load_policy;
///
/// let policy = load_policy("./config/policy.yaml")?;
/// # Ok::<(), roi_engine::error::EngineError>(())
/// ```
pub fn load_policy<P: AsRef<Path>>(path: P) -> EngineResult<PolicyConstants> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    let policy: PolicyConstants =
        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

    policy.validate()?;
    Ok(policy)
}
