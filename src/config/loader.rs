//! Policy configuration loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading deployment
//! policy from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{DeploymentPolicy, PercentageOptions, PolicyConfig};

/// Loads and provides access to deployment policy.
///
/// The `PolicyLoader` reads YAML configuration files from a directory and
/// exposes typed accessors for the statutory ceiling, display settings and
/// the percentage options offered to presentation layers.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── policy.yaml   # Ceiling, currency symbol, offer validity
/// └── options.yaml  # Percentage choices offered in the UI
/// ```
///
/// # Example
///
/// ```no_run
/// use rewards_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/default").unwrap();
/// println!("Policy: {}", loader.policy().name);
/// println!("Ceiling: {}", loader.statutory_ceiling());
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    config: PolicyConfig,
}

impl PolicyLoader {
    /// Loads policy configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing
    /// ([`EngineError::ConfigNotFound`]), contains invalid YAML
    /// ([`EngineError::ConfigParseError`]), or holds an unusable value
    /// ([`EngineError::InvalidPolicy`]).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rewards_engine::config::PolicyLoader;
    ///
    /// let loader = PolicyLoader::load("./config/default")?;
    /// # Ok::<(), rewards_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<DeploymentPolicy>(&policy_path)?;

        let options_path = path.join("options.yaml");
        let options = Self::load_yaml::<PercentageOptions>(&options_path)?;

        let config = PolicyConfig::new(policy, options)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the deployment policy values.
    pub fn policy(&self) -> &DeploymentPolicy {
        self.config.policy()
    }

    /// Returns the percentage options offered to presentation layers.
    pub fn options(&self) -> &PercentageOptions {
        self.config.options()
    }

    /// Returns the statutory ceiling.
    pub fn statutory_ceiling(&self) -> Decimal {
        self.config.statutory_ceiling()
    }
}
