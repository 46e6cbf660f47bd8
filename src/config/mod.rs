//! Policy configuration loading and management.
//!
//! This module provides functionality to load deployment policy from YAML
//! files: the statutory ceiling, the percentage choices a deployment offers
//! in its UI, the currency symbol and the offer validity period.
//!
//! # Example
//!
//! ```no_run
//! use rewards_engine::config::PolicyLoader;
//!
//! let policy = PolicyLoader::load("./config/default").unwrap();
//! println!("Ceiling: {}", policy.statutory_ceiling());
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{DeploymentPolicy, PercentageOptions, PolicyConfig};
