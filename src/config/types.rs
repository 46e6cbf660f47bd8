//! Policy configuration types.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Deployment-wide policy values from `policy.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentPolicy {
    /// Human-readable name of this policy set.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// Currency symbol used for display formatting.
    pub currency_symbol: String,
    /// Statutory ceiling for capped education-fund bases.
    pub statutory_ceiling: Decimal,
    /// How many days a generated offer document remains valid.
    pub offer_validity_days: u32,
}

/// The percentage choices a deployment offers in its UI, from
/// `options.yaml`.
///
/// Presentation-layer configuration: the calculator accepts any in-range
/// percentage whether or not it appears in these lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentageOptions {
    /// Pension contribution rates offered.
    pub pension_pct: Vec<Decimal>,
    /// Education-fund contribution rates offered.
    pub education_fund_pct: Vec<Decimal>,
    /// Placement agency fee rates offered.
    pub placement_agency_fee_pct: Vec<Decimal>,
}

/// The complete policy configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Deployment policy values.
    policy: DeploymentPolicy,
    /// Percentage options for presentation layers.
    options: PercentageOptions,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts, validating
    /// every value.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] when the statutory ceiling
    /// is not positive, the validity period is zero, or any percentage
    /// option falls outside [0, 100].
    pub fn new(policy: DeploymentPolicy, options: PercentageOptions) -> EngineResult<Self> {
        if policy.statutory_ceiling <= Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                parameter: "statutory_ceiling".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if policy.offer_validity_days == 0 {
            return Err(EngineError::InvalidPolicy {
                parameter: "offer_validity_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        validate_options("pension_pct", &options.pension_pct)?;
        validate_options("education_fund_pct", &options.education_fund_pct)?;
        validate_options("placement_agency_fee_pct", &options.placement_agency_fee_pct)?;

        Ok(Self { policy, options })
    }

    /// Returns the deployment policy values.
    pub fn policy(&self) -> &DeploymentPolicy {
        &self.policy
    }

    /// Returns the percentage options.
    pub fn options(&self) -> &PercentageOptions {
        &self.options
    }

    /// Returns the statutory ceiling.
    pub fn statutory_ceiling(&self) -> Decimal {
        self.policy.statutory_ceiling
    }

    /// Returns the currency symbol for display formatting.
    pub fn currency_symbol(&self) -> &str {
        &self.policy.currency_symbol
    }

    /// Returns the offer validity period in days.
    pub fn offer_validity_days(&self) -> u32 {
        self.policy.offer_validity_days
    }
}

fn validate_options(parameter: &str, options: &[Decimal]) -> EngineResult<()> {
    for option in options {
        if *option < Decimal::ZERO || *option > Decimal::ONE_HUNDRED {
            return Err(EngineError::InvalidPolicy {
                parameter: format!("options.{}", parameter),
                message: format!("option {} is outside [0, 100]", option),
            });
        }
    }
    Ok(())
}
