//! Derived metrics models.
//!
//! This module contains the [`ComputedMetrics`] type capturing everything
//! derived from a single compensation slice, and the [`ComparisonResult`]
//! type for the delta between a proposed and a current package.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Everything derived from one compensation slice.
///
/// Metrics are transient display values, never persisted. Intermediate
/// terms are kept unrounded; only the presentation layer rounds.
///
/// # Example
///
/// ```
/// use rewards_engine::calculation::compute_metrics;
/// use rewards_engine::models::CompensationSlice;
/// use rust_decimal::Decimal;
///
/// let mut slice = CompensationSlice::zero();
/// slice.base_pay = Decimal::from(12000);
/// let metrics = compute_metrics(&slice).unwrap();
/// assert_eq!(metrics.total_package_value, Decimal::from(12000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedMetrics {
    /// Base pay plus the global overtime allowance.
    pub gross_pay: Decimal,
    /// The base amount the education-fund rate was applied to.
    pub education_fund_base_amount: Decimal,
    /// Pension, severance and education-fund contributions combined.
    pub social_contributions_value: Decimal,
    /// Fixed monthly benefits, including one twelfth of the annual bonus.
    pub fixed_benefits_value: Decimal,
    /// Sum of all custom line item amounts.
    pub custom_line_items_value: Decimal,
    /// Total monthly value delivered to the employee.
    pub total_package_value: Decimal,
    /// Total package value plus cost-only employer expenses.
    pub employer_monthly_cost: Decimal,
    /// One-time placement agency fee. Zero unless the slice carries a fee
    /// percentage; relevant to the proposed slice only.
    pub placement_agency_fee: Decimal,
}

/// The delta between a proposed and a current package.
///
/// Positive means the proposed slice delivers more value than the current
/// one. The delta is exact; rounding happens only at display time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// `proposed.total_package_value - current.total_package_value`.
    pub package_value_delta: Decimal,
}
