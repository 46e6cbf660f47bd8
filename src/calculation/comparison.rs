//! Package comparison.

use crate::models::{ComparisonResult, ComputedMetrics};

/// Compares a proposed package against a current one.
///
/// The delta is `proposed.total_package_value - current.total_package_value`
/// and is exact: rounding happens only when the value is displayed.
/// Positive means the proposed package delivers more value. Whether a
/// current slice exists at all is the caller's decision; the engine only
/// compares what it is given.
///
/// # Example
///
/// ```
/// use rewards_engine::calculation::{compare_packages, compute_metrics};
/// use rewards_engine::models::CompensationSlice;
/// use rust_decimal::Decimal;
///
/// let mut proposed = CompensationSlice::zero();
/// proposed.base_pay = Decimal::from(20000);
/// let mut current = CompensationSlice::zero();
/// current.base_pay = Decimal::from(18000);
///
/// let delta = compare_packages(
///     &compute_metrics(&proposed).unwrap(),
///     &compute_metrics(&current).unwrap(),
/// );
/// assert_eq!(delta.package_value_delta, Decimal::from(2000));
/// ```
pub fn compare_packages(
    proposed: &ComputedMetrics,
    current: &ComputedMetrics,
) -> ComparisonResult {
    ComparisonResult {
        package_value_delta: proposed.total_package_value - current.total_package_value,
    }
}
