//! Gross pay calculation.

use rust_decimal::Decimal;

use crate::models::CompensationSlice;

/// Returns the monthly gross pay for a slice.
///
/// Gross pay is the base salary plus the fixed global overtime allowance.
/// Every percentage-based employer contribution is applied to this amount
/// (the education fund may use a different base, see
/// [`calculate_education_fund`](super::calculate_education_fund)).
///
/// # Example
///
/// ```
/// use rewards_engine::calculation::calculate_gross_pay;
/// use rewards_engine::models::CompensationSlice;
/// use rust_decimal::Decimal;
///
/// let mut slice = CompensationSlice::zero();
/// slice.base_pay = Decimal::from(15000);
/// slice.global_overtime_allowance = Decimal::from(1500);
/// assert_eq!(calculate_gross_pay(&slice), Decimal::from(16500));
/// ```
pub fn calculate_gross_pay(slice: &CompensationSlice) -> Decimal {
    slice.base_pay + slice.global_overtime_allowance
}
