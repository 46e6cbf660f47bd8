//! Placement agency fee calculation.

use rust_decimal::Decimal;

use crate::models::CompensationSlice;

use super::gross_pay::calculate_gross_pay;

/// Returns the one-time placement agency fee for a slice.
///
/// The fee is a percentage of gross pay paid once at hiring. It never
/// enters the package value or the recurring employer cost, and it is
/// surfaced for the proposed slice only; for a current slice the caller
/// passes a zero percentage.
///
/// # Example
///
/// ```
/// use rewards_engine::calculation::calculate_placement_agency_fee;
/// use rewards_engine::models::CompensationSlice;
/// use rust_decimal::Decimal;
///
/// let mut slice = CompensationSlice::zero();
/// slice.base_pay = Decimal::from(16000);
/// slice.placement_agency_fee_pct = Decimal::from(100);
/// assert_eq!(calculate_placement_agency_fee(&slice), Decimal::from(16000));
/// ```
pub fn calculate_placement_agency_fee(slice: &CompensationSlice) -> Decimal {
    calculate_gross_pay(slice) * (slice.placement_agency_fee_pct / Decimal::ONE_HUNDRED)
}
