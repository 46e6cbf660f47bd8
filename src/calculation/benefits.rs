//! Fixed benefits calculation.

use rust_decimal::Decimal;

use crate::models::CompensationSlice;

/// Returns the monthly value of the fixed benefits in a slice.
///
/// Sums the meal card, travel allowance, holiday gift, welfare budget,
/// health insurance and company car values, plus one twelfth of the
/// annual bonus. The bonus fraction is kept unrounded.
///
/// # Example
///
/// ```
/// use rewards_engine::calculation::calculate_fixed_benefits;
/// use rewards_engine::models::CompensationSlice;
/// use rust_decimal::Decimal;
///
/// let mut slice = CompensationSlice::zero();
/// slice.meal_allowance = Decimal::from(840);
/// slice.travel_allowance = Decimal::from(323);
/// slice.annual_bonus = Decimal::from(12000);
/// assert_eq!(calculate_fixed_benefits(&slice), Decimal::from(2163));
/// ```
pub fn calculate_fixed_benefits(slice: &CompensationSlice) -> Decimal {
    let monthly_bonus = slice.annual_bonus / Decimal::from(12);

    slice.meal_allowance
        + slice.travel_allowance
        + slice.holiday_gift_monthly
        + slice.welfare_budget
        + slice.health_insurance
        + slice.company_car_value
        + monthly_bonus
}
