//! Full metrics computation for a compensation slice.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{CompensationSlice, ComputedMetrics};

use super::agency_fee::calculate_placement_agency_fee;
use super::benefits::calculate_fixed_benefits;
use super::custom_items::calculate_custom_items_value;
use super::gross_pay::calculate_gross_pay;
use super::social_contributions::calculate_social_contributions;

/// Computes every derived metric for a compensation slice.
///
/// The computation validates the slice first and then derives gross pay,
/// social contributions, fixed benefits, the custom items total, the total
/// package value and the fully loaded employer cost. It is deterministic
/// and side-effect free: the same slice always produces the same metrics,
/// with no dependency on wall-clock time, locale or prior calls.
///
/// The loss-of-earning-capacity term is added to the employer cost on top
/// of the package value. The insurance is cost-only and never reaches the
/// employee, so it stays out of `total_package_value`.
///
/// No intermediate term is rounded. Display rounding belongs to the
/// presentation layer, see [`crate::document`].
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidSlice`] when any field
/// violates its constraint, and
/// [`crate::error::EngineError::InvalidPolicy`] when a capped
/// education-fund base is selected with a non-positive statutory ceiling.
/// No partial result is ever produced.
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
/// slice.meal_allowance = Decimal::from(400);
///
/// let metrics = compute_metrics(&slice).unwrap();
/// assert_eq!(metrics.gross_pay, Decimal::from(12000));
/// assert_eq!(metrics.total_package_value, Decimal::from(12400));
/// ```
pub fn compute_metrics(slice: &CompensationSlice) -> EngineResult<ComputedMetrics> {
    slice.validate()?;

    let gross_pay = calculate_gross_pay(slice);
    let social = calculate_social_contributions(slice)?;
    let fixed_benefits_value = calculate_fixed_benefits(slice);
    let custom_line_items_value = calculate_custom_items_value(&slice.custom_line_items);

    let total_package_value =
        gross_pay + social.total + fixed_benefits_value + custom_line_items_value;

    let loss_of_earning_cost =
        gross_pay * (slice.loss_of_earning_capacity_pct / Decimal::ONE_HUNDRED);
    let employer_monthly_cost = total_package_value + loss_of_earning_cost;

    let placement_agency_fee = calculate_placement_agency_fee(slice);

    Ok(ComputedMetrics {
        gross_pay,
        education_fund_base_amount: social.education_fund_base_amount,
        social_contributions_value: social.total,
        fixed_benefits_value,
        custom_line_items_value,
        total_package_value,
        employer_monthly_cost,
        placement_agency_fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{CustomLineItem, EducationFundBase};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn worked_example_slice() -> CompensationSlice {
        CompensationSlice {
            base_pay: dec("15000"),
            global_overtime_allowance: dec("1500"),
            pension_pct: dec("6.5"),
            severance_pct: dec("8.33"),
            loss_of_earning_capacity_pct: dec("0.95"),
            education_fund_pct: dec("7.5"),
            education_fund_base: EducationFundBase::BasePlusGlobal,
            statutory_ceiling: dec("15712"),
            meal_allowance: dec("840"),
            travel_allowance: dec("323"),
            holiday_gift_monthly: dec("92"),
            welfare_budget: dec("33"),
            health_insurance: Decimal::ZERO,
            company_car_value: Decimal::ZERO,
            annual_bonus: Decimal::ZERO,
            placement_agency_fee_pct: Decimal::ZERO,
            custom_line_items: vec![CustomLineItem::new("Signing bonus", dec("5000"))],
        }
    }

    /// CM-001: full worked example
    #[test]
    fn test_full_worked_example() {
        let metrics = compute_metrics(&worked_example_slice()).unwrap();

        assert_eq!(metrics.gross_pay, dec("16500"));
        assert_eq!(metrics.education_fund_base_amount, dec("16500"));
        assert_eq!(metrics.social_contributions_value, dec("3684.45"));
        assert_eq!(metrics.fixed_benefits_value, dec("1288"));
        assert_eq!(metrics.custom_line_items_value, dec("5000"));
        assert_eq!(metrics.total_package_value, dec("26472.45"));
        assert_eq!(metrics.employer_monthly_cost, dec("26629.20"));
        assert_eq!(metrics.placement_agency_fee, Decimal::ZERO);
    }

    /// CM-002: zero-benefit baseline
    #[test]
    fn test_zero_benefit_baseline() {
        let mut slice = CompensationSlice::zero();
        slice.base_pay = dec("10000");

        let metrics = compute_metrics(&slice).unwrap();

        assert_eq!(metrics.gross_pay, dec("10000"));
        assert_eq!(metrics.social_contributions_value, Decimal::ZERO);
        assert_eq!(metrics.fixed_benefits_value, Decimal::ZERO);
        assert_eq!(metrics.custom_line_items_value, Decimal::ZERO);
        assert_eq!(metrics.total_package_value, dec("10000"));
        assert_eq!(metrics.employer_monthly_cost, dec("10000"));
    }

    /// CM-003: repeated calls are bit-identical
    #[test]
    fn test_repeated_calls_are_identical() {
        let slice = worked_example_slice();

        let first = compute_metrics(&slice).unwrap();
        let second = compute_metrics(&slice).unwrap();

        assert_eq!(first, second);
    }

    /// CM-004: invalid percentage yields no partial result
    #[test]
    fn test_invalid_percentage_is_rejected() {
        let mut slice = worked_example_slice();
        slice.pension_pct = dec("-1");

        match compute_metrics(&slice).unwrap_err() {
            EngineError::InvalidSlice { field, .. } => assert_eq!(field, "pension_pct"),
            other => panic!("Expected InvalidSlice, got {:?}", other),
        }
    }

    /// CM-005: loss-of-earning-capacity is cost-only
    #[test]
    fn test_loss_of_earning_capacity_excluded_from_package_value() {
        let mut slice = CompensationSlice::zero();
        slice.base_pay = dec("10000");
        slice.loss_of_earning_capacity_pct = dec("1");

        let metrics = compute_metrics(&slice).unwrap();

        assert_eq!(metrics.total_package_value, dec("10000"));
        assert_eq!(metrics.employer_monthly_cost, dec("10100"));
    }

    #[test]
    fn test_agency_fee_reported_but_not_in_cost() {
        let mut slice = CompensationSlice::zero();
        slice.base_pay = dec("16000");
        slice.placement_agency_fee_pct = dec("100");

        let metrics = compute_metrics(&slice).unwrap();

        assert_eq!(metrics.placement_agency_fee, dec("16000"));
        // One-time hiring cost, not part of the recurring figures.
        assert_eq!(metrics.total_package_value, dec("16000"));
        assert_eq!(metrics.employer_monthly_cost, dec("16000"));
    }

    #[test]
    fn test_non_negative_outputs_for_valid_slice() {
        let metrics = compute_metrics(&worked_example_slice()).unwrap();

        assert!(metrics.gross_pay >= Decimal::ZERO);
        assert!(metrics.education_fund_base_amount >= Decimal::ZERO);
        assert!(metrics.social_contributions_value >= Decimal::ZERO);
        assert!(metrics.fixed_benefits_value >= Decimal::ZERO);
        assert!(metrics.custom_line_items_value >= Decimal::ZERO);
        assert!(metrics.total_package_value >= Decimal::ZERO);
        assert!(metrics.employer_monthly_cost >= Decimal::ZERO);
        assert!(metrics.placement_agency_fee >= Decimal::ZERO);
    }

    #[test]
    fn test_capped_base_with_zero_ceiling_is_policy_error() {
        let mut slice = worked_example_slice();
        slice.education_fund_base = EducationFundBase::CappedAtStatutoryCeiling;
        slice.statutory_ceiling = Decimal::ZERO;

        match compute_metrics(&slice).unwrap_err() {
            EngineError::InvalidPolicy { parameter, .. } => {
                assert_eq!(parameter, "statutory_ceiling");
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }
}
