//! Education-fund base selection and contribution calculation.
//!
//! The education-fund ("Keren Hishtalmut") contribution base is a policy
//! choice: base salary only, base plus the global allowance, or gross pay
//! capped at the statutory ceiling. This module derives the base amount
//! and the resulting employer contribution.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationSlice, EducationFundBase};

/// The result of the education-fund calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationFundResult {
    /// The base amount the contribution rate was applied to.
    pub base_amount: Decimal,
    /// The monthly employer contribution.
    pub contribution: Decimal,
}

/// Derives the education-fund base amount and contribution for a slice.
///
/// The base amount is computed even when `education_fund_pct` is zero, so
/// that the selected base kind stays observable (and testable) regardless
/// of the rate. A zero rate simply yields a zero contribution.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPolicy`] when
/// [`EducationFundBase::CappedAtStatutoryCeiling`] is selected and the
/// slice carries a non-positive `statutory_ceiling`. The ceiling is a
/// configuration constant, so a bad value is a deployment defect rather
/// than user input.
///
/// # Example
///
/// ```
/// use rewards_engine::calculation::calculate_education_fund;
/// use rewards_engine::models::{CompensationSlice, EducationFundBase};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut slice = CompensationSlice::zero();
/// slice.base_pay = Decimal::from(10000);
/// slice.global_overtime_allowance = Decimal::from(2000);
/// slice.education_fund_pct = Decimal::from_str("7.5").unwrap();
/// slice.education_fund_base = EducationFundBase::BaseOnly;
///
/// let result = calculate_education_fund(&slice).unwrap();
/// assert_eq!(result.base_amount, Decimal::from(10000));
/// assert_eq!(result.contribution, Decimal::from(750));
/// ```
pub fn calculate_education_fund(slice: &CompensationSlice) -> EngineResult<EducationFundResult> {
    let gross = slice.base_pay + slice.global_overtime_allowance;

    let base_amount = match slice.education_fund_base {
        EducationFundBase::BaseOnly => slice.base_pay,
        EducationFundBase::BasePlusGlobal => gross,
        EducationFundBase::CappedAtStatutoryCeiling => {
            if slice.statutory_ceiling <= Decimal::ZERO {
                return Err(EngineError::InvalidPolicy {
                    parameter: "statutory_ceiling".to_string(),
                    message: "must be positive when the education-fund base is capped"
                        .to_string(),
                });
            }
            gross.min(slice.statutory_ceiling)
        }
    };

    let contribution = base_amount * (slice.education_fund_pct / Decimal::ONE_HUNDRED);

    Ok(EducationFundResult {
        base_amount,
        contribution,
    })
}
