//! Employer social contribution calculation.
//!
//! Pension and severance contributions are percentages of gross pay; the
//! education-fund contribution is a percentage of its own base amount.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::CompensationSlice;

use super::education_fund::calculate_education_fund;
use super::gross_pay::calculate_gross_pay;

/// The per-term breakdown of the employer social contributions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialContributionsResult {
    /// Employer pension contribution.
    pub pension: Decimal,
    /// Employer severance-fund contribution.
    pub severance: Decimal,
    /// The base amount the education-fund rate was applied to.
    pub education_fund_base_amount: Decimal,
    /// Employer education-fund contribution.
    pub education_fund: Decimal,
    /// Sum of all three contribution terms.
    pub total: Decimal,
}

/// Calculates the employer social contributions for a slice.
///
/// Intermediate terms are not rounded; callers round only at display time
/// so that rounding error never compounds across terms.
///
/// # Errors
///
/// Propagates the education-fund policy check, see
/// [`calculate_education_fund`].
pub fn calculate_social_contributions(
    slice: &CompensationSlice,
) -> EngineResult<SocialContributionsResult> {
    let gross = calculate_gross_pay(slice);

    let pension = gross * (slice.pension_pct / Decimal::ONE_HUNDRED);
    let severance = gross * (slice.severance_pct / Decimal::ONE_HUNDRED);
    let education = calculate_education_fund(slice)?;

    let total = pension + severance + education.contribution;

    Ok(SocialContributionsResult {
        pension,
        severance,
        education_fund_base_amount: education.base_amount,
        education_fund: education.contribution,
        total,
    })
}
