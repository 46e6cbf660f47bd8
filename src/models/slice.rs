//! Compensation slice model and related types.
//!
//! This module defines the [`CompensationSlice`] struct describing one side
//! of a package comparison, the [`EducationFundBase`] enum selecting the
//! education-fund contribution base, and the [`CustomLineItem`] type for
//! free-form package components.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Selects how the education-fund contribution base is derived.
///
/// Employers define the base differently depending on policy: base salary
/// alone, base plus the global overtime allowance, or gross pay capped at
/// the statutory ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationFundBase {
    /// Base salary only.
    BaseOnly,
    /// Base salary plus the global overtime allowance.
    BasePlusGlobal,
    /// Gross pay, capped at the statutory ceiling.
    CappedAtStatutoryCeiling,
}

/// A free-form package component (signing bonus, clothing budget, company
/// car adjustment) added to one slice.
///
/// Items carry a stable id distinct from their position, since positions
/// shift as items are added and removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomLineItem {
    /// Stable identity of this item.
    pub id: Uuid,
    /// Display label, e.g. "Signing bonus".
    pub label: String,
    /// Monthly amount in currency units.
    pub amount: Decimal,
}

impl CustomLineItem {
    /// Creates a new item with a freshly generated id.
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            amount,
        }
    }
}

/// One side (proposed or current) of a compensation comparison.
///
/// All monetary amounts are monthly currency units unless stated otherwise;
/// all percentage fields are values in [0, 100], divided by 100 at
/// computation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationSlice {
    /// Monthly gross base salary.
    pub base_pay: Decimal,
    /// Fixed monthly overtime allowance folded into gross pay.
    pub global_overtime_allowance: Decimal,
    /// Employer pension contribution rate, applied to gross pay.
    pub pension_pct: Decimal,
    /// Employer severance-fund rate, applied to gross pay.
    pub severance_pct: Decimal,
    /// Income-protection insurance rate, applied to gross pay. Counts
    /// toward employer cost only, never toward package value.
    pub loss_of_earning_capacity_pct: Decimal,
    /// Education-fund contribution rate, applied to the education-fund
    /// base amount.
    pub education_fund_pct: Decimal,
    /// How the education-fund base amount is derived.
    pub education_fund_base: EducationFundBase,
    /// Statutory ceiling used when the education-fund base is capped.
    /// A configuration value, not user input.
    pub statutory_ceiling: Decimal,
    /// Monthly meal card value.
    pub meal_allowance: Decimal,
    /// Monthly travel allowance.
    pub travel_allowance: Decimal,
    /// Holiday gift, as a monthly equivalent.
    pub holiday_gift_monthly: Decimal,
    /// Monthly welfare and training budget.
    pub welfare_budget: Decimal,
    /// Monthly supplemental health insurance value.
    pub health_insurance: Decimal,
    /// Monthly company car value.
    pub company_car_value: Decimal,
    /// Annual bonus, divided by 12 when folded into monthly benefits.
    pub annual_bonus: Decimal,
    /// One-time placement agency fee as a percentage of gross pay.
    /// Meaningful for the proposed slice only.
    pub placement_agency_fee_pct: Decimal,
    /// Free-form components in display order.
    #[serde(default)]
    pub custom_line_items: Vec<CustomLineItem>,
}

impl CompensationSlice {
    /// Validates every field against its constraint.
    ///
    /// Returns the first violation as an [`EngineError::InvalidSlice`]
    /// naming the offending field. The engine never clamps or coerces:
    /// a slice that fails validation produces no metrics at all.
    ///
    /// # Example
    ///
    /// ```
    /// use rewards_engine::models::CompensationSlice;
    /// use rust_decimal::Decimal;
    ///
    /// let mut slice = CompensationSlice::zero();
    /// slice.pension_pct = Decimal::from(101);
    /// assert!(slice.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        require_non_negative("base_pay", self.base_pay)?;
        require_non_negative("global_overtime_allowance", self.global_overtime_allowance)?;
        require_percentage("pension_pct", self.pension_pct)?;
        require_percentage("severance_pct", self.severance_pct)?;
        require_percentage(
            "loss_of_earning_capacity_pct",
            self.loss_of_earning_capacity_pct,
        )?;
        require_percentage("education_fund_pct", self.education_fund_pct)?;
        require_non_negative("meal_allowance", self.meal_allowance)?;
        require_non_negative("travel_allowance", self.travel_allowance)?;
        require_non_negative("holiday_gift_monthly", self.holiday_gift_monthly)?;
        require_non_negative("welfare_budget", self.welfare_budget)?;
        require_non_negative("health_insurance", self.health_insurance)?;
        require_non_negative("company_car_value", self.company_car_value)?;
        require_non_negative("annual_bonus", self.annual_bonus)?;
        require_percentage("placement_agency_fee_pct", self.placement_agency_fee_pct)?;

        for (index, item) in self.custom_line_items.iter().enumerate() {
            require_non_negative(
                &format!("custom_line_items[{}].amount", index),
                item.amount,
            )?;
        }

        Ok(())
    }

    /// Returns a slice with every amount and percentage set to zero,
    /// `BaseOnly` education-fund base and no custom items.
    ///
    /// Useful as a starting point for tests and form state.
    pub fn zero() -> Self {
        Self {
            base_pay: Decimal::ZERO,
            global_overtime_allowance: Decimal::ZERO,
            pension_pct: Decimal::ZERO,
            severance_pct: Decimal::ZERO,
            loss_of_earning_capacity_pct: Decimal::ZERO,
            education_fund_pct: Decimal::ZERO,
            education_fund_base: EducationFundBase::BaseOnly,
            statutory_ceiling: Decimal::ZERO,
            meal_allowance: Decimal::ZERO,
            travel_allowance: Decimal::ZERO,
            holiday_gift_monthly: Decimal::ZERO,
            welfare_budget: Decimal::ZERO,
            health_insurance: Decimal::ZERO,
            company_car_value: Decimal::ZERO,
            annual_bonus: Decimal::ZERO,
            placement_agency_fee_pct: Decimal::ZERO,
            custom_line_items: vec![],
        }
    }
}

fn require_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidSlice {
            field: field.to_string(),
            message: "amount must not be negative".to_string(),
        });
    }
    Ok(())
}

fn require_percentage(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(EngineError::InvalidSlice {
            field: field.to_string(),
            message: "percentage must be between 0 and 100".to_string(),
        });
    }
    Ok(())
}
