//! Request types for the Total-Rewards Compensation Engine API.
//!
//! This module defines the JSON request structures for the `/simulate` and
//! `/offer-document` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Candidate, CompensationSlice, CustomLineItem, EducationFundBase};

/// Request body for the `/simulate` endpoint.
///
/// Contains the proposed slice and, for comparative simulations, the
/// candidate's current package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// The candidate the simulation is for, echoed in the response.
    #[serde(default)]
    pub candidate: Option<CandidateRequest>,
    /// The proposed compensation slice.
    pub proposed: SliceRequest,
    /// The candidate's current compensation slice, when comparing.
    #[serde(default)]
    pub current: Option<SliceRequest>,
}

/// Request body for the `/offer-document` endpoint.
///
/// Unlike a simulation, an offer document always names its candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferDocumentRequest {
    /// The candidate the offer is addressed to.
    pub candidate: CandidateRequest,
    /// The proposed compensation slice.
    pub proposed: SliceRequest,
    /// The current compensation slice for comparative documents.
    #[serde(default)]
    pub current: Option<SliceRequest>,
}

/// Candidate information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRequest {
    /// Full name.
    pub full_name: String,
    /// National identity number.
    pub national_id: String,
    /// Intended role.
    pub role: String,
    /// Organizational unit.
    pub department: String,
    /// Direct manager.
    pub manager: String,
    /// Target start date.
    pub start_date: NaiveDate,
}

/// One compensation slice in a request.
///
/// Every monetary and percentage field is required: a missing value is a
/// request error, never an implicit zero. The statutory ceiling is the one
/// exception, since it is deployment configuration rather than user input;
/// when omitted it is filled from policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceRequest {
    /// Monthly gross base salary.
    pub base_pay: Decimal,
    /// Fixed monthly overtime allowance.
    pub global_overtime_allowance: Decimal,
    /// Employer pension contribution rate.
    pub pension_pct: Decimal,
    /// Employer severance-fund rate.
    pub severance_pct: Decimal,
    /// Income-protection insurance rate.
    pub loss_of_earning_capacity_pct: Decimal,
    /// Education-fund contribution rate.
    pub education_fund_pct: Decimal,
    /// How the education-fund base amount is derived.
    pub education_fund_base: EducationFundBase,
    /// Statutory ceiling override; filled from policy when omitted.
    #[serde(default)]
    pub statutory_ceiling: Option<Decimal>,
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
    /// Annual bonus.
    pub annual_bonus: Decimal,
    /// One-time placement agency fee rate.
    pub placement_agency_fee_pct: Decimal,
    /// Free-form components in display order.
    #[serde(default)]
    pub custom_line_items: Vec<CustomLineItemRequest>,
}

/// A custom line item in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomLineItemRequest {
    /// Stable identity; generated when omitted.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Display label.
    pub label: String,
    /// Monthly amount.
    pub amount: Decimal,
}

impl SliceRequest {
    /// Converts this request into a domain slice, substituting the policy
    /// ceiling when the request carries none.
    pub fn into_slice(self, policy_ceiling: Decimal) -> CompensationSlice {
        CompensationSlice {
            base_pay: self.base_pay,
            global_overtime_allowance: self.global_overtime_allowance,
            pension_pct: self.pension_pct,
            severance_pct: self.severance_pct,
            loss_of_earning_capacity_pct: self.loss_of_earning_capacity_pct,
            education_fund_pct: self.education_fund_pct,
            education_fund_base: self.education_fund_base,
            statutory_ceiling: self.statutory_ceiling.unwrap_or(policy_ceiling),
            meal_allowance: self.meal_allowance,
            travel_allowance: self.travel_allowance,
            holiday_gift_monthly: self.holiday_gift_monthly,
            welfare_budget: self.welfare_budget,
            health_insurance: self.health_insurance,
            company_car_value: self.company_car_value,
            annual_bonus: self.annual_bonus,
            placement_agency_fee_pct: self.placement_agency_fee_pct,
            custom_line_items: self
                .custom_line_items
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl From<CustomLineItemRequest> for CustomLineItem {
    fn from(req: CustomLineItemRequest) -> Self {
        CustomLineItem {
            id: req.id.unwrap_or_else(Uuid::new_v4),
            label: req.label,
            amount: req.amount,
        }
    }
}

impl From<CandidateRequest> for Candidate {
    fn from(req: CandidateRequest) -> Self {
        Candidate {
            full_name: req.full_name,
            national_id: req.national_id,
            role: req.role,
            department: req.department,
            manager: req.manager,
            start_date: req.start_date,
        }
    }
}
