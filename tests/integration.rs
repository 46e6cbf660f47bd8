//! Comprehensive integration tests for the Total-Rewards Compensation Engine.
//!
//! This test suite covers the full simulation surface including:
//! - Standalone simulations
//! - Comparative simulations with a current package
//! - Education-fund base selection and the statutory ceiling
//! - Custom line items
//! - Policy exposure
//! - Offer document rendering
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use rewards_engine::api::{AppState, create_router};
use rewards_engine::config::PolicyLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let policy = PolicyLoader::load("./config/default").expect("Failed to load config");
    AppState::new(policy)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Normalize decimal string by removing trailing zeros after the decimal
/// point, so `26472.4500` and `26472.45` compare equal.
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn proposed_slice() -> Value {
    json!({
        "base_pay": "15000",
        "global_overtime_allowance": "1500",
        "pension_pct": "6.5",
        "severance_pct": "8.33",
        "loss_of_earning_capacity_pct": "0.95",
        "education_fund_pct": "7.5",
        "education_fund_base": "base_plus_global",
        "meal_allowance": "840",
        "travel_allowance": "323",
        "holiday_gift_monthly": "92",
        "welfare_budget": "33",
        "health_insurance": "0",
        "company_car_value": "0",
        "annual_bonus": "0",
        "placement_agency_fee_pct": "0",
        "custom_line_items": [
            { "label": "Signing bonus", "amount": "5000" }
        ]
    })
}

fn current_slice() -> Value {
    json!({
        "base_pay": "12000",
        "global_overtime_allowance": "0",
        "pension_pct": "6",
        "severance_pct": "8.33",
        "loss_of_earning_capacity_pct": "0",
        "education_fund_pct": "0",
        "education_fund_base": "base_only",
        "meal_allowance": "400",
        "travel_allowance": "250",
        "holiday_gift_monthly": "0",
        "welfare_budget": "0",
        "health_insurance": "0",
        "company_car_value": "0",
        "annual_bonus": "0",
        "placement_agency_fee_pct": "0",
        "custom_line_items": []
    })
}

fn candidate() -> Value {
    json!({
        "full_name": "Dana Levi",
        "national_id": "034567891",
        "role": "Backend Developer",
        "department": "R&D",
        "manager": "Noa Mizrahi",
        "start_date": "2026-05-01"
    })
}

fn assert_metric(metrics: &Value, field: &str, expected: &str) {
    let actual = metrics[field].as_str().unwrap();
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

// =============================================================================
// Standalone simulation
// =============================================================================

#[tokio::test]
async fn test_standalone_worked_example() {
    let router = create_router_for_test();

    let body = json!({ "candidate": candidate(), "proposed": proposed_slice() });
    let (status, result) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::OK);

    let proposed = &result["proposed"];
    assert_metric(proposed, "gross_pay", "16500");
    assert_metric(proposed, "education_fund_base_amount", "16500");
    assert_metric(proposed, "social_contributions_value", "3684.45");
    assert_metric(proposed, "fixed_benefits_value", "1288");
    assert_metric(proposed, "custom_line_items_value", "5000");
    assert_metric(proposed, "total_package_value", "26472.45");
    assert_metric(proposed, "employer_monthly_cost", "26629.20");

    assert_eq!(result["candidate"]["full_name"], "Dana Levi");
    assert!(result.get("current").is_none());
    assert!(result.get("comparison").is_none());
    assert_eq!(result["engine_version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_candidate_is_optional() {
    let router = create_router_for_test();

    let body = json!({ "proposed": proposed_slice() });
    let (status, result) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result.get("candidate").is_none());
}

#[tokio::test]
async fn test_agency_fee_surfaced_for_proposed_slice() {
    let router = create_router_for_test();

    let mut slice = proposed_slice();
    slice["placement_agency_fee_pct"] = json!("80");

    let body = json!({ "proposed": slice });
    let (status, result) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::OK);
    // 16500 * 0.80
    assert_metric(&result["proposed"], "placement_agency_fee", "13200");
    // The one-time fee stays out of the recurring totals.
    assert_metric(&result["proposed"], "total_package_value", "26472.45");
}

// =============================================================================
// Education fund bases
// =============================================================================

#[tokio::test]
async fn test_education_fund_base_only() {
    let router = create_router_for_test();

    let mut slice = proposed_slice();
    slice["education_fund_base"] = json!("base_only");

    let body = json!({ "proposed": slice });
    let (status, result) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_metric(&result["proposed"], "education_fund_base_amount", "15000");
    // 16500 * 0.065 + 16500 * 0.0833 + 15000 * 0.075
    assert_metric(&result["proposed"], "social_contributions_value", "3571.95");
}

#[tokio::test]
async fn test_education_fund_ceiling_binds_above_threshold() {
    let router = create_router_for_test();

    let mut slice = proposed_slice();
    slice["base_pay"] = json!("15000");
    slice["global_overtime_allowance"] = json!("3000");
    slice["education_fund_base"] = json!("capped_at_statutory_ceiling");

    let body = json!({ "proposed": slice });
    let (status, result) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::OK);
    // Gross 18000 capped at the policy ceiling of 15712.
    assert_metric(&result["proposed"], "education_fund_base_amount", "15712");
}

#[tokio::test]
async fn test_education_fund_ceiling_not_binding_below_threshold() {
    let router = create_router_for_test();

    let mut slice = proposed_slice();
    slice["base_pay"] = json!("12000");
    slice["global_overtime_allowance"] = json!("2000");
    slice["education_fund_base"] = json!("capped_at_statutory_ceiling");

    let body = json!({ "proposed": slice });
    let (status, result) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::OK);
    // Gross 14000 stays under the 15712 ceiling.
    assert_metric(&result["proposed"], "education_fund_base_amount", "14000");
}

#[tokio::test]
async fn test_explicit_ceiling_overrides_policy() {
    let router = create_router_for_test();

    let mut slice = proposed_slice();
    slice["base_pay"] = json!("15000");
    slice["global_overtime_allowance"] = json!("3000");
    slice["education_fund_base"] = json!("capped_at_statutory_ceiling");
    slice["statutory_ceiling"] = json!("17000");

    let body = json!({ "proposed": slice });
    let (status, result) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_metric(&result["proposed"], "education_fund_base_amount", "17000");
}

// =============================================================================
// Comparative simulation
// =============================================================================

#[tokio::test]
async fn test_comparative_simulation_returns_both_sides_and_delta() {
    let router = create_router_for_test();

    let body = json!({
        "candidate": candidate(),
        "proposed": proposed_slice(),
        "current": current_slice()
    });
    let (status, result) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::OK);

    // Current: gross 12000, social 720 + 999.6, benefits 650.
    let current = &result["current"];
    assert_metric(current, "gross_pay", "12000");
    assert_metric(current, "social_contributions_value", "1719.6");
    assert_metric(current, "fixed_benefits_value", "650");
    assert_metric(current, "total_package_value", "14369.6");

    // Delta: 26472.45 - 14369.6, positive because the offer is richer.
    let delta = result["comparison"]["package_value_delta"].as_str().unwrap();
    assert_eq!(normalize_decimal(delta), "12102.85");
}

#[tokio::test]
async fn test_comparative_delta_is_negative_when_current_is_richer() {
    let router = create_router_for_test();

    let mut poor_offer = current_slice();
    poor_offer["base_pay"] = json!("10000");

    let body = json!({
        "proposed": poor_offer,
        "current": proposed_slice()
    });
    let (status, result) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::OK);
    let delta = result["comparison"]["package_value_delta"].as_str().unwrap();
    assert!(decimal(delta) < Decimal::ZERO);
}

#[tokio::test]
async fn test_invalid_current_slice_is_rejected() {
    let router = create_router_for_test();

    let mut current = current_slice();
    current["severance_pct"] = json!("101");

    let body = json!({ "proposed": proposed_slice(), "current": current });
    let (status, error) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["details"], "severance_pct");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/simulate")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_field_mentions_the_field() {
    let router = create_router_for_test();

    let mut slice = proposed_slice();
    slice.as_object_mut().unwrap().remove("base_pay");

    let body = json!({ "proposed": slice });
    let (status, error) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = error["message"].as_str().unwrap();
    assert!(
        message.contains("missing field") || message.contains("base_pay"),
        "Expected error message to mention the missing field, got: {}",
        message
    );
}

#[tokio::test]
async fn test_unknown_education_fund_base_returns_400() {
    let router = create_router_for_test();

    let mut slice = proposed_slice();
    slice["education_fund_base"] = json!("unknown");

    let body = json!({ "proposed": slice });
    let (status, _) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_negative_money_field_names_the_field() {
    let router = create_router_for_test();

    let mut slice = proposed_slice();
    slice["meal_allowance"] = json!("-10");

    let body = json!({ "proposed": slice });
    let (status, error) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["details"], "meal_allowance");
}

#[tokio::test]
async fn test_negative_custom_item_names_indexed_field() {
    let router = create_router_for_test();

    let mut slice = proposed_slice();
    slice["custom_line_items"] = json!([
        { "label": "Signing bonus", "amount": "5000" },
        { "label": "Clothing budget", "amount": "-50" }
    ]);

    let body = json!({ "proposed": slice });
    let (status, error) = post_json(router, "/simulate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"], "custom_line_items[1].amount");
}

// =============================================================================
// Policy endpoint
// =============================================================================

#[tokio::test]
async fn test_policy_endpoint_exposes_deployment_values() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/policy")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let policy: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(normalize_decimal(policy["statutory_ceiling"].as_str().unwrap()), "15712");
    assert_eq!(policy["currency_symbol"], "₪");
    assert_eq!(policy["offer_validity_days"], 30);
    assert!(policy["options"]["pension_pct"].as_array().unwrap().len() >= 3);
}

// =============================================================================
// Offer document
// =============================================================================

#[tokio::test]
async fn test_offer_document_standalone() {
    let router = create_router_for_test();

    let body = json!({ "candidate": candidate(), "proposed": proposed_slice() });
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/offer-document")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains("Dana Levi"));
    assert!(html.contains("₪26,472"));
    assert!(html.contains("Signing bonus"));
    assert!(html.contains("does not constitute a binding employment contract"));
    assert!(html.contains("valid for 30 days"));
    assert!(!html.contains("Current package"));
}

#[tokio::test]
async fn test_offer_document_comparative() {
    let router = create_router_for_test();

    let body = json!({
        "candidate": candidate(),
        "proposed": proposed_slice(),
        "current": current_slice()
    });
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/offer-document")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains("Current package"));
    assert!(html.contains("₪12,000"));
}

#[tokio::test]
async fn test_offer_document_requires_candidate() {
    let router = create_router_for_test();

    let body = json!({ "proposed": proposed_slice() });
    let (status, _) = post_json(router, "/offer-document", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_offer_document_rejects_invalid_slice() {
    let router = create_router_for_test();

    let mut slice = proposed_slice();
    slice["base_pay"] = json!("-1");

    let body = json!({ "candidate": candidate(), "proposed": slice });
    let (status, error) = post_json(router, "/offer-document", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}
