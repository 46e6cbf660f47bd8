//! Compensation offer document rendering.
//!
//! Produces a self-contained HTML document from a candidate, a proposed
//! slice and its computed metrics, with an optional current-package column
//! for comparative offers. The renderer is pure: it returns a `String` and
//! leaves printing or export to the caller.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::{Candidate, CompensationSlice, ComputedMetrics, EducationFundBase};

use super::currency::format_currency;

/// The fixed legal disclaimer attached to every offer document.
///
/// The validity period placeholder `{validity_days}` is substituted from
/// policy at render time.
pub const LEGAL_DISCLAIMER: &str = "Legal notice: this document is a salary offer simulation \
only and does not constitute a binding employment contract or a promise of employment. All \
amounts are estimated gross figures, before mandatory deductions required by law, and are \
subject to change under legislation, company procedures and the personal employment agreement \
signed between the parties, if signed. This document is valid for {validity_days} days from \
its date of issue. Final employment terms are set exclusively by the official employment \
agreement.";

/// Renders a compensation offer document as HTML.
///
/// When `current` is supplied the component table gains a current-package
/// column; custom line items belong to the proposal only and render a
/// dash in that column. All amounts pass through
/// [`format_currency`], the single display-rounding point.
pub fn render_offer_document(
    candidate: &Candidate,
    proposed: &CompensationSlice,
    metrics: &ComputedMetrics,
    current: Option<&CompensationSlice>,
    config: &PolicyConfig,
) -> String {
    let symbol = config.currency_symbol();
    let comparative = current.is_some();
    let col_count = if comparative { 3 } else { 2 };

    let current_header = if comparative {
        "<th>Current package</th>"
    } else {
        ""
    };

    let mut rows = String::new();
    rows.push_str(&group_row("Salary and allowances (gross)", col_count));
    rows.push_str(&amount_row(
        "Base salary",
        symbol,
        proposed.base_pay,
        current.map(|c| c.base_pay),
    ));
    rows.push_str(&amount_row(
        "Global overtime allowance",
        symbol,
        proposed.global_overtime_allowance,
        current.map(|c| c.global_overtime_allowance),
    ));

    rows.push_str(&group_row("Employer social contributions", col_count));
    rows.push_str(&percent_row(
        "Pension / provident fund",
        proposed.pension_pct,
        current.map(|c| c.pension_pct),
    ));
    rows.push_str(&percent_row(
        &format!(
            "Education fund <span class=\"note\">({})</span>",
            education_fund_base_label(proposed.education_fund_base)
        ),
        proposed.education_fund_pct,
        current.map(|c| c.education_fund_pct),
    ));
    rows.push_str(&percent_row(
        "Severance fund",
        proposed.severance_pct,
        current.map(|c| c.severance_pct),
    ));

    rows.push_str(&group_row("Benefits", col_count));
    rows.push_str(&amount_row(
        "Meal card",
        symbol,
        proposed.meal_allowance,
        current.map(|c| c.meal_allowance),
    ));
    rows.push_str(&amount_row(
        "Monthly travel",
        symbol,
        proposed.travel_allowance,
        current.map(|c| c.travel_allowance),
    ));
    rows.push_str(&amount_row(
        "Holiday gift (monthly equivalent)",
        symbol,
        proposed.holiday_gift_monthly,
        current.map(|c| c.holiday_gift_monthly),
    ));
    rows.push_str(&amount_row(
        "Welfare and training budget",
        symbol,
        proposed.welfare_budget,
        current.map(|c| c.welfare_budget),
    ));

    if !proposed.custom_line_items.is_empty() {
        rows.push_str(&group_row("Special additions", col_count));
        for item in &proposed.custom_line_items {
            let current_cell = if comparative { "<td>—</td>" } else { "" };
            rows.push_str(&format!(
                "<tr><td>{}</td>{}<td class=\"highlight\">{}</td></tr>\n",
                item.label,
                current_cell,
                format_currency(symbol, item.amount)
            ));
        }
    }

    let disclaimer = LEGAL_DISCLAIMER.replace(
        "{validity_days}",
        &config.offer_validity_days().to_string(),
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"><title>Compensation offer - {policy_name}</title><style>
body{{font-family:'Segoe UI',Tahoma,Geneva,Verdana,sans-serif;padding:40px;color:#1e293b}}
.header{{text-align:center;border-bottom:4px solid #334155;padding-bottom:20px;margin-bottom:30px}}
.title{{font-size:24px;font-weight:bold;margin-top:10px}}
.grid-2{{display:flex;justify-content:space-between;gap:20px;margin-bottom:30px}}
.info-box{{background:#f8fafc;padding:20px;border-radius:12px;flex:1;border:1px solid #e2e8f0}}
.info-row{{display:flex;justify-content:space-between;margin-bottom:8px;font-size:14px}}
.total-box{{background:#0f172a;color:white;padding:30px;text-align:center;border-radius:16px;margin-bottom:30px}}
.total-box .val{{font-size:48px;font-weight:900;margin:10px 0}}
table{{width:100%;border-collapse:collapse;margin-bottom:30px;font-size:14px}}
th{{background:#0f172a;color:white;padding:12px;text-align:left}}
td{{border-bottom:1px solid #e2e8f0;padding:12px}}
.row-group{{background:#e2e8f0;font-weight:bold}}
.highlight{{font-weight:bold}}
.note{{font-size:10px;color:#64748b}}
.disclaimer{{font-size:11px;color:#64748b;line-height:1.6;border-top:1px solid #e2e8f0;padding-top:20px}}
</style></head><body>
<div class="header"><div class="title">{policy_name}</div><div class="title">Compensation package offer</div></div>
<div class="grid-2">
  <div class="info-box"><h3>Candidate</h3>
    <div class="info-row"><strong>Full name:</strong><span>{full_name}</span></div>
    <div class="info-row"><strong>National id:</strong><span>{national_id}</span></div></div>
  <div class="info-box"><h3>Position</h3>
    <div class="info-row"><strong>Role:</strong><span>{role}</span></div>
    <div class="info-row"><strong>Department:</strong><span>{department}</span></div>
    <div class="info-row"><strong>Direct manager:</strong><span>{manager}</span></div>
    <div class="info-row"><strong>Target start date:</strong><span>{start_date}</span></div></div>
</div>
<div class="total-box">
  <div>Monthly total rewards value</div>
  <div class="val">{total_value}</div>
  <div>Includes base salary, allowances, the monetary value of benefits and employer contributions.</div>
</div>
<table><thead><tr><th>Component</th>{current_header}<th>Proposed offer</th></tr></thead><tbody>
{rows}</tbody></table>
<div class="disclaimer">{disclaimer}</div>
</body></html>"#,
        policy_name = config.policy().name,
        full_name = candidate.full_name,
        national_id = candidate.national_id,
        role = candidate.role,
        department = candidate.department,
        manager = candidate.manager,
        start_date = candidate.start_date,
        total_value = format_currency(symbol, metrics.total_package_value),
        current_header = current_header,
        rows = rows,
        disclaimer = disclaimer,
    )
}

fn education_fund_base_label(base: EducationFundBase) -> &'static str {
    match base {
        EducationFundBase::BaseOnly => "from base salary",
        EducationFundBase::BasePlusGlobal => "from base plus global allowance",
        EducationFundBase::CappedAtStatutoryCeiling => "up to statutory ceiling",
    }
}

fn group_row(label: &str, col_count: usize) -> String {
    format!(
        "<tr class=\"row-group\"><td colspan=\"{}\">{}</td></tr>\n",
        col_count, label
    )
}

fn amount_row(
    label: &str,
    symbol: &str,
    proposed: Decimal,
    current: Option<Decimal>,
) -> String {
    let current_cell = match current {
        Some(amount) => format!("<td>{}</td>", format_currency(symbol, amount)),
        None => String::new(),
    };
    format!(
        "<tr><td>{}</td>{}<td class=\"highlight\">{}</td></tr>\n",
        label,
        current_cell,
        format_currency(symbol, proposed)
    )
}

fn percent_row(
    label: &str,
    proposed: Decimal,
    current: Option<Decimal>,
) -> String {
    let current_cell = match current {
        Some(pct) => format!("<td>{}%</td>", pct.normalize()),
        None => String::new(),
    };
    format!(
        "<tr><td>{}</td>{}<td>{}%</td></tr>\n",
        label,
        current_cell,
        proposed.normalize()
    )
}
