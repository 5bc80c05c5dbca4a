use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::contribution::ContributionView;
use crate::cache::ContributionCache;
use crate::format::{format_peso, format_percentage};
use crate::money::Money;
use crate::payslip::history::{
    CompositionShare, NetPayPoint, deductions_composition, earnings_composition,
    net_pay_history, thirteenth_month_estimate,
};
use crate::payslip::{PayslipBreakdown, PayslipRecord};

/// Pre-formatted figures for the pay summary card.
#[derive(Serialize, ToSchema)]
pub struct PaySummary {
    #[schema(example = "₱20,000.00")]
    pub total_earnings: String,
    #[schema(example = "₱1,900.00")]
    pub mandatory_deductions: String,
    #[schema(example = "₱0.00")]
    pub other_deductions: String,
    #[schema(example = "₱1,900.00")]
    pub total_deductions: String,
    #[schema(example = "₱18,100.00")]
    pub net_pay: String,
    #[schema(example = "90.50%", nullable = true)]
    pub net_salary_percentage: Option<String>,
}

impl From<&PayslipBreakdown> for PaySummary {
    fn from(b: &PayslipBreakdown) -> Self {
        Self {
            total_earnings: format_peso(b.total_earnings.amount()),
            mandatory_deductions: format_peso(b.mandatory_deductions.amount()),
            other_deductions: format_peso(b.other_deductions.amount()),
            total_deductions: format_peso(b.total_deductions.amount()),
            net_pay: format_peso(b.net_pay),
            net_salary_percentage: b.net_salary_percentage.map(format_percentage),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct PayslipBreakdownResponse {
    #[schema(value_type = String)]
    pub id: Uuid,
    #[schema(example = "November, 2025")]
    pub period_label: String,
    pub breakdown: PayslipBreakdown,
    pub summary: PaySummary,
    pub contributions: Vec<ContributionView>,
    pub earnings_composition: Vec<CompositionShare>,
    pub deductions_composition: Vec<CompositionShare>,
}

#[derive(Deserialize, ToSchema)]
pub struct PayslipSummaryRequest {
    pub payslips: Vec<PayslipRecord>,
}

#[derive(Serialize, ToSchema)]
pub struct PayslipSummaryResponse {
    #[schema(example = 6)]
    pub count: usize,
    #[schema(value_type = Option<String>, example = "21500.00")]
    pub thirteenth_month_estimate: Option<Money>,
    #[schema(example = "₱21,500.00", nullable = true)]
    pub thirteenth_month_display: Option<String>,
    pub net_pay_history: Vec<NetPayPoint>,
}

/// Full breakdown of one payslip
#[utoipa::path(
    post,
    path = "/api/v1/payslips/breakdown",
    request_body = PayslipRecord,
    responses(
        (status = 200, description = "Payslip breakdown", body = PayslipBreakdownResponse),
        (status = 422, description = "Invalid payslip figures")
    ),
    tag = "Payslip"
)]
pub async fn breakdown(
    cache: web::Data<ContributionCache>,
    payload: web::Json<PayslipRecord>,
) -> actix_web::Result<impl Responder> {
    let record = payload.into_inner();

    let earnings = record.earnings().inspect_err(|e| {
        warn!(error = %e, payslip_id = %record.id, "Rejected payslip");
    })?;
    let breakdown = cache.breakdown_with(&record, &earnings).await?;
    let rules = cache.aggregator().rules();

    info!(
        payslip_id = %record.id,
        net_pay = %breakdown.net_pay,
        "Payslip breakdown computed"
    );

    Ok(HttpResponse::Ok().json(PayslipBreakdownResponse {
        id: record.id,
        period_label: record.period.label(),
        summary: PaySummary::from(&breakdown),
        contributions: breakdown
            .contributions
            .iter()
            .cloned()
            .map(|b| ContributionView::new(b, rules))
            .collect(),
        earnings_composition: earnings_composition(&earnings),
        deductions_composition: deductions_composition(&breakdown),
        breakdown,
    }))
}

/// Summary across several payslips
#[utoipa::path(
    post,
    path = "/api/v1/payslips/summary",
    request_body = PayslipSummaryRequest,
    responses(
        (status = 200, description = "13th-month estimate and net pay history", body = PayslipSummaryResponse),
        (status = 422, description = "A payslip has invalid figures")
    ),
    tag = "Payslip"
)]
pub async fn summary(
    cache: web::Data<ContributionCache>,
    payload: web::Json<PayslipSummaryRequest>,
) -> actix_web::Result<impl Responder> {
    let payslips = &payload.payslips;

    let breakdowns =
        futures::future::try_join_all(payslips.iter().map(|p| cache.breakdown(p))).await?;
    let estimate = thirteenth_month_estimate(payslips)?;

    info!(count = payslips.len(), "Payslip summary computed");

    Ok(HttpResponse::Ok().json(PayslipSummaryResponse {
        count: payslips.len(),
        thirteenth_month_display: estimate.map(|m| format_peso(m.amount())),
        thirteenth_month_estimate: estimate,
        net_pay_history: net_pay_history(payslips.iter().zip(breakdowns.iter())),
    }))
}
