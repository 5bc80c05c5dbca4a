use actix_web::{HttpResponse, Responder, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::cache::ContributionCache;
use crate::contribution::{ContributionBreakdown, ContributionRules, Scheme};
use crate::format::{basis_note, format_peso};
use crate::money::Money;

#[derive(Deserialize, ToSchema)]
pub struct ContributionRequest {
    #[schema(example = 20000.0, value_type = f64)]
    pub gross_salary: Decimal,
}

#[derive(Serialize, ToSchema)]
pub struct ContributionView {
    pub breakdown: ContributionBreakdown,
    #[schema(example = "₱1,000.00")]
    pub employee_share_display: String,
    #[schema(example = "5.0% of MSC (₱20,000)", nullable = true)]
    pub basis_note: Option<String>,
}

impl ContributionView {
    pub fn new(breakdown: ContributionBreakdown, rules: &ContributionRules) -> Self {
        Self {
            employee_share_display: format_peso(breakdown.employee_share.amount()),
            basis_note: basis_note(&breakdown, rules),
            breakdown,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ContributionSetResponse {
    #[schema(value_type = String, example = "20000")]
    pub gross_salary: Money,
    pub contributions: Vec<ContributionView>,
    #[schema(value_type = String, example = "1900.00")]
    pub mandatory_deductions: Money,
}

/// Compute all statutory contributions
#[utoipa::path(
    post,
    path = "/api/v1/contributions",
    request_body = ContributionRequest,
    responses(
        (status = 200, description = "Contributions for every scheme", body = ContributionSetResponse),
        (status = 422, description = "Invalid salary")
    ),
    tag = "Contribution"
)]
pub async fn compute_all(
    cache: web::Data<ContributionCache>,
    payload: web::Json<ContributionRequest>,
) -> actix_web::Result<impl Responder> {
    let gross_salary = Money::validated("gross_salary", payload.gross_salary).inspect_err(|e| {
        warn!(error = %e, "Rejected contribution request");
    })?;

    let set = cache.contributions(gross_salary).await;
    let rules = cache.aggregator().rules();
    debug!(gross_salary = %gross_salary, "Computed contributions");

    Ok(HttpResponse::Ok().json(ContributionSetResponse {
        gross_salary,
        mandatory_deductions: set.mandatory_deductions(),
        contributions: set
            .iter()
            .cloned()
            .map(|b| ContributionView::new(b, rules))
            .collect(),
    }))
}

/// Compute one scheme's contribution
#[utoipa::path(
    post,
    path = "/api/v1/contributions/{scheme}",
    request_body = ContributionRequest,
    params(
        ("scheme", description = "sss, philhealth or pagibig")
    ),
    responses(
        (status = 200, description = "Contribution breakdown", body = ContributionView),
        (status = 404, description = "Unknown scheme"),
        (status = 422, description = "Invalid salary")
    ),
    tag = "Contribution"
)]
pub async fn compute_one(
    cache: web::Data<ContributionCache>,
    path: web::Path<String>,
    payload: web::Json<ContributionRequest>,
) -> actix_web::Result<impl Responder> {
    let scheme = match Scheme::from_str(&path.into_inner()) {
        Ok(s) => s,
        Err(_) => {
            return Ok(HttpResponse::NotFound().json(serde_json::json!({
                "message": "Unknown contribution scheme"
            })));
        }
    };

    let gross_salary = Money::validated("gross_salary", payload.gross_salary)?;
    let set = cache.contributions(gross_salary).await;
    let breakdown = set.get(scheme).clone();
    debug!(%scheme, gross_salary = %gross_salary, "Computed contribution");

    Ok(HttpResponse::Ok().json(ContributionView::new(
        breakdown,
        cache.aggregator().rules(),
    )))
}
