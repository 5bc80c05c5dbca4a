use actix_web::web::Data;
use actix_web::{App, http::StatusCode, test};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use payslip_engine::cache::ContributionCache;
use payslip_engine::config::Config;
use payslip_engine::contribution::{ContributionRules, MpfAccounting};
use payslip_engine::payslip::PayslipAggregator;
use payslip_engine::routes;

fn peer() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

macro_rules! app {
    ($rules:expr, $rate:expr) => {{
        let config = Config {
            rate_protected_per_min: $rate,
            ..Config::default()
        };
        let cache = ContributionCache::new(
            PayslipAggregator::new($rules),
            1_000,
            Duration::from_secs(60),
        );
        let limiter = Arc::new(routes::build_limiter(config.rate_protected_per_min).unwrap());
        test::init_service(
            App::new()
                .app_data(Data::new(cache))
                .configure(|cfg| routes::configure(cfg, &config, limiter)),
        )
        .await
    }};
    () => {
        app!(ContributionRules::default(), 1000)
    };
}

fn payslip(basic_pay: i64) -> Value {
    json!({
        "id": "6f1c2b7e-8a39-4a53-9d3c-1d2f0e9b6a41",
        "period": {"start": "2025-11-01", "end": "2025-11-30"},
        "pay_date": "2025-12-05",
        "basic_pay": basic_pay,
        "employee": {"employee_id": "201", "name": "Ben Santos"}
    })
}

#[actix_web::test]
async fn health_is_public() {
    let app = app!();
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"status": "ok"}));
}

#[actix_web::test]
async fn computes_all_contributions() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/contributions")
        .peer_addr(peer())
        .set_json(json!({"gross_salary": 20000}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["mandatory_deductions"], "1900.00");
    let contributions = body["contributions"].as_array().unwrap();
    assert_eq!(contributions.len(), 3);

    let sss = &contributions[0];
    assert_eq!(sss["breakdown"]["scheme"], "sss");
    assert_eq!(sss["breakdown"]["base"], "20000");
    assert_eq!(sss["breakdown"]["total"], "3030.00");
    assert_eq!(sss["employee_share_display"], "₱1,000.00");
    assert_eq!(sss["basis_note"], "5.0% of MSC (₱20,000)");

    assert_eq!(contributions[1]["breakdown"]["scheme"], "philhealth");
    assert_eq!(contributions[2]["basis_note"], "2% Contribution");
}

#[actix_web::test]
async fn computes_single_scheme_case_insensitively() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/contributions/PhilHealth")
        .peer_addr(peer())
        .set_json(json!({"gross_salary": "50000"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["breakdown"]["scheme"], "philhealth");
    assert_eq!(body["employee_share_display"], "₱1,250.00");
    assert_eq!(body["basis_note"], "2.5% of (₱50,000.00)");
}

#[actix_web::test]
async fn unknown_scheme_is_not_found() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/contributions/gsis")
        .peer_addr(peer())
        .set_json(json!({"gross_salary": 20000}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn negative_salary_is_unprocessable() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/contributions")
        .peer_addr(peer())
        .set_json(json!({"gross_salary": -1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_input");
    assert_eq!(
        body["message"],
        "invalid gross_salary: must not be negative, got -1"
    );
}

#[actix_web::test]
async fn legacy_mpf_accounting_is_configurable() {
    let app = app!(
        ContributionRules::default().with_mpf_accounting(MpfAccounting::Legacy),
        1000
    );
    let req = test::TestRequest::post()
        .uri("/api/v1/contributions/sss")
        .peer_addr(peer())
        .set_json(json!({"gross_salary": 20000}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["breakdown"]["total"], "3060.00");
    assert_eq!(body["breakdown"]["employee_share"], "1000.00");
}

#[actix_web::test]
async fn payslip_breakdown() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/payslips/breakdown")
        .peer_addr(peer())
        .set_json(payslip(20000))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["id"], "6f1c2b7e-8a39-4a53-9d3c-1d2f0e9b6a41");
    assert_eq!(body["period_label"], "November, 2025");
    assert_eq!(body["breakdown"]["total_earnings"], "20000");
    assert_eq!(body["summary"]["mandatory_deductions"], "₱1,900.00");
    assert_eq!(body["summary"]["net_pay"], "₱18,100.00");
    assert_eq!(body["summary"]["net_salary_percentage"], "90.50%");
    assert_eq!(body["earnings_composition"][0]["label"], "Basic Pay");
    assert_eq!(body["deductions_composition"][3]["label"], "Others");
}

#[actix_web::test]
async fn payslip_with_zero_earnings_has_no_percentage() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/payslips/breakdown")
        .peer_addr(peer())
        .set_json(payslip(0))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["breakdown"]["net_salary_percentage"], Value::Null);
    assert_eq!(body["summary"]["net_pay"], "-₱500.00");
}

#[actix_web::test]
async fn payslip_with_inverted_period_is_rejected() {
    let app = app!();
    let mut slip = payslip(20000);
    slip["period"] = json!({"start": "2025-11-30", "end": "2025-11-01"});
    let req = test::TestRequest::post()
        .uri("/api/v1/payslips/breakdown")
        .peer_addr(peer())
        .set_json(slip)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_period");
}

#[actix_web::test]
async fn payslip_with_overflowing_earnings_is_rejected() {
    let app = app!();
    let mut slip = payslip(0);
    slip["basic_pay"] = json!("79228162514264337593543950335");
    slip["overtime_pay"] = json!("1");
    let req = test::TestRequest::post()
        .uri("/api/v1/payslips/breakdown")
        .peer_addr(peer())
        .set_json(slip)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_input");
    assert_eq!(
        body["message"],
        "invalid total_earnings: exceeds representable range"
    );
}

#[actix_web::test]
async fn payslip_summary() {
    let app = app!();
    let mut december = payslip(30000);
    december["period"] = json!({"start": "2025-12-01", "end": "2025-12-31"});
    let mut first_half = payslip(20000);
    first_half["period"] = json!({"start": "2025-10-01", "end": "2025-10-15"});

    let req = test::TestRequest::post()
        .uri("/api/v1/payslips/summary")
        .peer_addr(peer())
        .set_json(json!({"payslips": [december, first_half]}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 2);
    assert_eq!(body["thirteenth_month_display"], "₱25,000.00");
    let history = body["net_pay_history"].as_array().unwrap();
    assert_eq!(history[0]["label"], "Oct 1 - 15, 2025");
    assert_eq!(history[1]["label"], "December, 2025");
}

#[actix_web::test]
async fn empty_summary() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/payslips/summary")
        .peer_addr(peer())
        .set_json(json!({"payslips": []}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["thirteenth_month_estimate"], Value::Null);
    assert_eq!(body["net_pay_history"], json!([]));
}

#[actix_web::test]
async fn rate_limit_applies_per_peer() {
    let app = app!(ContributionRules::default(), 1);
    let request = || {
        test::TestRequest::post()
            .uri("/api/v1/contributions")
            .peer_addr(peer())
            .set_json(json!({"gross_salary": 20000}))
            .to_request()
    };

    let first = test::call_service(&app, request()).await;
    assert_eq!(first.status(), StatusCode::OK);
    let second = test::call_service(&app, request()).await;
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
}
