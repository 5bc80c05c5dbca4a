use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use payslip_engine::cache::ContributionCache;
use payslip_engine::config::Config;
use payslip_engine::contribution::ContributionRules;
use payslip_engine::docs::ApiDoc;
use payslip_engine::payslip::PayslipAggregator;
use payslip_engine::routes;

use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "payslip-engine.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(
        mpf_accounting = ?config.mpf_accounting(),
        "Server starting..."
    );

    let rules = ContributionRules::default().with_mpf_accounting(config.mpf_accounting());
    let cache = ContributionCache::new(
        PayslipAggregator::new(rules),
        config.contribution_cache_capacity,
        config.contribution_cache_ttl,
    );
    let limiter = Arc::new(routes::build_limiter(config.rate_protected_per_min)?);

    let cache_for_warmup = cache.clone();
    actix_web::rt::spawn(async move {
        cache_for_warmup.warmup_salary_credits().await;
    });

    let server_addr = config.server_addr.clone();
    let config_data = config.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(cache.clone()))
            .app_data(Data::new(config_data.clone()))
            .configure(|cfg| routes::configure(cfg, &config_data, limiter.clone()))
    })
    .bind(&server_addr)
    .with_context(|| format!("failed to bind {}", server_addr))?
    .run()
    .await?;

    Ok(())
}
