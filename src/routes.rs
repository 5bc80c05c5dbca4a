use crate::{
    api::{self, contribution, payslip},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::{Context, Result};
use std::sync::Arc;

pub type RateLimiter = Governor<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter allowing `requests_per_min` with an equal burst.
pub fn build_limiter(requests_per_min: u32) -> Result<RateLimiter> {
    let per_ms = 60_000 / u64::from(requests_per_min.max(1));
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .context("rate limit must allow at least one request per minute")?;
    Ok(Governor::new(&cfg))
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: Arc<RateLimiter>) {
    // Public
    cfg.service(api::health);

    // Rate-limited
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(limiter)
            .service(
                web::scope("/v1/contributions")
                    // /v1/contributions
                    .service(web::resource("").route(web::post().to(contribution::compute_all)))
                    // /v1/contributions/{scheme}
                    .service(
                        web::resource("/{scheme}").route(web::post().to(contribution::compute_one)),
                    ),
            )
            .service(
                web::scope("/v1/payslips")
                    .service(web::resource("/breakdown").route(web::post().to(payslip::breakdown)))
                    .service(web::resource("/summary").route(web::post().to(payslip::summary))),
            ),
    );
}
