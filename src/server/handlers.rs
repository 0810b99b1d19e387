//! HTTP request handlers.

use std::time::Instant;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::{error, info};

use crate::config::Config;
use crate::core::{self, types::round_ms};

use super::error::ApiError;
use super::metrics::peak_rss_kib;
use super::request::AnalyzeRequest;
use super::state::AppState;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok().json(HealthBody { status: "ok" })
}

pub async fn post_analyze(
    body: web::Json<AnalyzeRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let start_total = Instant::now();
    let config = Config::global();

    let (pages, opts) = super::request::validate(body.into_inner(), config)?;

    info!(pages = pages.len(), "analyzing request");

    let mut result = core::analyze(&pages, &state.stopwords, &opts, config.pipeline_threshold_bytes)
        .map_err(|e| {
            error!(error = %e, "analysis failed");
            ApiError::from(e)
        })?;

    result.meta.runtime_ms_total = round_ms(start_total.elapsed().as_secs_f64() * 1000.0);
    result.meta.peak_rss_kib = peak_rss_kib();

    Ok(HttpResponse::Ok().json(result))
}
