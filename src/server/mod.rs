//! HTTP transport (spec.md §6.1/§6.2, out-of-scope "external collaborator"
//! per spec.md §1, implemented here as the CivetWeb-equivalent).

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod request;
pub mod state;

use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::web::{self, Data, JsonConfig, PayloadConfig};
use actix_web::{App, HttpServer};
use tokio::signal;
use tracing::{error, info};

use crate::config::Config;
use crate::core::StopwordSet;

use state::AppState;

/// Runs the HTTP server until a shutdown signal arrives.
pub async fn run_server() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::global();

    let stopwords = match StopwordSet::load(&config.stopwords_file) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            error!(error = %e, "failed to load stopwords");
            std::process::exit(2);
        }
    };

    let app_state = AppState { stopwords };

    let server = HttpServer::new(move || {
        let state_data = Data::new(app_state.clone());

        App::new()
            .wrap(Logger::default())
            .app_data(JsonConfig::default().limit(config.http_max_bytes))
            .app_data(PayloadConfig::new(config.http_max_bytes))
            .app_data(state_data)
            .route("/healthz", web::get().to(handlers::healthz))
            .route("/analyze", web::post().to(handlers::post_analyze))
    })
    .bind(("0.0.0.0", config.port))?
    .run();

    tokio::select! {
        res = server => {
            if let Err(e) = res {
                error!(error = %e, "server error");
            }
        }
        res = signal::ctrl_c() => {
            match res {
                Ok(()) => info!("received Ctrl+C, shutting down"),
                Err(e) => error!(error = %e, "error receiving Ctrl+C signal"),
            }
        }
    }

    info!("server shut down");
    Ok(())
}
