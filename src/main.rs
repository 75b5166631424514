#![recursion_limit = "256"]

mod config;
mod mail;
mod rate_limit;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use config::ServerConfig;
use mail::config::MailConfig;
use mail::{MailDelivery, build_mailer};
use rate_limit::RateLimiter;

const PRUNE_INTERVAL_SECS: u64 = 300;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();

    // Fall back to log-only delivery so the site still runs without mail config.
    let mail_config = MailConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "mail provider not configured; contact requests will only be logged");
        MailConfig::log_only()
    });
    let mailer = build_mailer(mail_config).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "mail provider failed to initialize; contact requests will only be logged");
        log_only_mailer()
    });
    tracing::info!(provider = mailer.provider(), phone_required = config.policy.phone_required, "mail delivery ready");

    let rate_limiter = RateLimiter::from_env();
    let limits = rate_limiter.config();
    tracing::info!(
        per_client = limits.per_client_limit,
        global = limits.global_limit,
        "contact rate limits"
    );
    let _prune = spawn_prune_task(rate_limiter.clone());

    let state = state::AppState::new(mailer, rate_limiter, config.policy);

    let app = routes::leptos_app(state).expect("leptos configuration");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "drgari listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}

fn log_only_mailer() -> Arc<dyn MailDelivery> {
    Arc::new(mail::log::LogMailer)
}

/// Periodically forget clients whose rate-limit windows have emptied.
fn spawn_prune_task(rate_limiter: RateLimiter) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(PRUNE_INTERVAL_SECS));
        loop {
            interval.tick().await;
            rate_limiter.prune_idle();
            tracing::debug!(clients = rate_limiter.tracked_clients(), "pruned idle rate-limit entries");
        }
    })
}
