mod config;
mod db;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

const MAINTENANCE_INTERVAL: Duration = Duration::from_secs(15 * 60);

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    tracing::info!(
        port = config.port,
        guard_policy = ?config.guard_policy,
        contact_mail = config.resend.is_some(),
        chat_notify = config.telegram.is_some(),
        "configuration loaded"
    );
    if config.resend.is_none() {
        tracing::warn!("RESEND_* / CONTACT_INBOX not configured; contact form disabled");
    }
    if config.telegram.is_none() {
        tracing::warn!("TELEGRAM_* not configured; chat notifications disabled");
    }

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    if let Some(seed) = &config.staff_seed {
        match services::identity::upsert_staff(&pool, &seed.email, &seed.password).await {
            Ok(id) => tracing::info!(%id, email = %seed.email, "staff account ready"),
            Err(e) => tracing::error!(error = %e, email = %seed.email, "staff account seed failed"),
        }
    }

    let state = state::AppState::new(pool, &config);
    let _maintenance = spawn_maintenance(state.clone());

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "agency site listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}

/// Periodically purge expired sessions and idle rate-limit buckets.
fn spawn_maintenance(state: state::AppState) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(MAINTENANCE_INTERVAL);
        loop {
            interval.tick().await;
            state.rate_limiter.sweep();
            match services::session::purge_expired_sessions(&state.pool).await {
                Ok(0) => {}
                Ok(n) => tracing::info!(purged = n, "expired sessions removed"),
                Err(e) => tracing::warn!(error = %e, "session purge failed"),
            }
        }
    })
}
