// Framework bootstrap for the products front end.

use crate::frameworks::config::Settings;
use crate::interface_adapters::clients::products::ProductsClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::{io::Result, sync::Arc};

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, settings: Settings) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(&settings).await?;
    let app = routes::app(state);

    tracing::info!(%address, api_url = %settings.api_url, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let settings = Settings::load().inspect_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
    })?;
    let address = settings.listen_addr();

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, settings).await
}

async fn build_state(settings: &Settings) -> Result<Arc<AppState>> {
    let client = ProductsClient::new(
        settings.api_url.clone(),
        settings.api_timeout,
        settings.accept_invalid_certs,
    )
    .map_err(|e| std::io::Error::other(format!("failed to initialize products client: {e}")))?;
    tracing::debug!(
        api_url = %client.base_url(),
        api_timeout_ms = settings.api_timeout.as_millis(),
        accept_invalid_certs = settings.accept_invalid_certs,
        "products client configured"
    );

    // Each browser session loads the list when it is first served.
    Ok(Arc::new(AppState::new(Arc::new(client))))
}
