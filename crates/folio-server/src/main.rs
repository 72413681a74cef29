// Folio server
// Decision: Without DATABASE_URL the site runs on in-memory storage; content
// is lost on restart

use anyhow::{Context, Result};
use folio_server::auth::{provider_from_config, AuthState};
use folio_server::config::ServerConfig;
use folio_server::{build_router, AppState};
use folio_storage::StorageBackend;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("folio_server=debug,folio_storage=info,tower_http=debug")
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Folio server...");

    let config = ServerConfig::from_env().context("Invalid configuration")?;

    let storage = match &config.database_url {
        Some(url) => StorageBackend::postgres(url)
            .await
            .context("Failed to connect to database")?,
        None => StorageBackend::in_memory(),
    };
    if storage.is_dev_mode() {
        tracing::warn!("DATABASE_URL not set, using in-memory storage (dev mode)");
    } else {
        tracing::info!("Connected to database, migrations applied");
    }

    let provider =
        provider_from_config(&config.auth).context("Failed to set up identity provider")?;
    tracing::info!(
        auth_mode = %config.auth.mode.as_str(),
        provider = provider.name(),
        "Identity provider configured"
    );
    let auth = AuthState::new(provider, &config.base_url);

    let app = build_router(AppState::new(storage, auth));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Folio listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
