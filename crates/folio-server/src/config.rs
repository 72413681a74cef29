// Server configuration loaded from environment variables
// Decision: .env files are loaded by main via dotenvy before this runs
// Decision: Without DATABASE_URL the site runs on in-memory storage (dev mode)

use crate::auth::AuthConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configuration errors reported at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable required")]
    Missing(&'static str),
    #[error("{key} is not a valid URL: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// Public base URL, used to build absolute return targets for the
    /// identity provider
    pub base_url: String,
    /// PostgreSQL URL; None selects in-memory storage
    pub database_url: Option<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let auth = AuthConfig::from_vars(&var)?;
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let base_url = var("FOLIO_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&base_url).map_err(|source| ConfigError::InvalidUrl {
            key: "FOLIO_BASE_URL",
            source,
        })?;

        Ok(Self {
            bind_addr: var("FOLIO_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            base_url: base_url.trim_end_matches('/').to_string(),
            database_url: var("DATABASE_URL"),
            auth,
        })
    }
}
