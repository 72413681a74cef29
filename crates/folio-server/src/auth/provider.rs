// Identity provider adapter
// Decision: Providers are trait objects so the site can swap between the
// external JWT provider and the local development provider at startup

use anyhow::Result;
use async_trait::async_trait;
use axum::http::HeaderMap;
use folio_core::{CurrentUser, Identity};
use std::sync::Arc;

use super::config::{AuthConfig, AuthMode};
use super::jwt::JwtIdentityProvider;

/// Supplies identity facts for a request and builds provider URLs
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Identify the caller. Missing or invalid credentials yield the anonymous
    /// identity; errors are reserved for provider failures.
    async fn identify(&self, headers: &HeaderMap) -> Result<Identity>;

    /// URL of the provider sign-in page that returns to `return_to`
    fn login_url(&self, return_to: &str) -> String;

    /// URL of the provider sign-out page that returns to `return_to`
    fn logout_url(&self, return_to: &str) -> String;

    /// Name of the credential cookie, if the provider uses one
    fn cookie_name(&self) -> Option<&str> {
        None
    }

    fn name(&self) -> &'static str;
}

/// Local development provider: every caller is signed in as an admin
#[derive(Debug, Clone, Default)]
pub struct DevIdentityProvider;

impl DevIdentityProvider {
    pub fn user() -> CurrentUser {
        CurrentUser {
            id: "dev".to_string(),
            email: "dev@localhost".to_string(),
            name: "Developer".to_string(),
        }
    }
}

#[async_trait]
impl IdentityProvider for DevIdentityProvider {
    async fn identify(&self, _headers: &HeaderMap) -> Result<Identity> {
        Ok(Identity::signed_in(Self::user(), true))
    }

    fn login_url(&self, return_to: &str) -> String {
        return_to.to_string()
    }

    fn logout_url(&self, return_to: &str) -> String {
        return_to.to_string()
    }

    fn name(&self) -> &'static str {
        "dev"
    }
}

/// Build the provider selected by the configuration
pub fn provider_from_config(config: &AuthConfig) -> Result<Arc<dyn IdentityProvider>> {
    match config.mode {
        AuthMode::None => {
            tracing::warn!("AUTH_MODE=none: every visitor is treated as an admin");
            Ok(Arc::new(DevIdentityProvider))
        }
        AuthMode::Jwt => Ok(Arc::new(JwtIdentityProvider::from_config(config)?)),
    }
}
