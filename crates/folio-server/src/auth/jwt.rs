// JWT identity provider
// Decision: HS256 with a secret shared with the provider (symmetric key)
// Decision: A bad or expired token is treated as "not signed in", never as an
// error page; the admin gate then sends the caller to sign in again

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use axum_extra::extract::CookieJar;
use chrono::{Duration, Utc};
use folio_core::{CurrentUser, Identity};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use url::Url;

use super::config::AuthConfig;
use super::provider::IdentityProvider;

/// Claims carried by provider tokens
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// Subject (provider user ID)
    pub sub: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

#[derive(Clone)]
pub struct JwtIdentityProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    login_url: Url,
    logout_url: Option<Url>,
    cookie_name: String,
    admin_role: String,
}

impl JwtIdentityProvider {
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        let login_url = config
            .login_url
            .clone()
            .ok_or_else(|| anyhow!("JWT identity provider needs a login URL"))?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            login_url,
            logout_url: config.logout_url.clone(),
            cookie_name: config.cookie_name.clone(),
            admin_role: config.admin_role.clone(),
        })
    }

    /// Sign a token for `user`. Used by the `issue-token` tool and tests; in
    /// production the provider issues tokens itself.
    pub fn issue_token(
        &self,
        user: &CurrentUser,
        roles: &[String],
        lifetime: Duration,
    ) -> Result<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            roles: roles.to_vec(),
            exp: (now + lifetime).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).context("Failed to encode token")
    }

    /// Validate a token and return its claims
    pub fn validate_token(&self, token: &str) -> Result<TokenClaims> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .context("Invalid token")?;
        Ok(data.claims)
    }

    fn token_from_headers(&self, headers: &HeaderMap) -> Option<String> {
        let bearer = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string);

        bearer.or_else(|| {
            CookieJar::from_headers(headers)
                .get(&self.cookie_name)
                .map(|cookie| cookie.value().to_string())
        })
    }
}

fn with_continue(base: &Url, return_to: &str) -> String {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("continue", return_to);
    url.into()
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn identify(&self, headers: &HeaderMap) -> Result<Identity> {
        let Some(token) = self.token_from_headers(headers) else {
            return Ok(Identity::anonymous());
        };

        match self.validate_token(&token) {
            Ok(claims) => {
                let is_admin = claims.roles.iter().any(|r| r == &self.admin_role);
                let user = CurrentUser {
                    id: claims.sub,
                    email: claims.email,
                    name: claims.name,
                };
                Ok(Identity::signed_in(user, is_admin))
            }
            Err(e) => {
                tracing::debug!("Token validation failed: {:#}", e);
                Ok(Identity::anonymous())
            }
        }
    }

    fn login_url(&self, return_to: &str) -> String {
        with_continue(&self.login_url, return_to)
    }

    fn logout_url(&self, return_to: &str) -> String {
        match &self.logout_url {
            Some(url) => with_continue(url, return_to),
            None => return_to.to_string(),
        }
    }

    fn cookie_name(&self) -> Option<&str> {
        Some(&self.cookie_name)
    }

    fn name(&self) -> &'static str {
        "jwt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthMode;
    use axum::http::HeaderValue;

    fn config() -> AuthConfig {
        AuthConfig {
            mode: AuthMode::Jwt,
            jwt_secret: "test-secret".to_string(),
            login_url: Some("https://accounts.example.com/login".parse().unwrap()),
            logout_url: Some("https://accounts.example.com/logout".parse().unwrap()),
            ..Default::default()
        }
    }

    fn user() -> CurrentUser {
        CurrentUser {
            id: "98211821748316341".to_string(),
            email: "admin@localhost".to_string(),
            name: "Admin".to_string(),
        }
    }

    fn cookie_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("access_token={token}")).unwrap(),
        );
        headers
    }

    #[tokio::test]
    async fn test_admin_token_from_cookie() {
        let provider = JwtIdentityProvider::from_config(&config()).unwrap();
        let token = provider
            .issue_token(&user(), &["admin".to_string()], Duration::hours(1))
            .unwrap();

        let identity = provider.identify(&cookie_headers(&token)).await.unwrap();

        assert!(identity.is_authenticated());
        assert!(identity.is_admin());
        assert_eq!(identity.user().unwrap().email, "admin@localhost");
    }

    #[tokio::test]
    async fn test_non_admin_token_from_bearer_header() {
        let provider = JwtIdentityProvider::from_config(&config()).unwrap();
        let token = provider
            .issue_token(&user(), &["reader".to_string()], Duration::hours(1))
            .unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        let identity = provider.identify(&headers).await.unwrap();

        assert!(identity.is_authenticated());
        assert!(!identity.is_admin());
    }

    #[tokio::test]
    async fn test_no_token_is_anonymous() {
        let provider = JwtIdentityProvider::from_config(&config()).unwrap();
        let identity = provider.identify(&HeaderMap::new()).await.unwrap();
        assert_eq!(identity, Identity::anonymous());
    }

    #[tokio::test]
    async fn test_expired_token_is_anonymous() {
        let provider = JwtIdentityProvider::from_config(&config()).unwrap();
        let token = provider
            .issue_token(&user(), &["admin".to_string()], Duration::hours(-2))
            .unwrap();

        let identity = provider.identify(&cookie_headers(&token)).await.unwrap();

        assert!(!identity.is_authenticated());
        assert!(!identity.is_admin());
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_anonymous() {
        let other = JwtIdentityProvider::from_config(&AuthConfig {
            jwt_secret: "other-secret".to_string(),
            ..config()
        })
        .unwrap();
        let token = other
            .issue_token(&user(), &["admin".to_string()], Duration::hours(1))
            .unwrap();

        let provider = JwtIdentityProvider::from_config(&config()).unwrap();
        let identity = provider.identify(&cookie_headers(&token)).await.unwrap();

        assert!(!identity.is_admin());
    }

    #[tokio::test]
    async fn test_custom_admin_role() {
        let provider = JwtIdentityProvider::from_config(&AuthConfig {
            admin_role: "editor".to_string(),
            ..config()
        })
        .unwrap();
        let token = provider
            .issue_token(&user(), &["editor".to_string()], Duration::hours(1))
            .unwrap();

        let identity = provider.identify(&cookie_headers(&token)).await.unwrap();

        assert!(identity.is_admin());
    }

    #[test]
    fn test_login_and_logout_urls() {
        let provider = JwtIdentityProvider::from_config(&config()).unwrap();

        let login = Url::parse(&provider.login_url("http://localhost:8080/blog/settings")).unwrap();
        assert_eq!(login.path(), "/login");
        let target: Vec<_> = login.query_pairs().collect();
        assert_eq!(target.len(), 1);
        assert_eq!(target[0].0, "continue");
        assert_eq!(target[0].1, "http://localhost:8080/blog/settings");

        let logout = Url::parse(&provider.logout_url("http://localhost:8080/")).unwrap();
        assert_eq!(logout.path(), "/logout");
        assert_eq!(
            logout.query_pairs().next().unwrap().1,
            "http://localhost:8080/"
        );
    }

    #[test]
    fn test_logout_without_provider_url() {
        let provider = JwtIdentityProvider::from_config(&AuthConfig {
            logout_url: None,
            ..config()
        })
        .unwrap();
        assert_eq!(
            provider.logout_url("http://localhost:8080/"),
            "http://localhost:8080/"
        );
    }

    #[test]
    fn test_requires_login_url() {
        let result = JwtIdentityProvider::from_config(&AuthConfig {
            login_url: None,
            ..config()
        });
        assert!(result.is_err());
    }
}
