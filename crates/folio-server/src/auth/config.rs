// Authentication configuration loaded from environment variables.
// Decision: AUTH_ prefix for all identity provider settings
// Decision: Default to "none" mode for local development

use url::Url;

use crate::config::ConfigError;

/// Authentication mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// No identity provider: every caller is a local admin (development only)
    #[default]
    None,
    /// Tokens issued by an external identity provider (HS256 JWT)
    Jwt,
}

impl AuthMode {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "jwt" => AuthMode::Jwt,
            _ => AuthMode::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::None => "none",
            AuthMode::Jwt => "jwt",
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub mode: AuthMode,
    /// Shared secret used to verify provider tokens
    pub jwt_secret: String,
    /// Provider sign-in page; receives `continue=<return target>`
    pub login_url: Option<Url>,
    /// Provider sign-out page; receives `continue=<return target>`
    pub logout_url: Option<Url>,
    /// Cookie carrying the provider token
    pub cookie_name: String,
    /// Role that grants access to the admin pages
    pub admin_role: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: AuthMode::None,
            jwt_secret: String::new(),
            login_url: None,
            logout_url: None,
            cookie_name: "access_token".to_string(),
            admin_role: "admin".to_string(),
        }
    }
}

impl AuthConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let mode = var("AUTH_MODE")
            .map(|s| AuthMode::from_str(&s))
            .unwrap_or_default();

        let jwt_secret = var("AUTH_JWT_SECRET").unwrap_or_else(|| {
            if mode == AuthMode::None {
                use rand::Rng;
                let bytes: [u8; 32] = rand::thread_rng().gen();
                hex::encode(bytes)
            } else {
                tracing::warn!("AUTH_JWT_SECRET not set, using insecure default");
                "insecure-dev-secret-change-me".to_string()
            }
        });

        let login_url = var("AUTH_LOGIN_URL")
            .map(|s| parse_url("AUTH_LOGIN_URL", &s))
            .transpose()?;
        let logout_url = var("AUTH_LOGOUT_URL")
            .map(|s| parse_url("AUTH_LOGOUT_URL", &s))
            .transpose()?;

        if mode == AuthMode::Jwt && login_url.is_none() {
            return Err(ConfigError::Missing("AUTH_LOGIN_URL"));
        }

        Ok(Self {
            mode,
            jwt_secret,
            login_url,
            logout_url,
            cookie_name: var("AUTH_COOKIE_NAME").unwrap_or(defaults.cookie_name),
            admin_role: var("AUTH_ADMIN_ROLE").unwrap_or(defaults.admin_role),
        })
    }

    /// Check if an external identity provider is configured
    pub fn is_enabled(&self) -> bool {
        self.mode != AuthMode::None
    }
}

fn parse_url(key: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl { key, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_auth_mode_parsing() {
        assert_eq!(AuthMode::from_str("none"), AuthMode::None);
        assert_eq!(AuthMode::from_str("NONE"), AuthMode::None);
        assert_eq!(AuthMode::from_str("jwt"), AuthMode::Jwt);
        assert_eq!(AuthMode::from_str("JWT"), AuthMode::Jwt);
        assert_eq!(AuthMode::from_str("invalid"), AuthMode::None);
    }

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.mode, AuthMode::None);
        assert!(!config.is_enabled());
        assert_eq!(config.cookie_name, "access_token");
        assert_eq!(config.admin_role, "admin");
    }

    #[test]
    fn test_none_mode_generates_secret() {
        let config = AuthConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config.mode, AuthMode::None);
        assert_eq!(config.jwt_secret.len(), 64);
    }

    #[test]
    fn test_jwt_mode_requires_login_url() {
        let err = AuthConfig::from_vars(vars(&[("AUTH_MODE", "jwt")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("AUTH_LOGIN_URL")));
    }

    #[test]
    fn test_jwt_mode_full() {
        let config = AuthConfig::from_vars(vars(&[
            ("AUTH_MODE", "jwt"),
            ("AUTH_JWT_SECRET", "s3cret"),
            ("AUTH_LOGIN_URL", "https://accounts.example.com/login"),
            ("AUTH_LOGOUT_URL", "https://accounts.example.com/logout"),
            ("AUTH_COOKIE_NAME", "folio_token"),
            ("AUTH_ADMIN_ROLE", "editor"),
        ]))
        .unwrap();

        assert!(config.is_enabled());
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(
            config.login_url.unwrap().as_str(),
            "https://accounts.example.com/login"
        );
        assert!(config.logout_url.is_some());
        assert_eq!(config.cookie_name, "folio_token");
        assert_eq!(config.admin_role, "editor");
    }

    #[test]
    fn test_invalid_login_url() {
        let err = AuthConfig::from_vars(vars(&[
            ("AUTH_MODE", "jwt"),
            ("AUTH_LOGIN_URL", "not a url"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidUrl {
                key: "AUTH_LOGIN_URL",
                ..
            }
        ));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = AuthConfig::from_vars(vars(&[("AUTH_COOKIE_NAME", "  ")])).unwrap();
        assert_eq!(config.cookie_name, "access_token");
    }
}
