// Authentication module
// Decision: Identity is owned by an external provider; this module only reads
// the facts it supplies and builds its login/logout URLs
// Decision: Admin pages are gated by an extractor that redirects to the
// provider's login page before the handler runs

pub mod config;
pub mod jwt;
pub mod middleware;
pub mod provider;
pub mod routes;

pub use config::{AuthConfig, AuthMode};
pub use jwt::{JwtIdentityProvider, TokenClaims};
pub use middleware::{AdminUser, AuthState, CurrentIdentity};
pub use provider::{provider_from_config, DevIdentityProvider, IdentityProvider};
pub use routes::routes;
