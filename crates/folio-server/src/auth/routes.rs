// Login and logout routes
// Decision: Both simply hand off to the identity provider, returning to the index

use axum::{extract::State, response::Response, routing::get, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use super::middleware::AuthState;
use crate::views::found;

/// Create auth routes
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    AuthState: axum::extract::FromRef<S>,
{
    Router::new()
        .route("/login", get(login))
        .route("/logout", get(logout))
}

/// GET /login - Redirect to the provider sign-in page
pub async fn login(State(auth): State<AuthState>) -> Response {
    found(&auth.login_url("/"))
}

/// GET /logout - Drop the local token cookie and redirect to the provider
/// sign-out page
pub async fn logout(State(auth): State<AuthState>, jar: CookieJar) -> (CookieJar, Response) {
    let jar = match auth.provider.cookie_name() {
        Some(name) => jar.remove(Cookie::build(name.to_string()).path("/")),
        None => jar,
    };
    (jar, found(&auth.logout_url("/")))
}
