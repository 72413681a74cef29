// Shared view helpers: the page context enricher and 302 redirects

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use folio_core::{Blog, Identity};
use std::sync::Arc;

use crate::auth::{AuthState, CurrentIdentity};
use crate::error::AppError;
use crate::services::BlogService;

/// Values every page renders with: the blog and the caller's identity
#[derive(Debug, Clone)]
pub struct PageContext {
    pub blog: Blog,
    pub identity: Identity,
}

impl PageContext {
    pub fn is_admin(&self) -> bool {
        self.identity.is_admin()
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
    AuthState: FromRef<S>,
    Arc<BlogService>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentIdentity(identity) = CurrentIdentity::from_request_parts(parts, state).await?;
        let blog = Arc::<BlogService>::from_ref(state).get_unique().await?;

        Ok(PageContext { blog, identity })
    }
}

/// 302 Found redirect to `location`
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
