// Blog settings pages (admin only)

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Form,
};
use folio_core::{BlogForm, FormErrors, ModelForm};
use std::sync::Arc;

use super::{found, PageContext};
use crate::auth::AdminUser;
use crate::error::AppError;
use crate::render;
use crate::services::BlogService;

const HEADING: &str = "Blog settings";

/// GET /blog/settings - Form prefilled with the current settings
pub async fn edit_blog(_admin: AdminUser, ctx: PageContext) -> Response {
    let form = BlogForm::from(&ctx.blog);
    render::form_page(&ctx, HEADING, &form.fields(&FormErrors::new())).into_response()
}

/// POST /blog/settings - Save the settings, or show the form again with errors
pub async fn update_blog(
    _admin: AdminUser,
    ctx: PageContext,
    State(blogs): State<Arc<BlogService>>,
    Form(form): Form<BlogForm>,
) -> Result<Response, AppError> {
    match form.validate() {
        Ok(settings) => {
            blogs.update(settings).await?;
            Ok(found("/"))
        }
        Err(errors) => {
            tracing::debug!(
                fields = ?errors.fields().collect::<Vec<_>>(),
                "Blog settings rejected"
            );
            Ok(render::form_page(&ctx, HEADING, &form.fields(&errors)).into_response())
        }
    }
}
