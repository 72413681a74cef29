// Article admin pages
// Decision: An id that does not parse as a UUID is reported as 404, the same
// as an unknown article

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Form,
};
use folio_core::{ArticleForm, FormErrors, ModelForm};
use std::sync::Arc;
use uuid::Uuid;

use super::{found, PageContext};
use crate::auth::AdminUser;
use crate::error::AppError;
use crate::render;
use crate::services::ArticleService;

const NEW_HEADING: &str = "New article";
const EDIT_HEADING: &str = "Edit article";

fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::NotFound)
}

/// GET /articles/new - Empty article form
pub async fn new_article(_admin: AdminUser, ctx: PageContext) -> Response {
    let fields = ArticleForm::default().fields(&FormErrors::new());
    render::form_page(&ctx, NEW_HEADING, &fields).into_response()
}

/// POST /articles/new - Create the article and return to the index
pub async fn create_article(
    _admin: AdminUser,
    ctx: PageContext,
    State(articles): State<Arc<ArticleService>>,
    Form(form): Form<ArticleForm>,
) -> Result<Response, AppError> {
    match form.validate() {
        Ok(draft) => {
            articles.create(draft).await?;
            Ok(found("/"))
        }
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Article rejected");
            Ok(render::form_page(&ctx, NEW_HEADING, &form.fields(&errors)).into_response())
        }
    }
}

/// GET /articles/:id/edit - Form prefilled with the article
pub async fn edit_article(
    _admin: AdminUser,
    ctx: PageContext,
    State(articles): State<Arc<ArticleService>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let article = articles.get(id).await?.ok_or(AppError::NotFound)?;

    let fields = ArticleForm::from(&article).fields(&FormErrors::new());
    Ok(render::form_page(&ctx, EDIT_HEADING, &fields).into_response())
}

/// POST /articles/:id/edit - Save the article and return to the index
pub async fn update_article(
    _admin: AdminUser,
    ctx: PageContext,
    State(articles): State<Arc<ArticleService>>,
    Path(id): Path<String>,
    Form(form): Form<ArticleForm>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    if articles.get(id).await?.is_none() {
        return Err(AppError::NotFound);
    }

    match form.validate() {
        Ok(draft) => {
            articles
                .update(id, draft)
                .await?
                .ok_or(AppError::NotFound)?;
            Ok(found("/"))
        }
        Err(errors) => {
            tracing::debug!(
                article_id = %id,
                fields = ?errors.fields().collect::<Vec<_>>(),
                "Article update rejected"
            );
            Ok(render::form_page(&ctx, EDIT_HEADING, &form.fields(&errors)).into_response())
        }
    }
}

/// GET /articles/:id/delete - Ask for confirmation
pub async fn confirm_delete(
    _admin: AdminUser,
    ctx: PageContext,
    State(articles): State<Arc<ArticleService>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let article = articles.get(id).await?.ok_or(AppError::NotFound)?;

    Ok(render::confirm_delete_page(&ctx, &article).into_response())
}

/// POST /articles/:id/delete - Delete the article and return to the index
pub async fn delete_article(
    _admin: AdminUser,
    State(articles): State<Arc<ArticleService>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    if !articles.delete(id).await? {
        return Err(AppError::NotFound);
    }
    Ok(found("/"))
}
