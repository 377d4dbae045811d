// Articles API routes
// Decision: The session cookie is written back even when a view is denied,
// so the charged view survives the 401

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use gazette_core::Article;

use super::{ApiError, ErrorResponse};
use crate::session::Session;
use crate::AppState;

/// Create articles routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/articles", get(list_articles))
        .route("/articles/:id", get(get_article))
        .with_state(state)
}

/// GET /articles - List all articles
///
/// Public listing. Does not consume a pageview.
#[utoipa::path(
    get,
    path = "/articles",
    responses(
        (status = 200, description = "All articles", body = Vec<Article>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "articles"
)]
pub async fn list_articles(State(state): State<AppState>) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state.policy.list_articles(&*state.store).await?;
    Ok(Json(articles))
}

/// GET /articles/{id} - Read an article
///
/// Anonymous readers are charged one pageview per existing article and are
/// refused once the allowance is spent. Logged-in readers are never charged.
#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(
        ("id" = i64, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Article found", body = Article),
        (status = 401, description = "Maximum pageview limit reached", body = ErrorResponse),
        (status = 404, description = "Article not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "articles"
)]
pub async fn get_article(
    State(state): State<AppState>,
    mut session: Session,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let access = state
        .policy
        .show_article(&*state.store, &mut session.data, id)
        .await?;

    let jar = session.save().map_err(ApiError::Session)?;

    let response = match access.into_result() {
        Ok(article) => (jar, Json(article)).into_response(),
        Err(e) => (jar, ApiError::from(e)).into_response(),
    };
    Ok(response)
}
