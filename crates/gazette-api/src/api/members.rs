// Member-only API routes
// Decision: Member routes never touch the pageview counter, so the session
// cookie is not rewritten here

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use gazette_core::Article;

use super::{ApiError, ErrorResponse};
use crate::session::Session;
use crate::AppState;

/// Create member-only routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/members_only_articles", get(list_member_only_articles))
        .route("/members_only_articles/:id", get(get_member_only_article))
        .with_state(state)
}

/// GET /members_only_articles - List member-only articles
#[utoipa::path(
    get,
    path = "/members_only_articles",
    responses(
        (status = 200, description = "Member-only articles", body = Vec<Article>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "members"
)]
pub async fn list_member_only_articles(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state
        .policy
        .list_member_only_articles(&*state.store, &session.data)
        .await?;
    Ok(Json(articles))
}

/// GET /members_only_articles/{id} - Read any article as a member
#[utoipa::path(
    get,
    path = "/members_only_articles/{id}",
    params(
        ("id" = i64, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Article found", body = Article),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Article not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "members"
)]
pub async fn get_member_only_article(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Json<Article>, ApiError> {
    let article = state
        .policy
        .show_member_only_article(&*state.store, &session.data, id)
        .await?
        .into_result()?;
    Ok(Json(article))
}
