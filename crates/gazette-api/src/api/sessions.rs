// Session API routes
// Decision: Login is username-only; a failed login leaves the cookie untouched
// Decision: /clear answers both GET and DELETE

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use axum_extra::extract::CookieJar;
use gazette_core::{GateError, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ApiError, ErrorResponse};
use crate::session::Session;
use crate::AppState;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice")]
    pub username: String,
}

/// Create session routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/clear", get(clear_session).delete(clear_session))
        .route("/login", post(login))
        .route("/logout", delete(logout))
        .route("/check_session", get(check_session))
        .with_state(state)
}

/// GET|DELETE /clear - Reset the session
///
/// Forgets the logged-in user and the pageview counter.
#[utoipa::path(
    delete,
    path = "/clear",
    responses(
        (status = 204, description = "Session cleared")
    ),
    tag = "sessions"
)]
pub async fn clear_session(
    State(state): State<AppState>,
    mut session: Session,
) -> Result<(StatusCode, CookieJar), ApiError> {
    state.lifecycle.clear(&mut session.data);
    let jar = session.save().map_err(ApiError::Session)?;
    Ok((StatusCode::NO_CONTENT, jar))
}

/// POST /login - Log in by username
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = User),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unknown username", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "sessions"
)]
pub async fn login(
    State(state): State<AppState>,
    mut session: Session,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<User>), ApiError> {
    let Json(req) = payload.map_err(|e| GateError::validation(e.body_text()))?;

    let user = state
        .lifecycle
        .login(&*state.store, &mut session.data, &req.username)
        .await?;

    let jar = session.save().map_err(ApiError::Session)?;
    Ok((jar, Json(user)))
}

/// DELETE /logout - Log out
///
/// Succeeds whether or not anyone was logged in. The pageview counter is kept.
#[utoipa::path(
    delete,
    path = "/logout",
    responses(
        (status = 204, description = "Logged out")
    ),
    tag = "sessions"
)]
pub async fn logout(
    State(state): State<AppState>,
    mut session: Session,
) -> Result<(StatusCode, CookieJar), ApiError> {
    state.lifecycle.logout(&mut session.data);
    let jar = session.save().map_err(ApiError::Session)?;
    Ok((StatusCode::NO_CONTENT, jar))
}

/// GET /check_session - Current user
#[utoipa::path(
    get,
    path = "/check_session",
    responses(
        (status = 200, description = "Logged-in user", body = User),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "sessions"
)]
pub async fn check_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<User>, ApiError> {
    let user = state.lifecycle.check(&*state.store, &session.data).await?;
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_deserialize() {
        let req: LoginRequest = serde_json::from_str(r#"{"username": "alice"}"#).unwrap();
        assert_eq!(req.username, "alice");

        assert!(serde_json::from_str::<LoginRequest>(r#"{}"#).is_err());
    }
}
