// OpenAPI specification generation
//
// Served by the API server through Swagger UI.

use crate::api;
use gazette_core::{Article, User};
use utoipa::OpenApi;

/// OpenAPI documentation for the Gazette API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::articles::list_articles,
        api::articles::get_article,
        api::members::list_member_only_articles,
        api::members::get_member_only_article,
        api::sessions::clear_session,
        api::sessions::login,
        api::sessions::logout,
        api::sessions::check_session,
    ),
    components(
        schemas(
            Article,
            User,
            api::ErrorResponse,
            api::sessions::LoginRequest,
        )
    ),
    tags(
        (name = "articles", description = "Metered article endpoints"),
        (name = "members", description = "Member-only article endpoints"),
        (name = "sessions", description = "Login, logout and session endpoints")
    ),
    info(
        title = "Gazette API",
        version = "0.1.0",
        description = "Metered article access with cookie sessions",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/articles/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/members_only_articles"));
        assert!(paths.iter().any(|p| p.as_str() == "/login"));
    }
}
