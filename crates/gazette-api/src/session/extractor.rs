// Session extractor
//
// Loads the viewer session from the request cookie. Handlers mutate
// `session.data` through the core policy/lifecycle and call `save` to get the
// cookie jar that goes back on the response.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use gazette_core::ViewerSession;
use std::convert::Infallible;
use std::sync::Arc;

use super::token::SessionTokenService;

/// The caller's session plus what is needed to write it back
pub struct Session {
    pub data: ViewerSession,
    jar: CookieJar,
    tokens: Arc<SessionTokenService>,
}

impl Session {
    /// Encode the (possibly mutated) session into the response cookie jar
    pub fn save(self) -> anyhow::Result<CookieJar> {
        self.tokens.store(self.jar, &self.data)
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    Arc<SessionTokenService>: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let tokens = Arc::<SessionTokenService>::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let data = tokens.load(&jar);

        Ok(Session { data, jar, tokens })
    }
}
