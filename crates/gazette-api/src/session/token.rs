// Session token service
// Decision: Use HS256 for simplicity (symmetric key, server-only verification)
// Decision: Re-issuing the cookie on every mutation also slides its expiry

use anyhow::{Context, Result};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use gazette_core::ViewerSession;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Claims carried by the session token
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_views: Option<u32>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl From<SessionClaims> for ViewerSession {
    fn from(claims: SessionClaims) -> Self {
        ViewerSession {
            user_id: claims.user_id,
            page_views: claims.page_views,
        }
    }
}

/// Signs and verifies session cookies
#[derive(Clone)]
pub struct SessionTokenService {
    config: SessionConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionTokenService {
    pub fn new(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Encode a session into a signed token
    pub fn encode(&self, session: &ViewerSession) -> Result<String> {
        let now = Utc::now();
        let exp = Duration::from_std(self.config.max_age)
            .ok()
            .and_then(|max_age| now.checked_add_signed(max_age))
            .context("Session max age out of range")?;

        let claims = SessionClaims {
            user_id: session.user_id,
            page_views: session.page_views,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("Failed to encode session token")
    }

    /// Verify and decode a session token
    pub fn decode(&self, token: &str) -> Result<ViewerSession> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .context("Invalid session token")?;

        Ok(token_data.claims.into())
    }

    /// Read the session from the request cookies
    pub fn load(&self, jar: &CookieJar) -> ViewerSession {
        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            return ViewerSession::new();
        };

        self.decode(cookie.value()).unwrap_or_else(|e| {
            tracing::debug!("Discarding session cookie: {:#}", e);
            ViewerSession::new()
        })
    }

    /// Write the session into the response cookies
    pub fn store(&self, jar: CookieJar, session: &ViewerSession) -> Result<CookieJar> {
        let token = self.encode(session)?;

        let cookie = Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .secure(self.config.secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(self.max_age_secs()))
            .build();

        Ok(jar.add(cookie))
    }

    /// Session lifetime in seconds
    pub fn max_age_secs(&self) -> i64 {
        self.config.max_age.as_secs() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration as StdDuration;

    fn test_config() -> SessionConfig {
        SessionConfig {
            secret: "test-secret-key-for-testing".to_string(),
            max_age: StdDuration::from_secs(3600),
            secure: false,
        }
    }

    #[test]
    fn test_encode_decode_session() {
        let service = SessionTokenService::new(test_config());
        let session = ViewerSession {
            user_id: Some(7),
            page_views: Some(2),
        };

        let token = service.encode(&session).unwrap();
        assert!(!token.is_empty());
        assert_eq!(service.decode(&token).unwrap(), session);
    }

    #[test]
    fn test_empty_session_omits_fields() {
        let service = SessionTokenService::new(test_config());
        let token = service.encode(&ViewerSession::new()).unwrap();

        let decoded = service.decode(&token).unwrap();
        assert_eq!(decoded, ViewerSession::new());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let service = SessionTokenService::new(test_config());
        let other = SessionTokenService::new(SessionConfig {
            secret: "another-secret".to_string(),
            ..test_config()
        });

        let token = other
            .encode(&ViewerSession {
                user_id: Some(1),
                page_views: None,
            })
            .unwrap();
        assert!(service.decode(&token).is_err());
    }

    #[test]
    fn test_invalid_token() {
        let service = SessionTokenService::new(test_config());
        assert!(service.decode("invalid-token").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = SessionTokenService::new(test_config());
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            user_id: Some(1),
            page_views: None,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret-key-for-testing"),
        )
        .unwrap();

        assert!(service.decode(&token).is_err());
    }

    #[test]
    fn test_out_of_range_max_age_is_an_error() {
        let service = SessionTokenService::new(SessionConfig {
            max_age: StdDuration::from_secs(9_000_000_000_000),
            ..test_config()
        });

        let err = service.encode(&ViewerSession::new()).unwrap_err();
        assert!(err.to_string().contains("max age out of range"));

        let jar = CookieJar::new();
        assert!(service.store(jar, &ViewerSession::new()).is_err());
    }

    #[test]
    fn test_load_falls_back_to_empty_session() {
        let service = SessionTokenService::new(test_config());

        let jar = CookieJar::new();
        assert_eq!(service.load(&jar), ViewerSession::new());

        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "garbage"));
        assert_eq!(service.load(&jar), ViewerSession::new());
    }

    #[test]
    fn test_store_then_load() {
        let service = SessionTokenService::new(test_config());
        let session = ViewerSession {
            user_id: None,
            page_views: Some(3),
        };

        let jar = service.store(CookieJar::new(), &session).unwrap();
        let cookie = jar.get(SESSION_COOKIE).unwrap();
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));

        assert_eq!(service.load(&jar), session);
    }
}
