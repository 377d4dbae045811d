// Client-side session store
// Decision: The whole session travels in one signed cookie (HS256 token)
// Decision: A cookie that fails to verify is an empty session, never an error

pub mod extractor;
pub mod token;

pub use extractor::Session;
pub use token::{SessionClaims, SessionTokenService, SESSION_COOKIE};
