// Error types for access decisions and session transitions

use thiserror::Error;

/// Result type alias for gate operations
pub type Result<T> = std::result::Result<T, GateError>;

/// Errors surfaced by the access policy and session lifecycle
#[derive(Debug, Error)]
pub enum GateError {
    /// Article or user does not exist
    #[error("{0}")]
    NotFound(String),

    /// No session user, an unresolvable session user, or a failed login
    #[error("{0}")]
    Unauthenticated(String),

    /// Anonymous reader used up their free views
    #[error("Maximum pageview limit reached")]
    ViewCapExceeded,

    /// Malformed request input
    #[error("{0}")]
    Validation(String),

    /// Repository failure
    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl GateError {
    /// Create an article not found error
    pub fn article_not_found() -> Self {
        GateError::NotFound("Article not found".to_string())
    }

    /// Create an unauthorized error for member-only routes and session checks
    pub fn unauthorized() -> Self {
        GateError::Unauthenticated("Unauthorized".to_string())
    }

    /// Create a failed login error
    pub fn invalid_username() -> Self {
        GateError::Unauthenticated("Invalid username".to_string())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        GateError::Validation(msg.into())
    }

    /// Machine-readable kind, stable across releases
    pub fn kind(&self) -> &'static str {
        match self {
            GateError::NotFound(_) => "not_found",
            GateError::Unauthenticated(_) => "unauthenticated",
            GateError::ViewCapExceeded => "view_cap_exceeded",
            GateError::Validation(_) => "validation_error",
            GateError::Store(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(GateError::article_not_found().to_string(), "Article not found");
        assert_eq!(GateError::unauthorized().to_string(), "Unauthorized");
        assert_eq!(
            GateError::ViewCapExceeded.to_string(),
            "Maximum pageview limit reached"
        );
    }

    #[test]
    fn test_cap_and_unauthenticated_are_distinct_kinds() {
        assert_ne!(
            GateError::ViewCapExceeded.kind(),
            GateError::unauthorized().kind()
        );
        assert_eq!(GateError::validation("bad").kind(), "validation_error");
        assert_eq!(GateError::from(anyhow::anyhow!("boom")).kind(), "internal");
    }
}
