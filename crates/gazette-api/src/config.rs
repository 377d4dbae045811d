// Server configuration loaded from environment variables.
// Decision: No DATABASE_URL means dev mode (in-memory store with seed content)
// Decision: Generate a random session secret when none is configured

use std::time::Duration;

/// Default session lifetime (14 days)
const DEFAULT_SESSION_MAX_AGE: Duration = Duration::from_secs(14 * 24 * 60 * 60);

/// Longest session lifetime accepted (400 days, the browser cap on cookie Max-Age)
pub const MAX_SESSION_MAX_AGE: Duration = Duration::from_secs(400 * 24 * 60 * 60);

/// Session cookie configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC key used to sign the session cookie
    pub secret: String,
    /// Cookie and token lifetime
    pub max_age: Duration,
    /// Set the `Secure` attribute on the cookie
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            max_age: DEFAULT_SESSION_MAX_AGE,
            secure: false,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// PostgreSQL URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Seed an empty PostgreSQL database with sample content
    pub seed_database: bool,
    /// Optional prefix for all content routes (e.g. "/api")
    pub api_prefix: String,
    /// Origins allowed to make credentialed cross-origin requests
    pub cors_allowed_origins: Vec<String>,
    /// Session cookie configuration
    pub session: SessionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5555".to_string(),
            database_url: None,
            seed_database: false,
            api_prefix: String::new(),
            cors_allowed_origins: Vec::new(),
            session: SessionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR")
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.bind_addr);

        let database_url = lookup("DATABASE_URL").filter(|s| !s.is_empty());

        let seed_database = lookup("SEED_DATABASE")
            .map(|s| parse_flag(&s))
            .unwrap_or(false);

        let api_prefix = lookup("API_PREFIX")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_default();

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let secret = lookup("SESSION_SECRET")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!(
                    "SESSION_SECRET not set, using a random secret (sessions reset on restart)"
                );
                use rand::Rng;
                let bytes: [u8; 32] = rand::thread_rng().gen();
                hex::encode(bytes)
            });

        let max_age = lookup("SESSION_MAX_AGE")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .map(|max_age| {
                if max_age > MAX_SESSION_MAX_AGE {
                    tracing::warn!(
                        requested_secs = max_age.as_secs(),
                        max_secs = MAX_SESSION_MAX_AGE.as_secs(),
                        "SESSION_MAX_AGE too large, clamping"
                    );
                    MAX_SESSION_MAX_AGE
                } else {
                    max_age
                }
            })
            .unwrap_or(DEFAULT_SESSION_MAX_AGE);

        let secure = lookup("SESSION_COOKIE_SECURE")
            .map(|s| parse_flag(&s))
            .unwrap_or(false);

        Self {
            bind_addr,
            database_url,
            seed_database,
            api_prefix,
            cors_allowed_origins,
            session: SessionConfig {
                secret,
                max_age,
                secure,
            },
        }
    }

    /// Check if this configuration runs without a database
    pub fn is_dev_mode(&self) -> bool {
        self.database_url.is_none()
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}
