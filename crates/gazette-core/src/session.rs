// Viewer session
//
// Per-client state carried between requests. The transport owns loading and
// saving; everything in this crate only reads and mutates the value.

use serde::{Deserialize, Serialize};

/// Derived lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No user and the view counter has never been set
    AnonymousUnseen,
    /// No user, counter present
    AnonymousCounting,
    /// A user id is stored
    Authenticated,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::AnonymousUnseen => write!(f, "anonymous_unseen"),
            SessionState::AnonymousCounting => write!(f, "anonymous_counting"),
            SessionState::Authenticated => write!(f, "authenticated"),
        }
    }
}

/// Session fields for one client
///
/// `page_views` only moves while `user_id` is absent. Logging in or out
/// leaves it alone; only [`ViewerSession::clear`] resets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerSession {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub page_views: Option<u32>,
}

impl ViewerSession {
    /// Empty session, as seen on first contact
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn state(&self) -> SessionState {
        match (self.user_id, self.page_views) {
            (Some(_), _) => SessionState::Authenticated,
            (None, Some(_)) => SessionState::AnonymousCounting,
            (None, None) => SessionState::AnonymousUnseen,
        }
    }

    /// Count one more anonymous view and return the new total
    pub(crate) fn bump_page_views(&mut self) -> u32 {
        let views = self.page_views.unwrap_or(0).saturating_add(1);
        self.page_views = Some(views);
        views
    }

    /// Reset both fields in place
    pub fn clear(&mut self) {
        self.user_id = None;
        self.page_views = None;
    }
}
