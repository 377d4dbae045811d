// Session lifecycle transitions
// Decision: Login is username-only (no credential check)
// Decision: Logout drops the user but keeps the anonymous view counter
//
// States: AnonymousUnseen -> AnonymousCounting -> Authenticated, with
// clear() returning any state to AnonymousUnseen.

use crate::error::{GateError, Result};
use crate::session::ViewerSession;
use crate::traits::ContentStore;
use crate::user::User;

/// Login, logout, session check and clear
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionLifecycle;

impl SessionLifecycle {
    pub fn new() -> Self {
        Self
    }

    /// Reset the session to its first-contact state
    pub fn clear(&self, session: &mut ViewerSession) {
        session.clear();
    }

    /// Authenticate by username
    ///
    /// On success only `user_id` changes; a failed login leaves the session
    /// exactly as it was.
    pub async fn login<S>(
        &self,
        store: &S,
        session: &mut ViewerSession,
        username: &str,
    ) -> Result<User>
    where
        S: ContentStore + ?Sized,
    {
        if username.trim().is_empty() {
            return Err(GateError::validation("username is required"));
        }

        let user = store
            .find_user_by_username(username)
            .await?
            .ok_or_else(GateError::invalid_username)?;

        session.user_id = Some(user.id);
        tracing::info!(user_id = user.id, "User logged in");
        Ok(user)
    }

    /// Drop the session user; succeeds whether or not anyone was logged in
    pub fn logout(&self, session: &mut ViewerSession) {
        if let Some(user_id) = session.user_id.take() {
            tracing::info!(user_id, "User logged out");
        }
    }

    /// Resolve the session user
    pub async fn check<S>(&self, store: &S, session: &ViewerSession) -> Result<User>
    where
        S: ContentStore + ?Sized,
    {
        let user_id = session.user_id.ok_or_else(GateError::unauthorized)?;
        store
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(GateError::unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryContentStore;
    use crate::session::SessionState;

    async fn store() -> InMemoryContentStore {
        let store = InMemoryContentStore::new();
        store
            .add_user(User {
                id: 1,
                username: "alice".to_string(),
            })
            .await;
        store
    }

    #[tokio::test]
    async fn test_login_sets_user_and_keeps_counter() {
        let store = store().await;
        let lifecycle = SessionLifecycle::new();
        let mut session = ViewerSession {
            user_id: None,
            page_views: Some(4),
        };

        let user = lifecycle.login(&store, &mut session, "alice").await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(session.user_id, Some(1));
        assert_eq!(session.page_views, Some(4));
        assert_eq!(session.state(), SessionState::Authenticated);
    }

    #[tokio::test]
    async fn test_failed_login_does_not_mutate() {
        let store = store().await;
        let lifecycle = SessionLifecycle::new();
        let mut session = ViewerSession {
            user_id: None,
            page_views: Some(2),
        };
        let before = session.clone();

        let result = lifecycle.login(&store, &mut session, "nonexistent").await;
        assert!(matches!(result, Err(GateError::Unauthenticated(_))));
        assert_eq!(session, before);

        let result = lifecycle.login(&store, &mut session, "  ").await;
        assert!(matches!(result, Err(GateError::Validation(_))));
        assert_eq!(session, before);
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_user() {
        let store = store().await;
        let lifecycle = SessionLifecycle::new();
        let mut session = ViewerSession {
            user_id: Some(1),
            page_views: None,
        };

        assert!(lifecycle.login(&store, &mut session, "bob").await.is_err());
        assert_eq!(session.user_id, Some(1));
    }

    #[test]
    fn test_logout_is_idempotent_and_keeps_counter() {
        let lifecycle = SessionLifecycle::new();
        let mut session = ViewerSession {
            user_id: Some(1),
            page_views: Some(3),
        };

        lifecycle.logout(&mut session);
        assert_eq!(session.user_id, None);
        assert_eq!(session.page_views, Some(3));

        lifecycle.logout(&mut session);
        assert_eq!(session.state(), SessionState::AnonymousCounting);
    }

    #[test]
    fn test_clear_resets_everything() {
        let lifecycle = SessionLifecycle::new();
        let mut session = ViewerSession {
            user_id: Some(1),
            page_views: Some(9),
        };

        lifecycle.clear(&mut session);
        assert_eq!(session.state(), SessionState::AnonymousUnseen);
    }

    #[tokio::test]
    async fn test_check_session() {
        let store = store().await;
        let lifecycle = SessionLifecycle::new();

        let anonymous = ViewerSession::new();
        assert!(matches!(
            lifecycle.check(&store, &anonymous).await,
            Err(GateError::Unauthenticated(_))
        ));

        let member = ViewerSession {
            user_id: Some(1),
            page_views: None,
        };
        assert_eq!(lifecycle.check(&store, &member).await.unwrap().id, 1);

        store.remove_user(1).await;
        assert!(matches!(
            lifecycle.check(&store, &member).await,
            Err(GateError::Unauthenticated(_))
        ));
    }
}
