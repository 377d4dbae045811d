// Access policy engine
// Decision: Anonymous readers get a fixed number of free article views per session
// Decision: The counter is bumped before the comparison, so the 4th view is the first denial
// Decision: Member-only routes never touch the counter
//
// The `evaluate_*` methods are pure decisions over a lookup result. The async
// methods perform the lookup against a ContentStore and then decide.
//
// Counter updates are a read-modify-write on the caller's session value.
// Two concurrent requests carrying the same session can both read the old
// count; callers that need exact counting must serialize per session.

use crate::article::Article;
use crate::error::{GateError, Result};
use crate::session::ViewerSession;
use crate::traits::ContentStore;

/// Free article views per anonymous session
pub const MAX_ANONYMOUS_PAGE_VIEWS: u32 = 3;

/// Why an article was withheld
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    ViewCapExceeded,
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DenialReason::ViewCapExceeded => write!(f, "Maximum pageview limit reached"),
        }
    }
}

/// Outcome of the general show-article path
#[derive(Debug, Clone, PartialEq)]
pub enum ArticleAccess {
    Allow(Article),
    Denied(DenialReason),
    NotFound,
}

impl ArticleAccess {
    pub fn is_allowed(&self) -> bool {
        matches!(self, ArticleAccess::Allow(_))
    }

    /// Collapse into the error taxonomy
    pub fn into_result(self) -> Result<Article> {
        match self {
            ArticleAccess::Allow(article) => Ok(article),
            ArticleAccess::Denied(DenialReason::ViewCapExceeded) => {
                Err(GateError::ViewCapExceeded)
            }
            ArticleAccess::NotFound => Err(GateError::article_not_found()),
        }
    }
}

/// Outcome of the member-only show-article path
#[derive(Debug, Clone, PartialEq)]
pub enum MemberAccess {
    Allow(Article),
    Unauthorized,
    NotFound,
}

impl MemberAccess {
    /// Collapse into the error taxonomy
    pub fn into_result(self) -> Result<Article> {
        match self {
            MemberAccess::Allow(article) => Ok(article),
            MemberAccess::Unauthorized => Err(GateError::unauthorized()),
            MemberAccess::NotFound => Err(GateError::article_not_found()),
        }
    }
}

/// Metered access policy
#[derive(Debug, Clone, Copy)]
pub struct AccessPolicy {
    max_anonymous_views: u32,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            max_anonymous_views: MAX_ANONYMOUS_PAGE_VIEWS,
        }
    }
}

impl AccessPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether `session` may read `article`
    ///
    /// A missing article never consumes a view. Authenticated sessions are
    /// always allowed, member-only content included. Anonymous sessions are
    /// charged one view, and the charge sticks even when the view is denied.
    pub fn evaluate_article_access(
        &self,
        session: &mut ViewerSession,
        article: Option<Article>,
    ) -> ArticleAccess {
        let Some(article) = article else {
            return ArticleAccess::NotFound;
        };

        if session.is_authenticated() {
            return ArticleAccess::Allow(article);
        }

        let views = session.bump_page_views();
        if views <= self.max_anonymous_views {
            tracing::debug!(article_id = article.id, views, "Anonymous view allowed");
            ArticleAccess::Allow(article)
        } else {
            tracing::debug!(article_id = article.id, views, "Anonymous view cap reached");
            ArticleAccess::Denied(DenialReason::ViewCapExceeded)
        }
    }

    /// Decide whether `session` may read a member-only article
    pub fn evaluate_member_only_access(
        &self,
        session: &ViewerSession,
        article: Option<Article>,
    ) -> MemberAccess {
        if !session.is_authenticated() {
            return MemberAccess::Unauthorized;
        }
        match article {
            Some(article) => MemberAccess::Allow(article),
            None => MemberAccess::NotFound,
        }
    }

    /// Look up an article and run it through the metered policy
    pub async fn show_article<S>(
        &self,
        store: &S,
        session: &mut ViewerSession,
        article_id: i64,
    ) -> Result<ArticleAccess>
    where
        S: ContentStore + ?Sized,
    {
        let article = store.find_article_by_id(article_id).await?;
        Ok(self.evaluate_article_access(session, article))
    }

    /// Look up a member-only article; anonymous sessions are rejected before
    /// the store is queried
    pub async fn show_member_only_article<S>(
        &self,
        store: &S,
        session: &ViewerSession,
        article_id: i64,
    ) -> Result<MemberAccess>
    where
        S: ContentStore + ?Sized,
    {
        if !session.is_authenticated() {
            return Ok(MemberAccess::Unauthorized);
        }
        let article = store.find_article_by_id(article_id).await?;
        Ok(self.evaluate_member_only_access(session, article))
    }

    /// All member-only articles, for authenticated sessions only
    pub async fn list_member_only_articles<S>(
        &self,
        store: &S,
        session: &ViewerSession,
    ) -> Result<Vec<Article>>
    where
        S: ContentStore + ?Sized,
    {
        if !session.is_authenticated() {
            return Err(GateError::unauthorized());
        }
        store.list_member_only_articles().await
    }

    /// Public listing; no access check and no counting
    pub async fn list_articles<S>(&self, store: &S) -> Result<Vec<Article>>
    where
        S: ContentStore + ?Sized,
    {
        store.list_articles().await
    }
}
