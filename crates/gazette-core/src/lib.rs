// Gazette core
//
// This crate holds the DB- and HTTP-agnostic half of the content API:
// - Domain entities (Article, User) shared by storage and HTTP layers
// - ViewerSession, the per-client state the transport loads and saves
// - ContentStore, the read-only repository trait backends implement
// - AccessPolicy, the metered article access decisions
// - Session lifecycle transitions (login, logout, check, clear)
//
// Key design decisions:
// - The session is passed in by `&mut` and handed back to the caller; the
//   transport decides how it is persisted
// - Decisions are plain enums; mapping to wire status codes happens at the
//   HTTP boundary
// - ViewCapExceeded and Unauthenticated are distinct error kinds even though
//   the HTTP layer reports both as 401

pub mod article;
pub mod error;
pub mod lifecycle;
pub mod memory;
pub mod policy;
pub mod session;
pub mod traits;
pub mod user;

pub use article::Article;
pub use error::{GateError, Result};
pub use lifecycle::SessionLifecycle;
pub use memory::InMemoryContentStore;
pub use policy::{
    AccessPolicy, ArticleAccess, DenialReason, MemberAccess, MAX_ANONYMOUS_PAGE_VIEWS,
};
pub use session::{SessionState, ViewerSession};
pub use traits::ContentStore;
pub use user::User;
