// Storage layer for the Gazette API
// Decision: Support both PostgreSQL (production) and in-memory (dev mode)
//
// - Database: sqlx repository over PostgreSQL
// - StorageBackend: enum over both backends, implements ContentStore
// - seed: sample content for dev mode and empty databases

pub mod backend;
pub mod models;
pub mod repositories;
pub mod seed;

pub use backend::StorageBackend;
pub use models::*;
pub use repositories::Database;
