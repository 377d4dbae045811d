// HTTP API routes
//
// Route handlers for the public API. Every module shares the crate-level
// AppState and reads the viewer session through the `Session` extractor.

pub mod articles;
pub mod common;
pub mod error;
pub mod members;
pub mod sessions;

// Re-export common types
pub use common::ErrorResponse;
pub use error::ApiError;
