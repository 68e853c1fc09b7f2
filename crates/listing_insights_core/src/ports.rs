//! crates/listing_insights_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like databases or APIs.

use crate::domain::UserCredentials;
use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Persistence boundary for login identities.
///
/// Implementations own their connection lifecycle; callers may assume each
/// operation is atomic but nothing more.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts or overwrites the record for `username`, creating the
    /// backing schema if it does not exist yet.
    async fn upsert_user(&self, username: &str, password_hash: &str) -> PortResult<()>;

    /// Fetches the stored credentials for `username`, or `None` when no
    /// such user exists. Errors are reserved for store failures.
    async fn find_user(&self, username: &str) -> PortResult<Option<UserCredentials>>;
}

/// Boundary for the external text-generation model.
#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Submits a prompt and returns the model's raw text output.
    async fn generate_text(&self, prompt: &str) -> PortResult<String>;
}
