//! Port abstraction for snippet persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewSnippet, Snippet, SnippetId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by snippet repository adapters.
    pub enum SnippetPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "snippet repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "snippet repository query failed: {message}",
    }
}

/// Storage for snippets.
///
/// Listings are ordered by creation time, then identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnippetRepository: Send + Sync {
    /// Total number of stored snippets.
    async fn count(&self) -> Result<usize, SnippetPersistenceError>;

    /// Up to `limit` snippets after skipping `offset`.
    async fn list(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Snippet>, SnippetPersistenceError>;

    /// Every snippet owned by `owner`.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Snippet>, SnippetPersistenceError>;

    /// Fetch a snippet by identifier.
    async fn find_by_id(&self, id: SnippetId) -> Result<Option<Snippet>, SnippetPersistenceError>;

    /// Store a new snippet, assigning its identifier and creation time.
    async fn insert(
        &self,
        owner: UserId,
        fields: NewSnippet,
    ) -> Result<Snippet, SnippetPersistenceError>;

    /// Overwrite a stored snippet. Returns `false` when it no longer exists.
    async fn save(&self, snippet: &Snippet) -> Result<bool, SnippetPersistenceError>;

    /// Remove a snippet. Returns `false` when it did not exist.
    async fn delete(&self, id: SnippetId) -> Result<bool, SnippetPersistenceError>;
}
