//! Snippet use-cases: reads, creation, and owner-guarded mutation.

use std::sync::Arc;

use tracing::{error, info};

use super::ports::{SnippetPersistenceError, SnippetRepository};
use super::{Error, NewSnippet, Snippet, SnippetChanges, SnippetId, UserId};

/// Service wrapping a [`SnippetRepository`].
#[derive(Clone)]
pub struct SnippetService {
    snippets: Arc<dyn SnippetRepository>,
}

fn map_persistence_error(err: SnippetPersistenceError) -> Error {
    error!(error = %err, "snippet repository failure");
    Error::internal(format!("snippet storage failed: {err}"))
}

fn not_found(id: SnippetId) -> Error {
    Error::not_found(format!("snippet {id} not found"))
}

impl SnippetService {
    pub fn new(snippets: Arc<dyn SnippetRepository>) -> Self {
        Self { snippets }
    }

    /// Total number of snippets.
    pub async fn count(&self) -> Result<usize, Error> {
        self.snippets.count().await.map_err(map_persistence_error)
    }

    /// A window of snippets in listing order.
    pub async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Snippet>, Error> {
        self.snippets
            .list(offset, limit)
            .await
            .map_err(map_persistence_error)
    }

    /// Snippets owned by `owner`, in listing order.
    pub async fn owned_by(&self, owner: UserId) -> Result<Vec<Snippet>, Error> {
        self.snippets
            .list_by_owner(owner)
            .await
            .map_err(map_persistence_error)
    }

    /// Fetch one snippet or fail with `not_found`.
    pub async fn get(&self, id: SnippetId) -> Result<Snippet, Error> {
        self.snippets
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| not_found(id))
    }

    /// Store a new snippet owned by `owner`.
    pub async fn create(&self, owner: UserId, fields: NewSnippet) -> Result<Snippet, Error> {
        let snippet = self
            .snippets
            .insert(owner, fields)
            .await
            .map_err(map_persistence_error)?;
        info!(snippet_id = %snippet.id(), owner = %owner, "snippet created");
        Ok(snippet)
    }

    /// Merge `changes` into a snippet owned by `actor`.
    ///
    /// Fails with `not_found` for unknown ids and `forbidden` when `actor`
    /// does not own the snippet.
    pub async fn update(
        &self,
        actor: UserId,
        id: SnippetId,
        changes: SnippetChanges,
    ) -> Result<Snippet, Error> {
        let mut snippet = self.get_owned(actor, id).await?;
        snippet.apply(changes);
        let saved = self
            .snippets
            .save(&snippet)
            .await
            .map_err(map_persistence_error)?;
        if !saved {
            return Err(not_found(id));
        }
        info!(snippet_id = %id, "snippet updated");
        Ok(snippet)
    }

    /// Delete a snippet owned by `actor`.
    pub async fn delete(&self, actor: UserId, id: SnippetId) -> Result<(), Error> {
        self.get_owned(actor, id).await?;
        let deleted = self
            .snippets
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        if !deleted {
            return Err(not_found(id));
        }
        info!(snippet_id = %id, "snippet deleted");
        Ok(())
    }

    /// Fetch a snippet that `actor` may modify.
    ///
    /// Fails with `not_found` for unknown ids and `forbidden` for snippets
    /// owned by someone else.
    pub async fn get_owned(&self, actor: UserId, id: SnippetId) -> Result<Snippet, Error> {
        let snippet = self.get(id).await?;
        if snippet.owner() != actor {
            return Err(Error::forbidden(
                "You do not have permission to perform this action.",
            ));
        }
        Ok(snippet)
    }
}
