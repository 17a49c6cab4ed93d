//! User read use-cases.
//!
//! A user's snippets are not stored with the user. [`UserService`] derives
//! them from the snippet repository's owner index whenever a user is read.

use std::sync::Arc;

use tracing::error;

use super::ports::{
    SnippetPersistenceError, SnippetRepository, UserPersistenceError, UserRepository,
};
use super::{Error, Snippet, User, UserId};

/// A user together with the snippets that reference it as owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSnippets {
    pub user: User,
    pub snippets: Vec<Snippet>,
}

/// Service over the user and snippet repositories.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    snippets: Arc<dyn SnippetRepository>,
}

fn map_user_error(err: UserPersistenceError) -> Error {
    error!(error = %err, "user repository failure");
    Error::internal(format!("user storage failed: {err}"))
}

fn map_snippet_error(err: SnippetPersistenceError) -> Error {
    error!(error = %err, "snippet repository failure");
    Error::internal(format!("snippet storage failed: {err}"))
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, snippets: Arc<dyn SnippetRepository>) -> Self {
        Self { users, snippets }
    }

    /// Total number of users.
    pub async fn count(&self) -> Result<usize, Error> {
        self.users.count().await.map_err(map_user_error)
    }

    /// A window of users with their snippets.
    pub async fn list(&self, offset: usize, limit: usize) -> Result<Vec<UserSnippets>, Error> {
        let users = self
            .users
            .list(offset, limit)
            .await
            .map_err(map_user_error)?;
        let mut resolved = Vec::with_capacity(users.len());
        for user in users {
            resolved.push(self.with_snippets(user).await?);
        }
        Ok(resolved)
    }

    /// Fetch one user with their snippets or fail with `not_found`.
    pub async fn get(&self, id: UserId) -> Result<UserSnippets, Error> {
        let user = self
            .users
            .find_by_id(id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(format!("user {id} not found")))?;
        self.with_snippets(user).await
    }

    /// Fetch a user without resolving snippets.
    pub async fn find(&self, id: UserId) -> Result<Option<User>, Error> {
        self.users.find_by_id(id).await.map_err(map_user_error)
    }

    async fn with_snippets(&self, user: User) -> Result<UserSnippets, Error> {
        let snippets = self
            .snippets
            .list_by_owner(user.id())
            .await
            .map_err(map_snippet_error)?;
        Ok(UserSnippets { user, snippets })
    }
}
