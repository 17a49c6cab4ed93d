//! Process-local storage adapter.
//!
//! [`InMemoryStore`] implements [`SnippetRepository`], [`UserRepository`],
//! and [`LoginService`] over one shared lock. Clones share state. Snippet
//! identifiers are assigned sequentially from 1 and never reused.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::ports::{
    LoginService, SnippetPersistenceError, SnippetRepository, UserPersistenceError,
    UserRepository,
};
use crate::domain::{
    Error, LoginCredentials, NewSnippet, PasswordDigest, Snippet, SnippetId, User, UserId,
    Username,
};

struct Account {
    user: User,
    digest: PasswordDigest,
}

#[derive(Default)]
struct Tables {
    accounts: BTreeMap<UserId, Account>,
    snippets: Vec<Snippet>,
    last_user_id: u64,
    last_snippet_id: u64,
}

impl Tables {
    fn position(&self, id: SnippetId) -> Option<usize> {
        self.snippets.iter().position(|snippet| snippet.id() == id)
    }
}

/// Shared in-memory tables for users and snippets.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user with a password, returning its identifier.
    ///
    /// Registering an existing username replaces its password and keeps the
    /// identifier.
    pub async fn seed_user(&self, username: Username, password: &str) -> UserId {
        let digest = PasswordDigest::create(password);
        let mut tables = self.tables.write().await;
        if let Some(account) = tables
            .accounts
            .values_mut()
            .find(|account| account.user.username() == &username)
        {
            account.digest = digest;
            return account.user.id();
        }
        tables.last_user_id += 1;
        let id = UserId::new(tables.last_user_id);
        debug!(user_id = %id, username = %username, "user registered");
        tables.accounts.insert(
            id,
            Account {
                user: User::new(id, username),
                digest,
            },
        );
        id
    }
}

fn window<T>(items: impl Iterator<Item = T>, offset: usize, limit: usize) -> Vec<T> {
    items.skip(offset).take(limit).collect()
}

#[async_trait]
impl SnippetRepository for InMemoryStore {
    async fn count(&self) -> Result<usize, SnippetPersistenceError> {
        Ok(self.tables.read().await.snippets.len())
    }

    async fn list(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Snippet>, SnippetPersistenceError> {
        let tables = self.tables.read().await;
        Ok(window(tables.snippets.iter().cloned(), offset, limit))
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Snippet>, SnippetPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables
            .snippets
            .iter()
            .filter(|snippet| snippet.owner() == owner)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: SnippetId) -> Result<Option<Snippet>, SnippetPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.position(id).map(|index| tables.snippets[index].clone()))
    }

    async fn insert(
        &self,
        owner: UserId,
        fields: NewSnippet,
    ) -> Result<Snippet, SnippetPersistenceError> {
        let mut tables = self.tables.write().await;
        if !tables.accounts.contains_key(&owner) {
            return Err(SnippetPersistenceError::query(format!(
                "owner {owner} does not exist"
            )));
        }
        tables.last_snippet_id += 1;
        let snippet = Snippet::new(
            SnippetId::new(tables.last_snippet_id),
            owner,
            Utc::now(),
            fields,
        );
        tables.snippets.push(snippet.clone());
        tables
            .snippets
            .sort_by_key(|stored| (stored.created(), stored.id()));
        Ok(snippet)
    }

    async fn save(&self, snippet: &Snippet) -> Result<bool, SnippetPersistenceError> {
        let mut tables = self.tables.write().await;
        match tables.position(snippet.id()) {
            Some(index) => {
                tables.snippets[index] = snippet.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: SnippetId) -> Result<bool, SnippetPersistenceError> {
        let mut tables = self.tables.write().await;
        match tables.position(id) {
            Some(index) => {
                tables.snippets.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn count(&self) -> Result<usize, UserPersistenceError> {
        Ok(self.tables.read().await.accounts.len())
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<User>, UserPersistenceError> {
        let tables = self.tables.read().await;
        Ok(window(
            tables.accounts.values().map(|account| account.user.clone()),
            offset,
            limit,
        ))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables.accounts.get(&id).map(|account| account.user.clone()))
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.tables.read().await;
        Ok(tables
            .accounts
            .values()
            .find(|account| account.user.username() == username)
            .map(|account| account.user.clone()))
    }
}

#[async_trait]
impl LoginService for InMemoryStore {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let tables = self.tables.read().await;
        let account = tables
            .accounts
            .values()
            .find(|account| account.user.username().as_ref() == credentials.username());
        match account {
            Some(account) if account.digest.verify(credentials.password()) => {
                Ok(account.user.id())
            }
            _ => {
                warn!(username = credentials.username(), "login rejected");
                Err(Error::unauthorized("invalid credentials"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Behaviour of the shared in-memory tables.
    use super::*;
    use crate::domain::{Code, ErrorCode};
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryStore {
        InMemoryStore::new()
    }

    fn username(raw: &str) -> Username {
        Username::new(raw).expect("valid username")
    }

    fn fields(code: &str) -> NewSnippet {
        NewSnippet::new(Code::new(code).expect("code"))
    }

    #[rstest]
    #[tokio::test]
    async fn snippet_ids_are_sequential_and_never_reused(store: InMemoryStore) {
        let owner = store.seed_user(username("ada"), "pw").await;
        let first = store.insert(owner, fields("a")).await.expect("insert");
        let second = store.insert(owner, fields("b")).await.expect("insert");
        assert!(store.delete(second.id()).await.expect("delete"));
        let third = store.insert(owner, fields("c")).await.expect("insert");

        assert_eq!(first.id().get(), 1);
        assert_eq!(second.id().get(), 2);
        assert_eq!(third.id().get(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn listing_follows_creation_order(store: InMemoryStore) {
        let owner = store.seed_user(username("ada"), "pw").await;
        for code in ["a", "b", "c"] {
            store.insert(owner, fields(code)).await.expect("insert");
        }

        let page = SnippetRepository::list(&store, 1, 5).await.expect("list");
        let codes: Vec<&str> = page.iter().map(|s| s.code().as_str()).collect();
        assert_eq!(codes, vec!["b", "c"]);
        assert_eq!(SnippetRepository::count(&store).await.expect("count"), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn owner_index_only_returns_owned_snippets(store: InMemoryStore) {
        let ada = store.seed_user(username("ada"), "pw").await;
        let bob = store.seed_user(username("bob"), "pw").await;
        store.insert(ada, fields("a")).await.expect("insert");
        store.insert(bob, fields("b")).await.expect("insert");

        let owned = store.list_by_owner(bob).await.expect("list");
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].owner(), bob);
    }

    #[rstest]
    #[tokio::test]
    async fn insert_rejects_unknown_owner(store: InMemoryStore) {
        let err = store
            .insert(UserId::new(42), fields("a"))
            .await
            .expect_err("unknown owner");
        assert!(matches!(err, SnippetPersistenceError::Query { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn save_reports_missing_rows(store: InMemoryStore) {
        let owner = store.seed_user(username("ada"), "pw").await;
        let snippet = store.insert(owner, fields("a")).await.expect("insert");
        assert!(store.delete(snippet.id()).await.expect("delete"));
        assert!(!store.save(&snippet).await.expect("save"));
        assert!(!store.delete(snippet.id()).await.expect("delete"));
    }

    #[rstest]
    #[tokio::test]
    async fn reseeding_a_user_keeps_the_identifier(store: InMemoryStore) {
        let first = store.seed_user(username("ada"), "old").await;
        let second = store.seed_user(username("ada"), "new").await;
        assert_eq!(first, second);

        let old = LoginCredentials::try_from_parts("ada", "old").expect("credentials");
        let new = LoginCredentials::try_from_parts("ada", "new").expect("credentials");
        assert!(store.authenticate(&old).await.is_err());
        assert_eq!(store.authenticate(&new).await.expect("login"), first);
    }

    #[rstest]
    #[case("ada", "wrong")]
    #[case("nobody", "pw")]
    #[tokio::test]
    async fn authenticate_rejects_bad_credentials(
        store: InMemoryStore,
        #[case] name: &str,
        #[case] password: &str,
    ) {
        store.seed_user(username("ada"), "pw").await;
        let credentials = LoginCredentials::try_from_parts(name, password).expect("credentials");

        let err = store
            .authenticate(&credentials)
            .await
            .expect_err("rejected");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), "invalid credentials");
    }

    #[rstest]
    #[tokio::test]
    async fn users_are_listed_by_identifier(store: InMemoryStore) {
        store.seed_user(username("zed"), "pw").await;
        store.seed_user(username("amy"), "pw").await;

        let users = UserRepository::list(&store, 0, 10).await.expect("list");
        let names: Vec<&str> = users.iter().map(|u| u.username().as_ref()).collect();
        assert_eq!(names, vec!["zed", "amy"]);
        let found = store
            .find_by_username(&username("amy"))
            .await
            .expect("lookup");
        assert_eq!(found.map(|u| u.id().get()), Some(2));
    }
}
