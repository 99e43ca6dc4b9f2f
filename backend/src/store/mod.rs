//! In-memory user store
//!
//! The store is the single authority for user records during the process
//! lifetime. One lock guards both the record map and the id counter so that
//! allocating an id and inserting the record happen as one step.

use std::collections::BTreeMap;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::User;

/// Store failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("user {0} not found")]
    NotFound(i64),
}

#[derive(Debug)]
struct StoreInner {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

/// Shared user store
#[derive(Debug)]
pub struct UserStore {
    inner: RwLock<StoreInner>,
}

impl UserStore {
    /// Create an empty store; the first user gets id 1
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of every user in ascending id order
    pub async fn list_all(&self) -> Vec<User> {
        let inner = self.inner.read().await;
        inner.users.values().cloned().collect()
    }

    pub async fn get(&self, id: i64) -> Result<User, StoreError> {
        let inner = self.inner.read().await;
        inner.users.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Store a new user under a fresh id
    pub async fn create(&self, name: String) -> User {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let user = User { id, name };
        inner.users.insert(id, user.clone());
        user
    }

    /// Replace the name of an existing user. Never inserts.
    pub async fn update(&self, id: i64, name: String) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        let user = inner.users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        user.name = name;
        Ok(user.clone())
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
