//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::IdMismatchPolicy;
use crate::store::UserStore;

/// Shared application state
///
/// Cloning is cheap; every clone points at the same store.
#[derive(Clone)]
pub struct AppState {
    pub user_store: Arc<UserStore>,
    pub id_mismatch_policy: IdMismatchPolicy,
}

impl AppState {
    pub fn new(user_store: Arc<UserStore>, id_mismatch_policy: IdMismatchPolicy) -> Self {
        Self {
            user_store,
            id_mismatch_policy,
        }
    }

    /// State backed by a fresh, empty store
    pub fn in_memory(id_mismatch_policy: IdMismatchPolicy) -> Self {
        Self::new(Arc::new(UserStore::new()), id_mismatch_policy)
    }
}

impl FromRef<AppState> for Arc<UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.user_store.clone()
    }
}

impl FromRef<AppState> for IdMismatchPolicy {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.id_mismatch_policy
    }
}
