// ABOUTME: Session storage trait and the LRU-bounded in-memory implementation
// ABOUTME: Commands are applied atomically per store so concurrent requests never lose updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Helper

use super::{SessionCommand, SessionId, SessionState};
use crate::constants::session;
use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use tokio::sync::Mutex;
use tracing::debug;

/// Storage for per-session state
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Current state of `id`; unknown sessions read as empty
    async fn get(&self, id: SessionId) -> SessionState;

    /// Replace the stored state of `id`
    async fn put(&self, id: SessionId, state: SessionState);

    /// Apply `command` to `id` and return the resulting state
    ///
    /// State is only written back when the command changed something. The default is a
    /// plain read-modify-write; implementations should override it to run under one lock.
    async fn apply(&self, id: SessionId, command: SessionCommand) -> SessionState {
        let mut state = self.get(id).await;
        state.apply(&command);
        if state.take_modified() {
            self.put(id, state.clone()).await;
        }
        state
    }
}

/// In-memory session store with LRU eviction
///
/// The least recently used session is dropped once `max_entries` is reached. Sessions
/// are only stored after their first mutation, so read-only visitors cost nothing.
pub struct InMemorySessionStore {
    sessions: Mutex<LruCache<SessionId, SessionState>>,
}

impl InMemorySessionStore {
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(session::DEFAULT_MAX_ENTRIES)
    {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Store holding at most `max_entries` sessions (zero falls back to the default)
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            sessions: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Number of sessions currently held
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Whether no session has been stored yet
    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(session::DEFAULT_MAX_ENTRIES)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: SessionId) -> SessionState {
        self.sessions
            .lock()
            .await
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    async fn put(&self, id: SessionId, mut state: SessionState) {
        state.take_modified();
        let displaced = self.sessions.lock().await.push(id, state);
        log_eviction(id, displaced);
    }

    async fn apply(&self, id: SessionId, command: SessionCommand) -> SessionState {
        let mut sessions = self.sessions.lock().await;
        let mut state = sessions.get(&id).cloned().unwrap_or_default();

        state.apply(&command);
        let displaced = if state.take_modified() {
            sessions.push(id, state.clone())
        } else {
            None
        };
        drop(sessions);

        log_eviction(id, displaced);
        state
    }
}

/// `LruCache::push` also returns the old value when `id` was already present
fn log_eviction(id: SessionId, displaced: Option<(SessionId, SessionState)>) {
    if let Some((evicted, _)) = displaced.filter(|(evicted, _)| *evicted != id) {
        debug!(session.id = %evicted, "Evicted least recently used session");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn add(name: &str) -> SessionCommand {
        SessionCommand::AddShoppingItem {
            name: name.to_owned(),
            quantity: String::new(),
        }
    }

    #[tokio::test]
    async fn test_unknown_session_reads_empty_and_is_not_stored() {
        let store = InMemorySessionStore::default();
        let state = store.get(SessionId::new()).await;

        assert!(state.shopping_list.is_empty());
        assert!(state.favorites.is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_noop_command_does_not_create_session() {
        let store = InMemorySessionStore::default();
        store
            .apply(SessionId::new(), SessionCommand::ToggleShoppingItem { id: 0 })
            .await;
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = InMemorySessionStore::default();
        let (a, b) = (SessionId::new(), SessionId::new());

        store.apply(a, add("Eggs")).await;

        assert_eq!(store.get(a).await.total_items(), 1);
        assert_eq!(store.get(b).await.total_items(), 0);
    }

    #[tokio::test]
    async fn test_least_recently_used_session_is_evicted() {
        let store = InMemorySessionStore::new(2);
        let (a, b, c) = (SessionId::new(), SessionId::new(), SessionId::new());

        store.apply(a, add("a")).await;
        store.apply(b, add("b")).await;
        store.get(a).await;
        store.apply(c, add("c")).await;

        assert_eq!(store.len().await, 2);
        assert_eq!(store.get(a).await.total_items(), 1);
        assert_eq!(store.get(b).await.total_items(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_not_lost() {
        let store = Arc::new(InMemorySessionStore::default());
        let id = SessionId::new();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.apply(id, add(&format!("item {i}"))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let state = store.get(id).await;
        assert_eq!(state.total_items(), 20);

        let mut ids: Vec<u64> = state.shopping_list.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..20).collect::<Vec<_>>());
    }
}
