//! In-memory session table.
//!
//! Sessions idle for longer than the store's TTL are dropped, and the table
//! never holds more than its capacity: when full, the least recently seen
//! session makes room for the new one.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;

use super::flash::Flash;

/// Length of a generated session id (alphanumeric characters).
pub const SESSION_ID_LENGTH: usize = 32;

/// Idle lifetime used when none is configured.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Session cap used when none is configured.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// What the server remembers about one browser.
#[derive(Debug)]
struct SessionData {
    username: Option<String>,
    flash: Option<Flash>,
    last_seen: Instant,
}

impl SessionData {
    fn new() -> Self {
        Self {
            username: None,
            flash: None,
            last_seen: Instant::now(),
        }
    }
}

/// All live sessions.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionData>>,
    idle_ttl: Duration,
    capacity: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TTL, DEFAULT_CAPACITY)
    }
}

impl SessionStore {
    /// A store dropping sessions idle for `idle_ttl` and holding at most
    /// `capacity` of them. A capacity of zero is treated as one.
    pub fn new(idle_ttl: Duration, capacity: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_ttl,
            capacity: capacity.max(1),
        }
    }

    /// Open a fresh, anonymous session and return its id.
    ///
    /// Expired sessions are pruned first; if the table is still full the
    /// least recently seen session is evicted.
    pub async fn create(&self) -> String {
        let id = generate_session_id();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, s| s.last_seen.elapsed() < self.idle_ttl);
        let pruned = before - sessions.len();
        if pruned > 0 {
            tracing::debug!(pruned, "Pruned idle sessions");
        }

        if sessions.len() >= self.capacity {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, s)| s.last_seen)
                .map(|(id, _)| id.clone());
            if let Some(oldest) = oldest {
                sessions.remove(&oldest);
                tracing::warn!(
                    capacity = self.capacity,
                    "Session table full; evicted oldest session"
                );
            }
        }

        sessions.insert(id.clone(), SessionData::new());
        id
    }

    /// Mark a session as seen now. Returns `false`, forgetting the session,
    /// if it is unknown or has been idle past the TTL.
    pub async fn resume(&self, id: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(id) {
            Some(session) if session.last_seen.elapsed() < self.idle_ttl => {
                session.last_seen = Instant::now();
                true
            }
            Some(_) => {
                sessions.remove(id);
                false
            }
            None => false,
        }
    }

    pub async fn exists(&self, id: &str) -> bool {
        self.sessions.read().await.contains_key(id)
    }

    pub async fn username(&self, id: &str) -> Option<String> {
        self.sessions
            .read()
            .await
            .get(id)
            .and_then(|s| s.username.clone())
    }

    /// Set the username. Ignored if the session no longer exists.
    pub async fn set_username(&self, id: &str, username: &str) {
        if let Some(session) = self.sessions.write().await.get_mut(id) {
            session.username = Some(username.to_string());
        }
    }

    /// Replace the pending flash. Ignored if the session no longer exists.
    pub async fn set_flash(&self, id: &str, flash: Flash) {
        if let Some(session) = self.sessions.write().await.get_mut(id) {
            session.flash = Some(flash);
        }
    }

    /// Remove and return the pending flash.
    pub async fn take_flash(&self, id: &str) -> Option<Flash> {
        self.sessions
            .write()
            .await
            .get_mut(id)
            .and_then(|s| s.flash.take())
    }

    /// Forget the session. Returns `true` if it existed.
    pub async fn destroy(&self, id: &str) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    /// Number of sessions held, including idle ones not yet pruned.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(SESSION_ID_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::flash::FlashModule;

    #[tokio::test]
    async fn new_session_is_anonymous() {
        let store = SessionStore::default();
        let id = store.create().await;
        assert_eq!(id.len(), SESSION_ID_LENGTH);
        assert!(store.exists(&id).await);
        assert_eq!(store.username(&id).await, None);
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let store = SessionStore::default();
        let a = store.create().await;
        let b = store.create().await;
        assert_ne!(a, b);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn flash_is_taken_exactly_once() {
        let store = SessionStore::default();
        let id = store.create().await;
        store
            .set_flash(&id, Flash::success(FlashModule::Crops, "ok"))
            .await;

        assert!(store.take_flash(&id).await.is_some());
        assert!(store.take_flash(&id).await.is_none());
    }

    #[tokio::test]
    async fn newer_flash_replaces_pending_one() {
        let store = SessionStore::default();
        let id = store.create().await;
        store
            .set_flash(&id, Flash::success(FlashModule::Crops, "first"))
            .await;
        store
            .set_flash(&id, Flash::success(FlashModule::Finance, "second"))
            .await;

        let flash = store.take_flash(&id).await.unwrap();
        assert_eq!(flash.message, "second");
    }

    #[tokio::test]
    async fn destroy_forgets_username() {
        let store = SessionStore::default();
        let id = store.create().await;
        store.set_username(&id, "Jean").await;
        assert_eq!(store.username(&id).await.as_deref(), Some("Jean"));

        assert!(store.destroy(&id).await);
        assert!(!store.exists(&id).await);
        assert_eq!(store.username(&id).await, None);

        // Writes against a destroyed session do not resurrect it.
        store.set_username(&id, "Jean").await;
        assert!(!store.exists(&id).await);
    }

    #[tokio::test]
    async fn full_store_evicts_least_recently_seen() {
        let store = SessionStore::new(DEFAULT_IDLE_TTL, 3);
        let first = store.create().await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        let second = store.create().await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        let third = store.create().await;
        tokio::time::sleep(Duration::from_millis(2)).await;

        // Touch the oldest so the second becomes the eviction candidate.
        assert!(store.resume(&first).await);
        let fourth = store.create().await;

        assert_eq!(store.len().await, 3);
        assert!(store.exists(&first).await);
        assert!(!store.exists(&second).await);
        assert!(store.exists(&third).await);
        assert!(store.exists(&fourth).await);
    }

    #[tokio::test]
    async fn store_never_exceeds_capacity() {
        let store = SessionStore::new(DEFAULT_IDLE_TTL, 50);
        for _ in 0..500 {
            store.create().await;
        }
        assert_eq!(store.len().await, 50);
    }

    #[tokio::test]
    async fn idle_session_expires() {
        let store = SessionStore::new(Duration::from_millis(30), DEFAULT_CAPACITY);
        let id = store.create().await;
        store.set_username(&id, "Jean").await;
        assert!(store.resume(&id).await);

        tokio::time::sleep(Duration::from_millis(60)).await;

        assert!(!store.resume(&id).await);
        assert!(!store.exists(&id).await);
    }

    #[tokio::test]
    async fn create_prunes_idle_sessions() {
        let store = SessionStore::new(Duration::from_millis(30), DEFAULT_CAPACITY);
        for _ in 0..10 {
            store.create().await;
        }
        tokio::time::sleep(Duration::from_millis(60)).await;

        let fresh = store.create().await;
        assert_eq!(store.len().await, 1);
        assert!(store.exists(&fresh).await);
    }
}
