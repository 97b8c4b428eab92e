// --- File: crates/playbox_identity/src/session.rs ---
//! In-memory session store.
//!
//! Sessions are opaque uuid-v4 bearer tokens mapped to a `Session` value.
//! `load` resolves a token and drops it once the TTL has passed; `clear`
//! ends a session explicitly (logout). The map is the only shared mutable
//! state in the gateway.

use chrono::{Duration, Utc};
use playbox_common::services::{Session, SessionStore};
use playbox_config::AppConfig;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// Sessions last half a day unless configured otherwise.
const DEFAULT_TTL_MINUTES: i64 = 720;

pub struct InMemorySessionStore {
    ttl: Duration,
    inner: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            ttl: Duration::minutes(ttl_minutes.max(1)),
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let ttl_minutes = config
            .identity
            .as_ref()
            .and_then(|identity| identity.session_ttl_minutes)
            .unwrap_or(DEFAULT_TTL_MINUTES);
        Self::new(ttl_minutes)
    }

    fn is_expired(&self, session: &Session) -> bool {
        Utc::now() - session.issued_at > self.ttl
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, token: &str) -> Option<Session> {
        {
            let sessions = self.inner.read().ok()?;
            match sessions.get(token) {
                Some(session) if !self.is_expired(session) => return Some(session.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        // TTL passed: forget the token before reporting it unknown
        if let Ok(mut sessions) = self.inner.write() {
            sessions.remove(token);
        }
        None
    }

    fn save(&self, session: Session) -> String {
        let token = Uuid::new_v4().to_string();
        if let Ok(mut sessions) = self.inner.write() {
            sessions.insert(token.clone(), session);
        }
        token
    }

    fn clear(&self, token: &str) {
        if let Ok(mut sessions) = self.inner.write() {
            sessions.remove(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playbox_common::services::SessionRole;

    fn player_session() -> Session {
        Session {
            user_id: 9,
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            role: SessionRole::Player,
            issued_at: Utc::now(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = InMemorySessionStore::new(60);
        let token = store.save(player_session());
        let loaded = store.load(&token).expect("session should be live");
        assert_eq!(loaded.user_id, 9);
        assert_eq!(loaded.role, SessionRole::Player);
    }

    #[test]
    fn tokens_are_unique_per_save() {
        let store = InMemorySessionStore::new(60);
        let a = store.save(player_session());
        let b = store.save(player_session());
        assert_ne!(a, b);
    }

    #[test]
    fn clear_ends_the_session() {
        let store = InMemorySessionStore::new(60);
        let token = store.save(player_session());
        store.clear(&token);
        assert!(store.load(&token).is_none());
    }

    #[test]
    fn expired_sessions_resolve_to_none() {
        let store = InMemorySessionStore::new(1);
        let mut session = player_session();
        session.issued_at = Utc::now() - Duration::minutes(5);
        let token = store.save(session);
        assert!(store.load(&token).is_none());
        // and the token is gone, not just hidden
        assert!(store.load(&token).is_none());
    }

    #[test]
    fn unknown_tokens_resolve_to_none() {
        let store = InMemorySessionStore::new(60);
        assert!(store.load("not-a-token").is_none());
    }
}
