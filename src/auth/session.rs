//! Session-cookie identity lookup

use super::types::UserInfo;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// Maps session tokens and token subjects onto live users
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The session's user, or `None` for unknown, inactive or expired sessions
    /// and for deleted users
    async fn find_session_user(&self, token: &str) -> Result<Option<UserInfo>>;

    /// The current record of `user_id`, or `None` once the user is gone
    async fn find_active_user(&self, user_id: Uuid) -> Result<Option<UserInfo>>;
}

#[derive(Debug, Clone)]
struct SessionEntry {
    user_id: Uuid,
    expires_at: DateTime<Utc>,
    active: bool,
}

/// Sessions and users held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    users: HashMap<Uuid, UserInfo>,
    sessions: HashMap<String, SessionEntry>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: UserInfo) -> Self {
        self.users.insert(user.id, user);
        self
    }

    /// Register `user` and open a session for them
    pub fn with_session(mut self, token: &str, user: UserInfo, expires_at: DateTime<Utc>) -> Self {
        self.sessions.insert(
            token.to_string(),
            SessionEntry {
                user_id: user.id,
                expires_at,
                active: true,
            },
        );
        self.with_user(user)
    }

    /// Mark a session as logged out
    pub fn deactivate(&mut self, token: &str) {
        if let Some(entry) = self.sessions.get_mut(token) {
            entry.active = false;
        }
    }

    /// Forget a user; their sessions and tokens stop resolving
    pub fn remove_user(&mut self, user_id: Uuid) {
        self.users.remove(&user_id);
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn find_session_user(&self, token: &str) -> Result<Option<UserInfo>> {
        let now = Utc::now();
        Ok(self
            .sessions
            .get(token)
            .filter(|entry| entry.active && entry.expires_at > now)
            .and_then(|entry| self.users.get(&entry.user_id))
            .cloned())
    }

    async fn find_active_user(&self, user_id: Uuid) -> Result<Option<UserInfo>> {
        Ok(self.users.get(&user_id).cloned())
    }
}
