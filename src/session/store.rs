use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::session::model::Session;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session_id";

/// Process-wide session store keyed by opaque token. The write lock keeps
/// read-modify-write of a single token's entry atomic across concurrent
/// requests; sessions live until removed, there is no expiry sweep.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// Creates an authenticated session and returns its freshly minted token.
    pub async fn insert(&self, username: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.inner
            .write()
            .await
            .insert(token.clone(), Session::authenticated(username));

        tracing::debug!(username, "session created");
        token
    }

    pub async fn get(&self, token: &str) -> Option<Session> {
        self.inner.read().await.get(token).cloned()
    }

    /// Username bound to the token, if the session exists and is authenticated.
    pub async fn username(&self, token: &str) -> Option<String> {
        self.inner
            .read()
            .await
            .get(token)
            .and_then(|session| session.username.clone())
    }

    /// Drops the username from the token's session. Idempotent: clearing an
    /// unknown token or an already-anonymous session is not an error.
    pub async fn clear_username(&self, token: &str) {
        if let Some(session) = self.inner.write().await.get_mut(token) {
            session.username = None;
        }
    }

    pub async fn remove(&self, token: &str) {
        self.inner.write().await.remove(token);
    }
}
