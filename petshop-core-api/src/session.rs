use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use uuid::Uuid;

use crate::error::ApiResult;

/// An authenticated session as reported by the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
}

/// The external auth provider, consumed but never implemented here
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn current_session(&self) -> ApiResult<Option<Session>>;
    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<Session>;
    async fn sign_out(&self) -> ApiResult<()>;
}

/// Process-wide reactive session state
///
/// A single subscription to the auth provider's session-change events
/// feeds this store; everything else observes it through watch
/// receivers instead of holding its own auth subscription.
#[derive(Debug, Clone)]
pub struct SessionStore {
    tx: watch::Sender<Option<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Replace the current session (None on sign-out)
    pub fn set(&self, session: Option<Session>) {
        // send_replace never fails; the sender keeps its own receiver
        self.tx.send_replace(session);
    }

    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
