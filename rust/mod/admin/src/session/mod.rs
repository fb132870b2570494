//! Session — the single authentication context.
//!
//! One `Session` is created per dashboard and injected everywhere a
//! credential matters: the route guard reads it, the REST client pulls its
//! bearer token from it, and logout and expiry both tear it down through
//! [`Session::end`].

pub mod claims;
pub mod store;

use std::sync::Arc;

use tracing::{info, warn};
use vaultx_client::{ApiError, TokenSource};

use crate::error::{Result, SessionError};

pub use claims::Claims;
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};

/// Scoped session over a persistent [`TokenStore`].
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Ephemeral session with nothing persisted.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    // ====================================================================
    // Reads
    // ====================================================================

    /// The stored credential, unchecked. Storage failures read as `None`.
    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "failed to read stored token");
                None
            }
        }
    }

    /// A credential exists. This is all the route guard looks at.
    pub fn is_present(&self) -> bool {
        self.token().is_some()
    }

    /// The credential decodes and its `exp` is still in the future.
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(chrono::Utc::now().timestamp())
    }

    pub fn is_authenticated_at(&self, now: i64) -> bool {
        self.claims().is_some_and(|c| c.is_live_at(now))
    }

    pub fn user_role(&self) -> Option<String> {
        self.claims().and_then(|c| c.role)
    }

    pub fn user_id(&self) -> Option<String> {
        self.claims().and_then(|c| c.userid)
    }

    pub fn user_name(&self) -> Option<String> {
        self.claims().and_then(|c| c.name)
    }

    /// Decoded on every call; the stored credential may change underneath.
    fn claims(&self) -> Option<Claims> {
        let token = self.token()?;
        Claims::decode(&token).ok()
    }

    // ====================================================================
    // Transitions
    // ====================================================================

    /// Start a session with a credential obtained at login.
    pub fn begin(&self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        self.store.save(token)?;
        info!(user = ?self.user_name(), "session started");
        Ok(())
    }

    /// Tear the session down. Logout and expiry both end here.
    pub fn end(&self) -> Result<()> {
        self.store.clear()?;
        info!("session ended");
        Ok(())
    }

    /// End a session whose credential is present but no longer valid.
    ///
    /// Returns `true` when it did.
    pub fn expire_if_stale(&self) -> bool {
        self.expire_if_stale_at(chrono::Utc::now().timestamp())
    }

    pub fn expire_if_stale_at(&self, now: i64) -> bool {
        if !self.is_present() || self.is_authenticated_at(now) {
            return false;
        }
        info!("stored token expired or unreadable");
        if let Err(e) = self.end() {
            warn!(error = %e, "failed to clear expired token");
        }
        true
    }
}

#[async_trait::async_trait]
impl TokenSource for Session {
    async fn token(&self) -> std::result::Result<Option<String>, ApiError> {
        Ok(Session::token(self))
    }
}
