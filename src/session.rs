use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

/// Cookie state shared by clones of one client.
///
/// Google hands out an abuse-detection cookie via `Set-Cookie` on 429
/// responses; subsequent requests must echo it back. The value is scoped to
/// the client instance, so independent clients get independent sessions.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cookie: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cookie(&self) -> Option<String> {
        self.cookie.read().clone()
    }

    pub fn set_cookie(&self, value: impl Into<String>) {
        debug!("storing session cookie");
        *self.cookie.write() = Some(value.into());
    }

    /// Drop the stored cookie, returning the session to its initial state.
    pub fn clear(&self) {
        *self.cookie.write() = None;
    }
}
