//! Call Scope
//!
//! Caller-owned handle for gateway calls. Once the owner disposes it (a page
//! unmounting, a request being abandoned), pending scoped calls stop waiting
//! and their outcome is discarded instead of delivered.

use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct CallScope {
    disposed: Arc<watch::Sender<bool>>,
}

impl Default for CallScope {
    fn default() -> Self {
        Self::new()
    }
}

impl CallScope {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            disposed: Arc::new(tx),
        }
    }

    /// Discard every pending and future call made within this scope. Idempotent.
    pub fn dispose(&self) {
        self.disposed.send_replace(true);
    }

    pub fn is_disposed(&self) -> bool {
        *self.disposed.borrow()
    }

    /// Resolves once the scope is disposed.
    pub(crate) async fn disposed(&self) {
        let mut rx = self.disposed.subscribe();
        // The sender lives in `self`, so the channel cannot close under us.
        let _ = rx.wait_for(|disposed| *disposed).await;
    }
}
