//! Session liveness tokens.
//!
//! Every deferred callback (debounce timer, simulated upload or save latency)
//! holds a [`SessionToken`] and checks it before touching session state. The
//! owning [`SessionGuard`] flips the shared flag on `close()` or drop, so a
//! resolution that lands after teardown is discarded instead of applied.
//!
//! Guards can be nested: a guard created with [`SessionToken::child_scope`]
//! can be closed on its own, and is also closed whenever its parent is.

use futures::future::{BoxFuture, FutureExt};
use tokio::sync::watch;

use super::SessionId;

/// Owner side of a liveness flag.
#[derive(Debug)]
pub struct SessionGuard {
    id: SessionId,
    closed: watch::Sender<bool>,
    parent: Option<SessionToken>,
}

impl SessionGuard {
    /// Opens a new top-level session.
    pub fn new() -> Self {
        Self::with_id(SessionId::new())
    }

    /// Opens a top-level session with a known id.
    pub fn with_id(id: SessionId) -> Self {
        let (closed, _) = watch::channel(false);
        Self {
            id,
            closed,
            parent: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Hands out an observer for deferred work.
    pub fn token(&self) -> SessionToken {
        SessionToken {
            id: self.id,
            closed: self.closed.subscribe(),
            parent: self.parent.clone().map(Box::new),
        }
    }

    /// Closes this scope. Idempotent.
    pub fn close(&self) {
        self.closed.send_replace(true);
    }

    /// Returns true once this scope or any ancestor has been closed.
    pub fn is_closed(&self) -> bool {
        *self.closed.borrow() || self.parent.as_ref().is_some_and(|p| !p.is_live())
    }
}

impl Default for SessionGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.close();
    }
}

/// Observer side of a liveness flag. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SessionToken {
    id: SessionId,
    closed: watch::Receiver<bool>,
    parent: Option<Box<SessionToken>>,
}

impl SessionToken {
    pub fn session_id(&self) -> SessionId {
        self.id
    }

    /// Returns true while neither this scope nor any ancestor is closed.
    pub fn is_live(&self) -> bool {
        !*self.closed.borrow() && self.parent.as_ref().map_or(true, |p| p.is_live())
    }

    /// Opens a nested scope that dies with this one.
    pub fn child_scope(&self) -> SessionGuard {
        let (closed, _) = watch::channel(false);
        SessionGuard {
            id: self.id,
            closed,
            parent: Some(self.clone()),
        }
    }

    /// Resolves once this scope or any ancestor is closed.
    pub fn cancelled(&self) -> BoxFuture<'_, ()> {
        async move {
            let mut own = self.closed.clone();
            match &self.parent {
                Some(parent) => {
                    tokio::select! {
                        _ = wait_closed(&mut own) => {}
                        _ = parent.cancelled() => {}
                    }
                }
                None => wait_closed(&mut own).await,
            }
        }
        .boxed()
    }
}

async fn wait_closed(rx: &mut watch::Receiver<bool>) {
    // A dropped sender also counts as closed.
    let _ = rx.wait_for(|closed| *closed).await;
}
