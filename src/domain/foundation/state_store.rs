//! Observable state cell.
//!
//! The UI layer binds to a [`StateStore`] by subscribing to it; the core only
//! writes through `update`/`replace`, each of which emits one change event.
//! Writes are refused once the owning session is closed.

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

use super::{DomainError, ErrorCode, SessionToken};

/// Single-writer observable value tied to a session.
#[derive(Debug)]
pub struct StateStore<T> {
    value: watch::Sender<T>,
    token: SessionToken,
    version: AtomicU64,
}

impl<T: Clone> StateStore<T> {
    pub fn new(initial: T, token: SessionToken) -> Self {
        let (value, _) = watch::channel(initial);
        Self {
            value,
            token,
            version: AtomicU64::new(0),
        }
    }

    /// Returns a snapshot of the current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Subscribes to change notifications.
    ///
    /// The receiver starts out having seen the current value, so
    /// `changed()` only resolves on the next write.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.value.subscribe()
    }

    /// Mutates the value in place and notifies subscribers.
    pub fn update(&self, mutate: impl FnOnce(&mut T)) -> Result<(), DomainError> {
        self.ensure_live()?;
        self.value.send_modify(mutate);
        self.version.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Applies a fallible mutation atomically and returns what it produced.
    ///
    /// `mutate` runs under the store's write lock, so a read-modify-write
    /// inside it cannot interleave with another writer. Subscribers are
    /// notified only if `mutate` succeeds; `mutate` must leave the value
    /// untouched when it fails.
    pub fn try_update<R>(
        &self,
        mutate: impl FnOnce(&mut T) -> Result<R, DomainError>,
    ) -> Result<R, DomainError> {
        self.ensure_live()?;
        let mut outcome = Err(DomainError::new(
            ErrorCode::InternalError,
            "State store update did not run",
        ));
        self.value.send_if_modified(|value| {
            outcome = mutate(value);
            outcome.is_ok()
        });
        if outcome.is_ok() {
            self.version.fetch_add(1, Ordering::SeqCst);
        }
        outcome
    }

    /// Replaces the value and notifies subscribers.
    pub fn replace(&self, next: T) -> Result<T, DomainError> {
        self.ensure_live()?;
        let previous = self.value.send_replace(next);
        self.version.fetch_add(1, Ordering::SeqCst);
        Ok(previous)
    }

    /// Number of writes applied so far.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    fn ensure_live(&self) -> Result<(), DomainError> {
        if self.token.is_live() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::SessionClosed,
                "State store is closed with its session",
            ))
        }
    }
}
