//! Process-wide session holder.
//!
//! Single writer (the auth operations), many readers (route guard, shell,
//! side menu). Readers get cheap snapshots; listeners are told about every
//! change after the lock has been released.

use std::sync::Arc;

use parking_lot::RwLock;

use super::error::{AuthError, AuthOperation};
use super::user::User;

/// Change notifications emitted by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// An auth operation started; `is_pending` is now true.
    Pending { operation: AuthOperation },
    /// The session is populated.
    Authenticated { operation: AuthOperation, user: User },
    /// The operation failed; the session stays absent.
    Failed {
        operation: AuthOperation,
        error: AuthError,
    },
    /// The session was cleared.
    LoggedOut,
}

/// Point-in-time view of the session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub is_pending: bool,
    /// Incremented on every change.
    pub revision: u64,
}

type Listener = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

/// Thread-safe session state with change listeners.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionInner>>,
}

#[derive(Default)]
struct SessionInner {
    snapshot: SessionSnapshot,
    listeners: Vec<Listener>,
}

impl SessionStore {
    /// Created at process start with no session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.read().snapshot.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.read().snapshot.user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().snapshot.user.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.inner.read().snapshot.is_pending
    }

    pub fn revision(&self) -> u64 {
        self.inner.read().snapshot.revision
    }

    /// Register a listener called after every change.
    pub fn subscribe(&self, listener: impl Fn(&SessionEvent) + Send + Sync + 'static) {
        self.inner.write().listeners.push(Arc::new(listener));
    }

    /// Mark an operation as in flight.
    ///
    /// # Errors
    /// Returns `AlreadyPending` if another operation has not finished yet.
    pub fn begin(&self, operation: AuthOperation) -> Result<(), AuthError> {
        {
            let mut inner = self.inner.write();
            if inner.snapshot.is_pending {
                return Err(AuthError::AlreadyPending);
            }
            inner.snapshot.is_pending = true;
            inner.snapshot.revision += 1;
        }
        tracing::debug!(?operation, "Auth operation started");
        self.emit(SessionEvent::Pending { operation });
        Ok(())
    }

    /// Apply the outcome of an in-flight operation.
    ///
    /// The user is swapped in whole, and only when complete; an incomplete
    /// record is reported as a failure instead.
    pub fn finish(&self, operation: AuthOperation, outcome: Result<User, AuthError>) {
        let outcome = outcome.and_then(|user| {
            if user.is_complete() {
                Ok(user)
            } else {
                Err(AuthError::IncompleteUser)
            }
        });

        {
            let mut inner = self.inner.write();
            inner.snapshot.is_pending = false;
            if let Ok(user) = &outcome {
                inner.snapshot.user = Some(user.clone());
            }
            inner.snapshot.revision += 1;
        }

        let event = match outcome {
            Ok(user) => {
                tracing::info!(
                    ?operation,
                    user_id = %user.id,
                    employee_id = %user.employee_id,
                    "Session established"
                );
                SessionEvent::Authenticated { operation, user }
            }
            Err(error) => {
                tracing::warn!(?operation, error = %error, "Auth operation failed");
                SessionEvent::Failed { operation, error }
            }
        };
        self.emit(event);
    }

    /// Clear the session synchronously.
    pub fn logout(&self) {
        let previous = {
            let mut inner = self.inner.write();
            let previous = inner.snapshot.user.take();
            inner.snapshot.revision += 1;
            previous
        };
        if let Some(user) = previous {
            tracing::info!(user_id = %user.id, "Session cleared");
        }
        self.emit(SessionEvent::LoggedOut);
    }

    fn emit(&self, event: SessionEvent) {
        let listeners = self.inner.read().listeners.clone();
        for listener in listeners {
            listener(&event);
        }
    }
}
