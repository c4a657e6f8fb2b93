//! Session provider: runs auth operations off the UI thread and publishes
//! their outcome through the session store.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::backend::AuthBackend;
use super::error::{AuthError, AuthOperation};
use super::store::SessionStore;
use super::user::{Credentials, SignupProfile, User};

/// Handle to an in-flight auth operation.
pub type AuthTask = JoinHandle<Result<User, AuthError>>;

/// Session operations consumed by the navigation shell.
pub trait SessionControl {
    fn current_user(&self) -> Option<User>;

    /// Clear the session synchronously.
    fn logout(&self);
}

impl SessionControl for SessionStore {
    fn current_user(&self) -> Option<User> {
        self.user()
    }

    fn logout(&self) {
        SessionStore::logout(self);
    }
}

pub struct SessionProvider<B> {
    store: SessionStore,
    backend: Arc<B>,
    runtime: Handle,
}

impl<B: AuthBackend> SessionProvider<B> {
    pub fn new(store: SessionStore, backend: B, runtime: Handle) -> Self {
        Self {
            store,
            backend: Arc::new(backend),
            runtime,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Start a login. Completion is reported through the store.
    ///
    /// # Errors
    /// Returns `AlreadyPending` without spawning anything if another
    /// operation is in flight.
    pub fn login(&self, credentials: Credentials) -> Result<AuthTask, AuthError> {
        self.store.begin(AuthOperation::Login)?;
        tracing::info!(
            backend = self.backend.name(),
            identifier = %credentials.identifier,
            "Login requested"
        );
        let backend = Arc::clone(&self.backend);
        let store = self.store.clone();
        Ok(self.runtime.spawn(async move {
            let pending = PendingOperation::new(store, AuthOperation::Login);
            let outcome = backend.login(credentials).await;
            pending.finish(outcome.clone());
            outcome
        }))
    }

    /// Start a signup. Completion is reported through the store.
    ///
    /// # Errors
    /// Returns `AlreadyPending` if another operation is in flight.
    pub fn signup(&self, profile: SignupProfile) -> Result<AuthTask, AuthError> {
        self.store.begin(AuthOperation::Signup)?;
        tracing::info!(
            backend = self.backend.name(),
            email = %profile.email,
            "Signup requested"
        );
        let backend = Arc::clone(&self.backend);
        let store = self.store.clone();
        Ok(self.runtime.spawn(async move {
            let pending = PendingOperation::new(store, AuthOperation::Signup);
            let outcome = backend.signup(profile).await;
            pending.finish(outcome.clone());
            outcome
        }))
    }

    pub fn logout(&self) {
        self.store.logout();
    }
}

/// Settles the store exactly once, even if the task is cancelled or the
/// backend panics before producing an outcome.
struct PendingOperation {
    store: SessionStore,
    operation: AuthOperation,
    settled: bool,
}

impl PendingOperation {
    fn new(store: SessionStore, operation: AuthOperation) -> Self {
        Self {
            store,
            operation,
            settled: false,
        }
    }

    fn finish(mut self, outcome: Result<User, AuthError>) {
        self.settled = true;
        self.store.finish(self.operation, outcome);
    }
}

impl Drop for PendingOperation {
    fn drop(&mut self) {
        if !self.settled {
            self.store.finish(
                self.operation,
                Err(AuthError::Aborted {
                    reason: "task stopped before completion".to_string(),
                }),
            );
        }
    }
}

impl<B: AuthBackend> SessionControl for SessionProvider<B> {
    fn current_user(&self) -> Option<User> {
        self.store.user()
    }

    fn logout(&self) {
        self.store.logout();
    }
}
