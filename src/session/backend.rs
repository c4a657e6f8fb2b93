//! Authentication backends.

use std::future::Future;
use std::time::Duration;

use uuid::Uuid;

use super::error::AuthError;
use super::user::{Credentials, SignupProfile, User};

/// Remote side of the auth operations.
pub trait AuthBackend: Send + Sync + 'static {
    /// Returns the name of this backend for logging.
    fn name(&self) -> &'static str;

    fn login(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<User, AuthError>> + Send;

    fn signup(
        &self,
        profile: SignupProfile,
    ) -> impl Future<Output = Result<User, AuthError>> + Send;
}

/// Offline backend with simulated latency.
///
/// Any non-empty identifier and secret log in; signup needs every profile
/// field and hands out a fresh id and employee number.
#[derive(Debug, Clone)]
pub struct MockAuthBackend {
    latency: Duration,
}

impl MockAuthBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    async fn simulate_network(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl AuthBackend for MockAuthBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn login(&self, credentials: Credentials) -> Result<User, AuthError> {
        self.simulate_network().await;

        let identifier = credentials.identifier.trim();
        if identifier.is_empty() || credentials.secret.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(User {
            id: "1".to_string(),
            name: display_name_from(identifier),
            employee_id: "Emp2054".to_string(),
            email: identifier.to_string(),
        })
    }

    async fn signup(&self, profile: SignupProfile) -> Result<User, AuthError> {
        self.simulate_network().await;

        let name = profile.name.trim();
        let email = profile.email.trim();
        if name.is_empty() || email.is_empty() || profile.password.is_empty() {
            return Err(AuthError::IncompleteProfile);
        }

        let id = Uuid::new_v4();
        Ok(User {
            id: id.to_string(),
            name: name.to_string(),
            employee_id: employee_number(id),
            email: email.to_string(),
        })
    }
}

/// `asha.k@example.com` -> `Asha K`.
fn display_name_from(identifier: &str) -> String {
    let local = identifier.split('@').next().unwrap_or(identifier);
    let words: Vec<String> = local
        .split(['.', '_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    if words.is_empty() {
        identifier.to_string()
    } else {
        words.join(" ")
    }
}

/// Four-digit employee number in `Emp1000..=Emp9999`.
fn employee_number(id: Uuid) -> String {
    format!("Emp{}", 1000 + id.as_u128() % 9000)
}
