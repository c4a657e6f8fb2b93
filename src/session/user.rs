//! Identity records and the inputs of the auth operations.

/// Authenticated identity. Only ever observed fully populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub employee_id: String,
    pub email: String,
}

impl User {
    /// True when every field carries a value.
    pub fn is_complete(&self) -> bool {
        [&self.id, &self.name, &self.employee_id, &self.email]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Wrapper for secrets that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when it has to be checked.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Login input.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub identifier: String,
    pub secret: SecureString,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: SecureString::new(secret),
        }
    }
}

/// Signup input.
#[derive(Debug, Clone)]
pub struct SignupProfile {
    pub name: String,
    pub email: String,
    pub password: SecureString,
}

impl SignupProfile {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: SecureString::new(password),
        }
    }
}
