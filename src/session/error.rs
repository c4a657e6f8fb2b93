use thiserror::Error;

/// Which auth operation produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOperation {
    Login,
    Signup,
}

impl AuthOperation {
    /// Title of the notification shown when the operation fails.
    pub fn failure_title(self) -> &'static str {
        match self {
            AuthOperation::Login => "Login Failed",
            AuthOperation::Signup => "Signup Failed",
        }
    }

    /// Body of that notification. Fixed per operation; the underlying
    /// error is only logged.
    pub fn failure_message(self) -> &'static str {
        match self {
            AuthOperation::Login => "Invalid username or password",
            AuthOperation::Signup => "Please check your information and try again",
        }
    }
}

/// Errors reported by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Please fill all required fields")]
    IncompleteProfile,

    #[error("Another sign-in is already in progress")]
    AlreadyPending,

    #[error("Backend returned an incomplete user record")]
    IncompleteUser,

    #[error("Auth task aborted: {reason}")]
    Aborted { reason: String },
}
