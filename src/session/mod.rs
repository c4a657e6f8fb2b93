//! Session state and the authentication flow that produces it.
//!
//! # Architecture
//!
//! ```text
//! SessionProvider ──spawn──→ AuthBackend (async)
//!        │                        │
//!        └──begin──→ SessionStore ←──finish──┘
//!                        │
//!                        └──→ listeners (UI event channel)
//! ```

mod backend;
mod error;
mod provider;
mod store;
mod user;

pub use backend::{AuthBackend, MockAuthBackend};
pub use error::{AuthError, AuthOperation};
pub use provider::{AuthTask, SessionControl, SessionProvider};
pub use store::{SessionEvent, SessionSnapshot, SessionStore};
pub use user::{Credentials, SecureString, SignupProfile, User};
