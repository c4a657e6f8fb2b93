//! Sign-in, sign-up and forgot-password forms.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Screen, fields, focus and per-field messages
//! - `intent.rs` - Typing, focus movement, validation
//! - `reducer.rs` - State transitions (pure, no side effects)
//!
//! Submitting is the app's job: it validates through the reducer and hands
//! the values to the session provider.

mod intent;
mod reducer;
mod state;

pub use intent::AuthFormIntent;
pub use reducer::AuthFormReducer;
pub use state::{is_valid_email, AuthFormState, AuthScreen, FieldKind, FormField};
