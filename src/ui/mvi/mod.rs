//! Model-View-Intent primitives shared by the shell's state machines.
//!
//! ```text
//! key / mouse / tick / session event
//!        │
//!     Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers are pure; the caller performs side effects (navigation, session
//! changes) around the dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
///
/// `dispatch_mvi!(self, field, ReducerType, intent)` needs `Reducer` in scope.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub(crate) use dispatch_mvi;
