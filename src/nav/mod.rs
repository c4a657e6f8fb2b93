//! Routing: locations, history, access control and active-route matching.

pub mod active;
pub mod guard;
pub mod navigator;
pub mod route;

pub use active::{active_destination, active_menu_entry, menu_entry_is_active};
pub use guard::{GuardDecision, RouteGuard};
pub use navigator::{NavigationStack, Navigator};
