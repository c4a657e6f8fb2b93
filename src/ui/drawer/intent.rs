//! Intents for the drawer animation controller.

use std::time::Instant;

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the drawer reducer.
///
/// Every intent carries the frame instant it happened at, keeping the
/// reducer a pure function of its inputs.
#[derive(Debug, Clone, Copy)]
pub enum DrawerIntent {
    /// Header menu button: head for the opposite endpoint.
    Toggle { now: Instant },

    /// Head for Closed. No-op when already closed or closing.
    Close { now: Instant },

    /// Frame tick: settle the transition once it has run its course.
    Tick { now: Instant },

    /// Shell mounted or unmounted: drop any transition and rest closed.
    Reset,
}

impl Intent for DrawerIntent {}
