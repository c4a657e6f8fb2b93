//! Route guard gating protected screens on session presence.

use crate::nav::route::{is_within, normalize};

/// Result of one guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardDecision {
    /// Whether the navigation shell may render.
    pub render_shell: bool,
    /// Replace-redirect to issue, at most once per offending transition.
    pub redirect: Option<String>,
}

/// Reactive access check re-evaluated whenever the session or location changes.
///
/// Evaluating the same `(session, location)` pair twice never issues a second
/// redirect, so a redirect that has not been applied yet cannot loop.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    entry_path: String,
    last_seen: Option<(bool, String)>,
}

impl RouteGuard {
    pub fn new(entry_path: impl Into<String>) -> Self {
        Self {
            entry_path: entry_path.into(),
            last_seen: None,
        }
    }

    pub fn entry_path(&self) -> &str {
        &self.entry_path
    }

    /// True for locations inside the unauthenticated section.
    pub fn is_public(&self, location: &str) -> bool {
        is_within(location, &self.entry_path)
    }

    pub fn evaluate(&mut self, has_session: bool, location: &str) -> GuardDecision {
        let key = (has_session, normalize(location).to_string());
        let changed = self.last_seen.as_ref() != Some(&key);
        self.last_seen = Some(key);

        let public = self.is_public(location);
        let render_shell = has_session && !public;

        let redirect = if changed && !has_session && !public {
            tracing::info!(
                location = %location,
                entry = %self.entry_path,
                "Unauthenticated access, redirecting"
            );
            Some(self.entry_path.clone())
        } else {
            None
        };

        GuardDecision {
            render_shell,
            redirect,
        }
    }
}
