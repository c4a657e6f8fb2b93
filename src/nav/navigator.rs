//! Navigation runtime: the current location plus push/replace/back history.

use crate::nav::route::normalize;

/// Navigation runtime consumed by the shell, the side menu and the guard.
pub trait Navigator {
    /// Current logical location.
    fn current_location(&self) -> &str;

    /// Push `path` on top of the history.
    fn navigate_to(&mut self, path: &str);

    /// Replace the current location so back-navigation cannot return to it.
    fn replace_location(&mut self, path: &str);
}

/// In-memory history stack. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    entries: Vec<String>,
}

impl NavigationStack {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
        }
    }

    /// Pop the current location. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        let left = self.entries.pop();
        tracing::debug!(
            from = left.as_deref().unwrap_or_default(),
            to = %self.current_location(),
            "nav back"
        );
        true
    }

    /// Drop all history and start over at `path`.
    pub fn reset(&mut self, path: &str) {
        tracing::debug!(from = %self.current_location(), to = %path, "nav reset");
        self.entries.clear();
        self.entries.push(path.to_string());
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Oldest entry first.
    pub fn history(&self) -> &[String] {
        &self.entries
    }
}

impl Navigator for NavigationStack {
    fn current_location(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("/")
    }

    /// Pushing the location already on top is a no-op.
    fn navigate_to(&mut self, path: &str) {
        if normalize(self.current_location()) == normalize(path) {
            return;
        }
        tracing::debug!(from = %self.current_location(), to = %path, "nav push");
        self.entries.push(path.to_string());
    }

    fn replace_location(&mut self, path: &str) {
        tracing::debug!(from = %self.current_location(), to = %path, "nav replace");
        match self.entries.last_mut() {
            Some(last) => *last = path.to_string(),
            None => self.entries.push(path.to_string()),
        }
    }
}
