//! Shared test utilities and doubles.

#![allow(dead_code, unused_imports)]

use fieldsales::config::Config;
use fieldsales::nav::Navigator;
use fieldsales::session::{SessionControl, User};
use fieldsales::ui::app::App;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Default config with an instant mock backend.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.latency_ms = 0;
    config
}

/// Write `content` to `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn sample_user() -> User {
    User {
        id: "1".to_string(),
        name: "Asha K".to_string(),
        employee_id: "Emp2054".to_string(),
        email: "asha.k@example.com".to_string(),
    }
}

// -- Navigation / session doubles ---------------------------------------------

/// Navigator that records pushes and replaces into a shared log.
pub struct RecordingNavigator {
    location: String,
    log: CallLog,
}

impl RecordingNavigator {
    pub fn new(location: &str, log: CallLog) -> Self {
        Self {
            location: location.to_string(),
            log,
        }
    }
}

impl Navigator for RecordingNavigator {
    fn current_location(&self) -> &str {
        &self.location
    }

    fn navigate_to(&mut self, path: &str) {
        self.log.lock().push(format!("push {path}"));
        self.location = path.to_string();
    }

    fn replace_location(&mut self, path: &str) {
        self.log.lock().push(format!("replace {path}"));
        self.location = path.to_string();
    }
}

/// Session that records logouts into the same log as the navigator.
pub struct RecordingSession {
    user: Mutex<Option<User>>,
    log: CallLog,
}

impl RecordingSession {
    pub fn signed_in(log: CallLog) -> Self {
        Self {
            user: Mutex::new(Some(sample_user())),
            log,
        }
    }
}

impl SessionControl for RecordingSession {
    fn current_user(&self) -> Option<User> {
        self.user.lock().clone()
    }

    fn logout(&self) {
        self.log.lock().push("logout".to_string());
        *self.user.lock() = None;
    }
}

// -- App helpers --------------------------------------------------------------

pub fn make_app(runtime: &tokio::runtime::Runtime) -> App {
    App::new(test_config(), runtime.handle().clone(), (100, 30))
}

/// Drain session events until `done` holds or two seconds pass.
pub fn pump_until(app: &mut App, done: impl Fn(&App) -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(2) {
        app.drain_session_events();
        if done(app) {
            return true;
        }
        std::thread::sleep(ms(5));
    }
    false
}
