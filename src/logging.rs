use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file when `--log-file` is absent.
pub const LOG_ENV: &str = "FIELDSALES_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless a path is given, because the terminal belongs
/// to the TUI. Log files are created as `{path}.{timestamp}.{pid}` so that
/// concurrent instances never write to the same file.
pub fn init_tracing(log_path: Option<&Path>) {
    let log_path = match log_path {
        Some(path) => path.display().to_string(),
        None => match std::env::var(LOG_ENV) {
            Ok(path) if !path.is_empty() => path,
            _ => return,
        },
    };

    let unique_path = unique_log_path(&log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already installed");
    }
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = chrono::Utc::now().timestamp();
    format!("{}.{}.{}", base, timestamp, pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_path_carries_pid_suffix() {
        let path = unique_log_path("/tmp/fieldsales.log");
        assert!(path.starts_with("/tmp/fieldsales.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }
}
