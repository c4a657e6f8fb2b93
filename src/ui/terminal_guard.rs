use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Restores the terminal on drop and on panic, whichever comes first.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Cleanup>>>,
}

impl TerminalGuard {
    fn new(cleanup: Cleanup) -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(Some(cleanup))),
        }
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Some(cleanup) = cleanup.lock().take() {
                cleanup();
            }
            default_hook(info);
        }));
    }

    fn restore(&self) {
        if let Some(cleanup) = self.cleanup.lock().take() {
            cleanup();
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(Hide)?;

    let guard = TerminalGuard::new(Box::new(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }));
    guard.install_panic_hook();

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
