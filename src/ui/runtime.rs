use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use parking_lot::Mutex;
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

/// Input thread tick; the loop below wakes faster while the drawer moves.
const INPUT_TICK: Duration = Duration::from_millis(250);

/// Run the TUI until the user quits. Auth operations run on `runtime`.
pub fn run(config: Config, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let size = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(config, runtime, size);
    let events = EventHandler::new(INPUT_TICK);

    // Wake the loop as soon as an auth operation settles.
    let wake = Mutex::new(events.sender());
    app.session_store().subscribe(move |_| {
        let _ = wake.lock().send(AppEvent::Session);
    });

    tracing::info!(cols = size.0, rows = size.1, "UI started");

    loop {
        let now = Instant::now();
        app.on_tick(now);
        terminal.draw(|frame| draw(frame, &app, now))?;
        if app.should_quit() {
            break;
        }

        let now = Instant::now();
        match events.next(app.frame_interval()) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, now),
            Ok(AppEvent::Mouse(mouse)) => {
                let (cols, rows) = app.size();
                handle_mouse(&mut app, mouse, Rect::new(0, 0, cols, rows), now);
            }
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Session) => {
                app.drain_session_events();
            }
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("UI stopped");
    drop(events);
    drop(guard);
    Ok(())
}
