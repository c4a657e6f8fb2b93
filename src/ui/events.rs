use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    /// The session store published a change.
    Session,
}

/// Terminal input reader running on its own thread.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let worker = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if stop_flag.load(Ordering::Relaxed) {
                    break;
                }

                // Short poll timeout so the stop flag is checked frequently
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            let _ = event_tx.send(AppEvent::Key(key));
                        }
                        Ok(Event::Mouse(mouse)) => {
                            let _ = event_tx.send(AppEvent::Mouse(mouse));
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal read failed");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            rx,
            tx,
            stop,
            worker: Some(worker),
        }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
