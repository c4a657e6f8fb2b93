use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use parking_lot::Mutex;
use tokio::runtime::Handle;

use crate::attendance::Attendance;
use crate::config::Config;
use crate::nav::route::normalize;
use crate::nav::{NavigationStack, Navigator, RouteGuard};
use crate::session::{
    AuthError, Credentials, MockAuthBackend, SessionEvent, SessionProvider, SessionStore,
    SignupProfile, User,
};
use crate::ui::auth_form::{AuthFormIntent, AuthFormReducer, AuthFormState, AuthScreen, FieldKind};
use crate::ui::mvi::{dispatch_mvi, Reducer};
use crate::ui::shell::NavigationShell;
use crate::ui::side_menu::MenuEvent;

/// Idle redraw interval when no transition is running.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// What dismissing a notice does besides closing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeAction {
    Close,
    /// Close and pop the navigation stack.
    Back,
}

/// Modal notification, e.g. an auth failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub on_dismiss: NoticeAction,
}

pub struct App {
    config: Config,
    session: SessionProvider<MockAuthBackend>,
    session_events: Receiver<SessionEvent>,
    nav: NavigationStack,
    guard: RouteGuard,
    /// Present only while the guard allows the shell to render.
    shell: Option<NavigationShell>,
    auth_form: AuthFormState,
    attendance: Attendance,
    notice: Option<Notice>,
    size: (u16, u16),
    should_quit: bool,
}

impl App {
    /// Start at the home screen; the guard sends an unauthenticated user to
    /// the entry screen on the first sync.
    pub fn new(config: Config, runtime: Handle, size: (u16, u16)) -> Self {
        let store = SessionStore::new();
        let (tx, rx) = mpsc::channel();
        let tx = Mutex::new(tx);
        store.subscribe(move |event| {
            let _ = tx.lock().send(event.clone());
        });

        let backend = MockAuthBackend::new(Duration::from_millis(config.auth.latency_ms));
        let nav = NavigationStack::new(config.routes.home.clone());
        let guard = RouteGuard::new(config.routes.entry.clone());

        let mut app = Self {
            config,
            session: SessionProvider::new(store, backend, runtime),
            session_events: rx,
            nav,
            guard,
            shell: None,
            auth_form: AuthFormState::default(),
            attendance: Attendance::new(),
            notice: None,
            size,
            should_quit: false,
        };
        app.sync();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn location(&self) -> &str {
        self.nav.current_location()
    }

    pub fn navigator(&self) -> &NavigationStack {
        &self.nav
    }

    pub fn session_store(&self) -> &SessionStore {
        self.session.store()
    }

    pub fn user(&self) -> Option<User> {
        self.session.store().user()
    }

    pub fn is_auth_pending(&self) -> bool {
        self.session.store().is_pending()
    }

    pub fn shell(&self) -> Option<&NavigationShell> {
        self.shell.as_ref()
    }

    pub fn auth_form(&self) -> &AuthFormState {
        &self.auth_form
    }

    /// Auth screen for the current location, if any.
    pub fn auth_screen(&self) -> Option<AuthScreen> {
        AuthScreen::from_location(self.guard.entry_path(), self.nav.current_location())
    }

    pub fn attendance(&self) -> &Attendance {
        &self.attendance
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    /// Drawer width stays as mounted; only later mounts see the new size.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    /// How long the event loop may wait before the next frame.
    pub fn frame_interval(&self) -> Duration {
        if self.needs_frames() {
            Duration::from_millis(self.config.shell.frame_interval_ms)
        } else {
            IDLE_TICK
        }
    }

    pub fn needs_frames(&self) -> bool {
        self.shell.as_ref().is_some_and(NavigationShell::needs_frames)
    }

    // ========================================================================
    // Guard and session
    // ========================================================================

    /// Re-evaluate the guard against the current session and location, then
    /// mount or unmount the shell to match.
    pub fn sync(&mut self) {
        let has_session = self.session.store().is_authenticated();
        let mut decision = self.guard.evaluate(has_session, self.nav.current_location());
        if let Some(target) = decision.redirect.take() {
            self.nav.replace_location(&target);
            decision = self.guard.evaluate(has_session, self.nav.current_location());
        }

        if decision.render_shell {
            if self.shell.is_none() {
                self.shell = Some(NavigationShell::mount(&self.config, self.size.0));
            }
        } else if let Some(mut shell) = self.shell.take() {
            shell.unmount();
        }

        if let Some(screen) = self.auth_screen() {
            if screen != self.auth_form.screen {
                self.dispatch_form(AuthFormIntent::Load { screen });
            }
        }
    }

    /// Apply session events published since the last call.
    pub fn drain_session_events(&mut self) -> usize {
        let events: Vec<SessionEvent> = self.session_events.try_iter().collect();
        let count = events.len();
        for event in events {
            self.on_session_event(event);
        }
        count
    }

    pub fn on_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Authenticated { operation, user } => {
                tracing::debug!(?operation, user = %user.name, "Entering home");
                // Drop the auth screens so back cannot return to them.
                self.nav.reset(&self.config.routes.home);
                self.dispatch_form(AuthFormIntent::Clear);
            }
            SessionEvent::Failed { operation, error } => {
                tracing::debug!(?operation, error = %error, "Showing failure notice");
                self.notice = Some(Notice {
                    title: operation.failure_title().to_string(),
                    message: operation.failure_message().to_string(),
                    on_dismiss: NoticeAction::Close,
                });
            }
            SessionEvent::LoggedOut => self.dispatch_form(AuthFormIntent::Clear),
            SessionEvent::Pending { .. } => {}
        }
        self.sync();
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.drain_session_events();
        if let Some(shell) = self.shell.as_mut() {
            shell.tick(now);
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Push `path` and re-run the guard.
    pub fn navigate_to(&mut self, path: &str) {
        self.nav.navigate_to(path);
        self.sync();
    }

    pub fn back(&mut self) -> bool {
        let moved = self.nav.back();
        if moved {
            self.sync();
        }
        moved
    }

    pub fn toggle_drawer(&mut self, now: Instant) {
        if let Some(shell) = self.shell.as_mut() {
            shell.toggle_drawer(now);
        }
    }

    /// Close the drawer through the dismiss surface.
    pub fn dismiss_drawer(&mut self, now: Instant) -> bool {
        self.shell.as_mut().is_some_and(|shell| shell.dismiss(now))
    }

    pub fn drawer_has_focus(&self) -> bool {
        self.shell.as_ref().is_some_and(NavigationShell::drawer_has_focus)
    }

    pub fn select_tab(&mut self, index: usize) {
        let Some(shell) = self.shell.as_mut() else {
            return;
        };
        if shell.select_tab(index, &mut self.nav) {
            self.sync();
        }
    }

    /// Select the tab `delta` positions away from the active one, wrapping.
    pub fn step_tab(&mut self, delta: isize) {
        let Some(shell) = self.shell.as_ref() else {
            return;
        };
        let count = shell.destinations().len();
        if count == 0 {
            return;
        }
        let active = shell.active_tab(self.nav.current_location());
        let next = (active as isize + delta).rem_euclid(count as isize) as usize;
        self.select_tab(next);
    }

    pub fn move_menu_cursor(&mut self, delta: i32) {
        if let Some(shell) = self.shell.as_mut() {
            shell.move_menu_cursor(delta, self.nav.current_location());
        }
    }

    pub fn activate_menu_cursor(&mut self, now: Instant) {
        let event = self
            .shell
            .as_ref()
            .and_then(|shell| shell.activate_menu_cursor(self.nav.current_location()));
        if let Some(event) = event {
            self.on_menu_event(event, now);
        }
    }

    pub fn activate_menu_row(&mut self, index: usize, now: Instant) {
        let event = self
            .shell
            .as_ref()
            .and_then(|shell| shell.menu_row_event(index, self.nav.current_location()));
        if let Some(event) = event {
            self.on_menu_event(event, now);
        }
    }

    pub fn on_menu_event(&mut self, event: MenuEvent, now: Instant) {
        let Some(shell) = self.shell.as_mut() else {
            return;
        };
        shell.handle_menu_event(event, &self.session, &mut self.nav, now);
        self.sync();
    }

    // ========================================================================
    // Screens
    // ========================================================================

    pub fn is_home(&self) -> bool {
        self.shell.is_some()
            && normalize(self.nav.current_location()) == normalize(&self.config.routes.home)
    }

    /// Punch in or out. Only the home screen carries the attendance card.
    pub fn punch(&mut self, now: NaiveDateTime) -> bool {
        if !self.is_home() {
            return false;
        }
        self.attendance.punch(now);
        true
    }

    pub fn form_input(&mut self, intent: AuthFormIntent) {
        if self.auth_screen().is_some() {
            self.dispatch_form(intent);
        }
    }

    pub fn open_auth_screen(&mut self, screen: AuthScreen) {
        if self.auth_screen().is_none() || self.auth_screen() == Some(screen) {
            return;
        }
        let path = screen.path(self.guard.entry_path());
        self.navigate_to(&path);
    }

    /// Validate the form and start the matching operation.
    pub fn submit_auth_form(&mut self) {
        if self.auth_screen().is_none() || self.session.store().is_pending() {
            return;
        }
        self.dispatch_form(AuthFormIntent::Validate);
        if self.auth_form.has_errors() {
            return;
        }

        let email = self.auth_form.value(FieldKind::Email).trim().to_string();
        let started = match self.auth_form.screen {
            AuthScreen::SignIn => {
                let password = self.auth_form.value(FieldKind::Password).to_string();
                self.session.login(Credentials::new(email, password)).map(drop)
            }
            AuthScreen::SignUp => {
                let profile = SignupProfile::new(
                    self.auth_form.value(FieldKind::Name).trim(),
                    email,
                    self.auth_form.value(FieldKind::Password),
                );
                self.session.signup(profile).map(drop)
            }
            AuthScreen::ForgotPassword => {
                tracing::info!(email = %email, "Password reset requested");
                self.notice = Some(Notice {
                    title: "Reset Email Sent".to_string(),
                    message: format!("We've sent password reset instructions to {email}"),
                    on_dismiss: NoticeAction::Back,
                });
                Ok(())
            }
        };

        match started {
            Ok(()) => {}
            Err(AuthError::AlreadyPending) => tracing::debug!("Submit ignored, operation pending"),
            Err(error) => tracing::warn!(error = %error, "Auth operation not started"),
        }
    }

    pub fn dismiss_notice(&mut self) {
        let Some(notice) = self.notice.take() else {
            return;
        };
        if notice.on_dismiss == NoticeAction::Back && !self.back() {
            let entry = self.guard.entry_path().to_string();
            self.nav.replace_location(&entry);
            self.sync();
        }
    }

    fn dispatch_form(&mut self, intent: AuthFormIntent) {
        dispatch_mvi!(self, auth_form, AuthFormReducer, intent);
    }
}
