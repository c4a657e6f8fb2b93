//! End-to-end flows through the app state and key handling.

mod common;

use common::{make_app, ms, pump_until};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fieldsales::session::{AuthError, AuthOperation, SessionEvent};
use fieldsales::ui::app::{App, NoticeAction};
use fieldsales::ui::auth_form::AuthScreen;
use fieldsales::ui::input::handle_key;
use std::time::Instant;

fn press(app: &mut App, code: KeyCode, now: Instant) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), now);
}

fn type_text(app: &mut App, text: &str, now: Instant) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch), now);
    }
}

fn sign_in(app: &mut App, now: Instant) {
    type_text(app, "asha.k@example.com", now);
    press(app, KeyCode::Tab, now);
    type_text(app, "secret", now);
    press(app, KeyCode::Enter, now);
    assert!(pump_until(app, |app| app.shell().is_some()));
}

#[test]
fn login_then_logout_through_the_menu() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut app = make_app(&runtime);
    let start = Instant::now();

    sign_in(&mut app, start);
    assert_eq!(app.location(), "/dashboard");
    assert!(app.is_home());
    assert_eq!(app.navigator().depth(), 1);
    assert_eq!(app.user().map(|u| u.name), Some("Asha K".to_string()));
    assert!(app.auth_form().value(fieldsales::ui::auth_form::FieldKind::Email).is_empty());

    // Open the drawer, wrap the cursor up onto the logout row, activate.
    press(&mut app, KeyCode::Char('m'), start);
    app.on_tick(start + ms(300));
    assert!(app.drawer_has_focus());
    press(&mut app, KeyCode::Up, start + ms(300));
    press(&mut app, KeyCode::Enter, start + ms(300));

    assert_eq!(app.location(), "/(auth)");
    assert!(app.shell().is_none());
    assert!(app.user().is_none());
    assert_eq!(app.auth_screen(), Some(AuthScreen::SignIn));
}

#[test]
fn tabs_and_back_move_between_sections() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut app = make_app(&runtime);
    let start = Instant::now();
    sign_in(&mut app, start);

    press(&mut app, KeyCode::Char('3'), start);
    assert_eq!(app.location(), "/orders");
    press(&mut app, KeyCode::Right, start);
    assert_eq!(app.location(), "/inventory");
    press(&mut app, KeyCode::Backspace, start);
    assert_eq!(app.location(), "/orders");
    // Reselecting the active tab pushes nothing.
    let depth = app.navigator().depth();
    press(&mut app, KeyCode::Char('3'), start);
    assert_eq!(app.navigator().depth(), depth);
}

#[test]
fn punching_only_counts_on_home() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut app = make_app(&runtime);
    let start = Instant::now();
    sign_in(&mut app, start);

    let morning = chrono::NaiveDate::from_ymd_opt(2024, 5, 6)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    assert!(app.punch(morning));
    assert_eq!(app.attendance().action_label(), "Punch Out");

    app.select_tab(1);
    assert!(!app.punch(morning));
}

#[test]
fn failed_login_shows_a_dismissable_notice() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut app = make_app(&runtime);
    let start = Instant::now();

    app.on_session_event(SessionEvent::Failed {
        operation: AuthOperation::Login,
        error: AuthError::InvalidCredentials,
    });
    let notice = app.notice().cloned().unwrap();
    assert_eq!(notice.title, "Login Failed");
    assert_eq!(notice.message, "Invalid username or password");
    assert_eq!(notice.on_dismiss, NoticeAction::Close);

    // Keys other than dismiss are swallowed while the notice is up.
    press(&mut app, KeyCode::Char('x'), start);
    assert!(app.auth_form().fields.iter().all(|f| f.value.is_empty()));
    press(&mut app, KeyCode::Esc, start);
    assert!(app.notice().is_none());
    assert_eq!(app.location(), "/(auth)");
}

#[test]
fn forgot_password_returns_to_sign_in() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut app = make_app(&runtime);
    let start = Instant::now();

    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL),
        start,
    );
    assert_eq!(app.auth_screen(), Some(AuthScreen::ForgotPassword));
    assert_eq!(app.location(), "/(auth)/forgot-password");

    type_text(&mut app, "ravi@example.com", start);
    press(&mut app, KeyCode::Enter, start);
    let notice = app.notice().cloned().unwrap();
    assert_eq!(notice.title, "Reset Email Sent");
    assert!(notice.message.contains("ravi@example.com"));

    press(&mut app, KeyCode::Enter, start);
    assert_eq!(app.location(), "/(auth)");
    assert_eq!(app.auth_screen(), Some(AuthScreen::SignIn));
}

#[test]
fn signup_lands_on_home() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut app = make_app(&runtime);
    let start = Instant::now();

    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL),
        start,
    );
    assert_eq!(app.auth_screen(), Some(AuthScreen::SignUp));
    type_text(&mut app, "Ravi Kumar", start);
    press(&mut app, KeyCode::Tab, start);
    type_text(&mut app, "ravi@example.com", start);
    press(&mut app, KeyCode::Tab, start);
    type_text(&mut app, "pw", start);
    press(&mut app, KeyCode::Enter, start);

    assert!(pump_until(&mut app, |app| app.is_home()));
    assert_eq!(app.user().map(|u| u.name), Some("Ravi Kumar".to_string()));

    // The auth screens are gone from history: back stays on home.
    assert_eq!(app.navigator().history(), ["/dashboard"]);
    press(&mut app, KeyCode::Backspace, start);
    assert_eq!(app.location(), "/dashboard");
    assert!(app.shell().is_some());
    assert_eq!(app.auth_screen(), None);
}

#[test]
fn signup_failure_shows_generic_message() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut app = make_app(&runtime);

    app.on_session_event(SessionEvent::Failed {
        operation: AuthOperation::Signup,
        error: AuthError::IncompleteProfile,
    });
    let notice = app.notice().cloned().unwrap();
    assert_eq!(notice.title, "Signup Failed");
    assert_eq!(notice.message, "Please check your information and try again");
}
