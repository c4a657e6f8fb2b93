//! Route guard: gating, single redirect per offending transition.

mod common;

use fieldsales::nav::{Navigator, RouteGuard};
use fieldsales::ui::auth_form::AuthScreen;

#[test]
fn repeated_evaluation_redirects_once() {
    let mut guard = RouteGuard::new("/(auth)");

    let first = guard.evaluate(false, "/orders");
    assert!(!first.render_shell);
    assert_eq!(first.redirect.as_deref(), Some("/(auth)"));

    // Redirect not applied yet: re-evaluating must not issue another.
    for _ in 0..5 {
        let again = guard.evaluate(false, "/orders");
        assert!(!again.render_shell);
        assert_eq!(again.redirect, None);
    }
}

#[test]
fn each_new_offending_transition_redirects_again() {
    let mut guard = RouteGuard::new("/(auth)");
    assert!(guard.evaluate(false, "/orders").redirect.is_some());
    assert!(guard.evaluate(false, "/(auth)").redirect.is_none());
    assert!(guard.evaluate(false, "/dealers/info").redirect.is_some());
}

#[test]
fn session_present_renders_shell_outside_entry_section() {
    let mut guard = RouteGuard::new("/(auth)");
    let decision = guard.evaluate(true, "/orders/track");
    assert!(decision.render_shell);
    assert_eq!(decision.redirect, None);

    let decision = guard.evaluate(true, "/(auth)/signup");
    assert!(!decision.render_shell);
    assert_eq!(decision.redirect, None);
}

#[test]
fn entry_section_is_public_without_session() {
    let mut guard = RouteGuard::new("/(auth)");
    for location in ["/(auth)", "/(auth)/", "/(auth)/forgot-password"] {
        let decision = guard.evaluate(false, location);
        assert!(!decision.render_shell, "{location}");
        assert_eq!(decision.redirect, None, "{location}");
    }
}

#[test]
fn signed_out_deep_link_is_replaced_with_entry() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut app = common::make_app(&runtime);
    assert_eq!(app.location(), "/(auth)");

    app.navigate_to("/orders");
    assert_eq!(app.location(), "/(auth)");
    assert!(app.shell().is_none());
    // Replace, not push: back cannot return to the protected screen.
    assert_eq!(app.navigator().current_location(), "/(auth)");
    assert_eq!(app.navigator().history().last().map(String::as_str), Some("/(auth)"));
    assert!(app.navigator().history().iter().all(|entry| entry != "/orders"));
    assert_eq!(app.auth_screen(), Some(AuthScreen::SignIn));
}
