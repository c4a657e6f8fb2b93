use crate::ui::app::App;
use crate::ui::auth_form::{AuthFormIntent, AuthScreen};
use crate::ui::layout::{contains, drawer_rect, layout_regions, scaled_rect, tab_at, MENU_BUTTON_WIDTH};
use crate::ui::side_menu::{row_at, MenuEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.notice().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.dismiss_notice();
        }
        return;
    }

    if app.shell().is_some() {
        handle_shell_key(app, key, now);
    } else if app.auth_screen().is_some() {
        handle_auth_key(app, key);
    }
}

fn handle_shell_key(app: &mut App, key: KeyEvent, now: Instant) {
    if matches!(key.code, KeyCode::F(2) | KeyCode::Char('m')) && key.modifiers.is_empty() {
        app.toggle_drawer(now);
        return;
    }

    if app.drawer_has_focus() {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_menu_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_menu_cursor(1),
            KeyCode::Enter => app.activate_menu_cursor(now),
            KeyCode::Esc => app.on_menu_event(MenuEvent::Close, now),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.dismiss_drawer(now);
        }
        KeyCode::Left => app.step_tab(-1),
        KeyCode::Right => app.step_tab(1),
        KeyCode::Backspace => {
            app.back();
        }
        KeyCode::Char('p') => {
            app.punch(chrono::Local::now().naive_local());
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            if let Some(digit) = ch.to_digit(10) {
                if digit > 0 {
                    app.select_tab(digit as usize - 1);
                }
            }
        }
        _ => {}
    }
}

fn handle_auth_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'n') {
        app.open_auth_screen(AuthScreen::SignUp);
        return;
    }
    if is_ctrl_char(key, 'f') {
        app.open_auth_screen(AuthScreen::ForgotPassword);
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.form_input(AuthFormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.form_input(AuthFormIntent::FocusPrev),
        KeyCode::Enter => app.submit_auth_form(),
        KeyCode::Backspace => app.form_input(AuthFormIntent::DeleteBack),
        KeyCode::Esc => {
            app.back();
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_input(AuthFormIntent::Insert(ch));
        }
        _ => {}
    }
}

/// Clicks: menu button, drawer rows, dismiss surface, tabs.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect, now: Instant) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || app.notice().is_some() {
        return;
    }
    let Some(shell) = app.shell() else {
        return;
    };
    let (x, y) = (mouse.column, mouse.row);
    let frame = shell.frame(now);

    if frame.dismiss_surface {
        let drawer = drawer_rect(area, shell.drawer_columns(), &frame);
        if contains(drawer, x, y) {
            let rows = shell.menu_rows(app.location()).len();
            if let Some(index) = row_at(drawer.y, rows, y) {
                app.activate_menu_row(index, now);
            }
        } else {
            app.dismiss_drawer(now);
        }
        return;
    }

    let (header, _, footer) = layout_regions(scaled_rect(area, frame.scale));
    let count = shell.destinations().len();
    if contains(header, x, y) && x < header.x + MENU_BUTTON_WIDTH {
        app.toggle_drawer(now);
    } else if contains(footer, x, y) {
        if let Some(index) = tab_at(footer, count, x) {
            app.select_tab(index);
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(ch))
        }
    }

    #[test]
    fn ctrl_q_quits_everywhere() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = App::new(Config::default(), runtime.handle().clone(), (80, 24));
        handle_key(&mut app, ctrl('q'), Instant::now());
        assert!(app.should_quit());
    }

    #[test]
    fn auth_shortcuts_switch_screens() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = App::new(Config::default(), runtime.handle().clone(), (80, 24));
        handle_key(&mut app, ctrl('n'), Instant::now());
        assert_eq!(app.location(), "/(auth)/signup");
        handle_key(&mut app, key(KeyCode::Esc), Instant::now());
        assert_eq!(app.location(), "/(auth)");
        handle_key(&mut app, ctrl('f'), Instant::now());
        assert_eq!(app.location(), "/(auth)/forgot-password");
    }

    #[test]
    fn typing_fills_focused_field() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = App::new(Config::default(), runtime.handle().clone(), (80, 24));
        for ch in "ab".chars() {
            handle_key(&mut app, key(KeyCode::Char(ch)), Instant::now());
        }
        handle_key(&mut app, key(KeyCode::Backspace), Instant::now());
        assert_eq!(app.auth_form().fields[0].value, "a");
    }
}
