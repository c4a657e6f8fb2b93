//! Screen bodies: dashboard, section placeholders and the auth forms.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::attendance::{Attendance, AttendanceStatus};
use crate::config::{Destination, MenuEntry};
use crate::nav::route::normalize;
use crate::ui::auth_form::{AuthFormState, AuthScreen};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    BRAND_BLUE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};

/// Label for `location`: the deepest menu entry or tab with that exact path,
/// falling back to the location itself.
pub fn screen_title(menu: &[MenuEntry], destinations: &[Destination], location: &str) -> String {
    let location = normalize(location);
    menu.iter()
        .flat_map(|entry| entry.children.iter().chain(std::iter::once(entry)))
        .find(|entry| normalize(&entry.path) == location)
        .map(|entry| entry.label.clone())
        .or_else(|| {
            destinations
                .iter()
                .find(|destination| normalize(&destination.path) == location)
                .map(|destination| destination.label.clone())
        })
        .unwrap_or_else(|| location.to_string())
}

pub struct DashboardView<'a> {
    pub user_name: &'a str,
    pub date: &'a str,
    pub attendance: &'a Attendance,
}

impl Widget for DashboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [greeting, card, progress] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" Welcome, {}", self.user_name),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {}", self.date),
                Style::default().fg(MUTED_TEXT),
            )),
        ])
        .render(greeting, buf);

        let status = self.attendance.status();
        let status_color = match status {
            AttendanceStatus::NoRecord => MUTED_TEXT,
            AttendanceStatus::Working => STATUS_OK,
            AttendanceStatus::Complete => STATUS_WARN,
        };
        let card_lines = vec![
            Line::from(Span::styled(status.label(), Style::default().fg(status_color))),
            Line::from(""),
            Line::from(format!(
                "Punch In {:>10}   Punch Out {:>10}   Total Hours {:>6}",
                self.attendance.punch_in_label(),
                self.attendance.punch_out_label(),
                self.attendance.total_label(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("[p] {}", self.attendance.action_label()),
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
            )),
        ];
        Paragraph::new(card_lines)
            .block(
                Block::default()
                    .title(" Time Tracking ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .render(card, buf);

        let total_hours = self.attendance.total_label();
        let stats = [
            ("No. of Dealers Visited", "5"),
            ("Sales Target Progress (monthly)", "63%"),
            ("Orders Placed Today", "3"),
            ("Order Value Today", "₹ 7000"),
            ("Field Activities this Week", "2"),
            ("Hours Worked Today", total_hours.as_str()),
        ];
        let mut lines = vec![Line::from(Span::styled(
            " My Progress:",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))];
        lines.extend(stats.iter().map(|(title, value)| {
            Line::from(vec![
                Span::styled(format!(" {title:<34}"), Style::default().fg(MUTED_TEXT)),
                Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
            ])
        }));
        Paragraph::new(lines).render(progress, buf);
    }
}

/// Sections without content of their own yet.
pub struct SectionView<'a> {
    pub title: &'a str,
    pub location: &'a str,
}

impl Widget for SectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {}", self.title),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {}", self.location),
                Style::default().fg(MUTED_TEXT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                " Nothing here yet.",
                Style::default().fg(MUTED_TEXT),
            )),
        ])
        .render(area, buf);
    }
}

pub struct AuthFormView<'a> {
    pub brand: &'a str,
    pub form: &'a AuthFormState,
    pub pending: bool,
}

impl Widget for AuthFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let screen = self.form.screen;
        let mut lines = vec![
            Line::from(Span::styled(
                self.brand.to_uppercase(),
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(""),
        ];
        if screen == AuthScreen::ForgotPassword {
            lines.push(Line::from(Span::styled(
                "Enter your email address and we'll send you instructions to reset your password.",
                Style::default().fg(MUTED_TEXT),
            )));
            lines.push(Line::from(""));
        }

        for (idx, field) in self.form.fields.iter().enumerate() {
            let focused = idx == self.form.focused;
            let label_style = if focused {
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            lines.push(Line::from(Span::styled(field.kind.label(), label_style)));
            let value = if field.value.is_empty() && !focused {
                Span::styled(field.kind.placeholder(), Style::default().fg(MUTED_TEXT))
            } else {
                let cursor = if focused { "▏" } else { "" };
                Span::styled(
                    format!("{}{cursor}", field.display_value()),
                    Style::default().fg(HEADER_TEXT),
                )
            };
            lines.push(Line::from(vec![Span::raw(if focused { "› " } else { "  " }), value]));
            match &field.error {
                Some(error) => lines.push(Line::from(Span::styled(
                    format!("  {error}"),
                    Style::default().fg(STATUS_ERROR),
                ))),
                None => lines.push(Line::from("")),
            }
        }

        let submit = if self.pending {
            Span::styled("Please wait…", Style::default().fg(MUTED_TEXT))
        } else {
            Span::styled(
                format!("[Enter] {}", screen.submit_label()),
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
            )
        };
        lines.push(Line::from(submit).alignment(Alignment::Center));
        lines.push(Line::from(""));
        let hints = match screen {
            AuthScreen::SignIn => "Tab: Next field │ Ctrl+N: Sign up │ Ctrl+F: Forgot password",
            AuthScreen::SignUp | AuthScreen::ForgotPassword => "Tab: Next field │ Esc: Back",
        };
        lines.push(
            Line::from(Span::styled(hints, Style::default().fg(MUTED_TEXT)))
                .alignment(Alignment::Center),
        );

        let height = lines.len() as u16 + 2;
        let card = centered_rect_by_size(area, 64, height);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(format!(" {} ", screen.title()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .render(card, buf);
    }
}
