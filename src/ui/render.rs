use crate::ui::app::{App, Notice};
use crate::ui::footer::TabStrip;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, drawer_rect, layout_regions, scaled_rect};
use crate::ui::screens::{screen_title, AuthFormView, DashboardView, SectionView};
use crate::ui::shell::NavigationShell;
use crate::ui::side_menu::SideMenuView;
use crate::ui::theme::{BRAND_BLUE, MUTED_TEXT, POPUP_BORDER};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};
use ratatui::Frame;
use std::time::Instant;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    match app.shell() {
        Some(shell) => draw_shell(frame, app, shell, area, now),
        None => {
            if app.auth_screen().is_some() {
                let brand = app.config().shell.title.as_str();
                frame.render_widget(
                    AuthFormView {
                        brand,
                        form: app.auth_form(),
                        pending: app.is_auth_pending(),
                    },
                    area,
                );
            }
        }
    }

    if let Some(notice) = app.notice() {
        draw_notice(frame, notice, area);
    }
}

fn draw_shell(frame: &mut Frame<'_>, app: &App, shell: &NavigationShell, area: Rect, now: Instant) {
    let drawer = shell.frame(now);
    let location = app.location();
    let user = app.user();
    let user_name = user.as_ref().map(|user| user.name.as_str());

    let content = scaled_rect(area, drawer.scale);
    let (header, body, footer) = layout_regions(content);

    let header_widget = Header::new(shell.brand(), user_name, shell.drawer_has_focus());
    frame.render_widget(header_widget.widget(header), header);

    if app.is_home() {
        let date = chrono::Local::now().format("%A, %B %-d, %Y").to_string();
        frame.render_widget(
            DashboardView {
                user_name: user_name.unwrap_or_default(),
                date: &date,
                attendance: app.attendance(),
            },
            body,
        );
    } else {
        let title = screen_title(&app.config().menu, shell.destinations(), location);
        frame.render_widget(
            SectionView {
                title: &title,
                location,
            },
            body,
        );
    }

    frame.render_widget(
        TabStrip::new(shell.destinations(), shell.active_tab(location)),
        footer,
    );

    if drawer.opacity < 1.0 {
        frame
            .buffer_mut()
            .set_style(content, Style::default().add_modifier(Modifier::DIM));
    }

    let visible = drawer_rect(area, shell.drawer_columns(), &drawer);
    if visible.width > 0 {
        let rows = shell.menu_rows(location);
        let overlay = DrawerOverlay {
            menu: SideMenuView {
                brand: shell.brand(),
                user: user.as_ref(),
                rows: &rows,
                cursor: shell.menu_cursor(location),
            },
            full_width: shell.drawer_columns(),
        };
        frame.render_widget(overlay, visible);
    }
}

/// Draws the full-width drawer off-screen and copies its right-most columns
/// into the visible strip, so the drawer slides in rather than reflowing.
struct DrawerOverlay<'a> {
    menu: SideMenuView<'a>,
    full_width: u16,
}

impl Widget for DrawerOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let full = Rect::new(0, 0, self.full_width.max(area.width), area.height);
        let mut scratch = Buffer::empty(full);
        self.menu.render(full, &mut scratch);

        let skip = full.width.saturating_sub(area.width);
        for y in 0..area.height {
            for x in 0..area.width {
                buf[(area.x + x, area.y + y)] = scratch[(skip + x, y)].clone();
            }
        }
    }
}

fn draw_notice(frame: &mut Frame<'_>, notice: &Notice, area: Rect) {
    let lines = vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] OK",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    let width = (notice.message.chars().count() as u16)
        .saturating_add(4)
        .clamp(30, 60);
    let popup = centered_rect_by_size(area, width, 6);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(
            notice.title.as_str(),
            Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        popup,
    );
}
