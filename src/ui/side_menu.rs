//! Side menu: the drawer's list of destinations and sub-destinations.
//!
//! Rows are derived from the static menu configuration and the current
//! location every frame; nothing here is stored between frames except the
//! keyboard cursor, which lives in the shell.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::config::MenuEntry;
use crate::nav::route::normalize;
use crate::nav::menu_entry_is_active;
use crate::session::User;
use crate::ui::theme::{
    ACTIVE_MENU_BG, ACTIVE_MENU_TEXT, BRAND_BLUE, DRAWER_BG, DRAWER_BORDER, MENU_TEXT, MUTED_TEXT,
};

const BRAND_HEIGHT: u16 = 2;
const USER_CARD_HEIGHT: u16 = 3;

/// What the side menu asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// Navigate to `path` and close the drawer.
    Navigate(String),
    /// Clear the session, then replace the location with the entry screen.
    Logout,
    /// Close the drawer.
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRowKind {
    Entry { path: String },
    Logout,
}

/// One visible row of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub label: String,
    pub kind: MenuRowKind,
    /// 0 for top-level entries, 1 for sub-entries.
    pub depth: u8,
    pub active: bool,
}

impl MenuRow {
    /// Event emitted when this row is activated.
    pub fn event(&self) -> MenuEvent {
        match &self.kind {
            MenuRowKind::Entry { path } => MenuEvent::Navigate(path.clone()),
            MenuRowKind::Logout => MenuEvent::Logout,
        }
    }
}

/// Visible rows for `location`: every top-level entry, the children of the
/// active parent, and a trailing logout row.
pub fn menu_rows(menu: &[MenuEntry], location: &str) -> Vec<MenuRow> {
    let mut rows = Vec::new();
    for entry in menu {
        let active = menu_entry_is_active(entry, location);
        rows.push(MenuRow {
            label: entry.label.clone(),
            kind: MenuRowKind::Entry {
                path: entry.path.clone(),
            },
            depth: 0,
            active,
        });
        if active {
            for child in &entry.children {
                rows.push(MenuRow {
                    label: child.label.clone(),
                    kind: MenuRowKind::Entry {
                        path: child.path.clone(),
                    },
                    depth: 1,
                    active: normalize(location) == normalize(&child.path),
                });
            }
        }
    }
    rows.push(MenuRow {
        label: "Log Out".to_string(),
        kind: MenuRowKind::Logout,
        depth: 0,
        active: false,
    });
    rows
}

/// Drawer contents: brand header, user card, rows.
pub struct SideMenuView<'a> {
    pub brand: &'a str,
    pub user: Option<&'a User>,
    pub rows: &'a [MenuRow],
    pub cursor: usize,
}

impl Widget for SideMenuView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(DRAWER_BORDER))
            .style(Style::default().bg(DRAWER_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let [header, user_card, list] = Layout::vertical([
            Constraint::Length(BRAND_HEIGHT),
            Constraint::Length(USER_CARD_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(Line::from(Span::styled(
            format!(" {}", self.brand.to_uppercase()),
            Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
        )))
        .render(header, buf);

        let (name, employee) = match self.user {
            Some(user) => (user.name.as_str(), format!("Employee ID: {}", user.employee_id)),
            None => ("", String::new()),
        };
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {name}"),
                Style::default().fg(MENU_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {employee}"),
                Style::default().fg(MUTED_TEXT),
            )),
        ])
        .render(user_card, buf);

        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| row_line(row, idx == self.cursor))
            .collect();
        Paragraph::new(lines).render(list, buf);
    }
}

/// Row index under screen row `y` for a drawer drawn at `drawer_top`.
pub fn row_at(drawer_top: u16, row_count: usize, y: u16) -> Option<usize> {
    let first = drawer_top + BRAND_HEIGHT + USER_CARD_HEIGHT;
    let idx = usize::from(y.checked_sub(first)?);
    (idx < row_count).then_some(idx)
}

fn row_line(row: &MenuRow, focused: bool) -> Line<'static> {
    let indent = if row.depth > 0 { "    " } else { " " };
    let marker = if focused { "›" } else { " " };
    let label = match row.kind {
        MenuRowKind::Logout => format!("⏻ {}", row.label),
        MenuRowKind::Entry { .. } => row.label.clone(),
    };

    let mut style = if row.active {
        Style::default()
            .fg(ACTIVE_MENU_TEXT)
            .bg(ACTIVE_MENU_BG)
            .add_modifier(Modifier::BOLD)
    } else if row.depth > 0 {
        Style::default().fg(MUTED_TEXT)
    } else {
        Style::default().fg(MENU_TEXT)
    };
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{indent}{label}"), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn labels(rows: &[MenuRow]) -> Vec<&str> {
        rows.iter().map(|row| row.label.as_str()).collect()
    }

    #[test]
    fn children_hidden_until_parent_matches() {
        let config = Config::default();
        let rows = menu_rows(&config.menu, "/dashboard");
        assert!(!labels(&rows).contains(&"Place Order"));
        assert_eq!(rows.last().map(|row| &row.kind), Some(&MenuRowKind::Logout));
    }

    #[test]
    fn children_shown_for_descendant_location() {
        let config = Config::default();
        let rows = menu_rows(&config.menu, "/orders/place");
        let orders = rows.iter().find(|row| row.label == "Orders").unwrap();
        assert!(orders.active);
        let place = rows.iter().find(|row| row.label == "Place Order").unwrap();
        assert!(place.active);
        assert_eq!(place.depth, 1);
        let track = rows.iter().find(|row| row.label == "Track Order").unwrap();
        assert!(!track.active);
    }

    #[test]
    fn row_hit_test_skips_header_and_card() {
        assert_eq!(row_at(0, 3, 4), None);
        assert_eq!(row_at(0, 3, 5), Some(0));
        assert_eq!(row_at(0, 3, 7), Some(2));
        assert_eq!(row_at(0, 3, 8), None);
    }

    #[test]
    fn logout_row_emits_logout() {
        let rows = menu_rows(&[], "/");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].event(), MenuEvent::Logout);
    }
}
