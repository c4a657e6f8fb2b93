use crate::ui::theme::{BRAND_BLUE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: menu button, brand, signed-in user.
pub struct Header<'a> {
    brand: &'a str,
    user_name: Option<&'a str>,
    drawer_open: bool,
}

impl<'a> Header<'a> {
    pub fn new(brand: &'a str, user_name: Option<&'a str>, drawer_open: bool) -> Self {
        Self {
            brand,
            user_name,
            drawer_open,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let button_style = if self.drawer_open {
            Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let brand_style = Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD);
        let user_style = Style::default().fg(MUTED_TEXT);

        let button = " ☰  ";
        let brand = self.brand.to_string();
        let user = self
            .user_name
            .map(|name| format!("{name} "))
            .unwrap_or_default();

        let used = button.chars().count() + brand.chars().count() + user.chars().count();
        let padding = usize::from(area.width).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(button, button_style),
            Span::styled(brand, brand_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(user, user_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
