use crate::config::Destination;
use crate::ui::theme::{GLOBAL_BORDER, TAB_ACTIVE, TAB_INACTIVE};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Bottom tab strip; tabs share the width evenly.
pub struct TabStrip<'a> {
    destinations: &'a [Destination],
    active: usize,
}

impl<'a> TabStrip<'a> {
    pub fn new(destinations: &'a [Destination], active: usize) -> Self {
        Self {
            destinations,
            active,
        }
    }
}

impl Widget for TabStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.destinations.is_empty() {
            return;
        }
        let cells = Layout::horizontal(
            self.destinations
                .iter()
                .map(|_| Constraint::Ratio(1, self.destinations.len() as u32)),
        )
        .split(inner);

        for (idx, (destination, cell)) in self.destinations.iter().zip(cells.iter()).enumerate() {
            let style = if idx == self.active {
                Style::default().fg(TAB_ACTIVE).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TAB_INACTIVE)
            };
            let text = format!("{} {}", destination.glyph.symbol(), destination.label);
            Paragraph::new(Line::from(text))
                .style(style)
                .alignment(Alignment::Center)
                .render(*cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn active_tab_is_bold() {
        let config = Config::default();
        let area = Rect::new(0, 0, 120, 2);
        let mut buf = Buffer::empty(area);
        TabStrip::new(&config.destinations, 1).render(area, &mut buf);

        let text = row_text(&buf, 1);
        assert!(text.contains("Dealers"));
        let x = (0..area.width)
            .find(|&x| buf[(x, 1)].symbol() == "D" && buf[(x + 1, 1)].symbol() == "e")
            .unwrap();
        assert!(buf[(x, 1)].modifier.contains(Modifier::BOLD));
    }
}
