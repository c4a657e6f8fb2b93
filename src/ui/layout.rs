use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::ui::drawer::DrawerFrame;

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
/// Header columns that act as the menu button.
pub const MENU_BUTTON_WIDTH: u16 = 4;

/// Split the shell area into header, body and footer (tab strip).
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Background content area shrunk around its centre by `scale`.
pub fn scaled_rect(area: Rect, scale: f32) -> Rect {
    let scale = scale.clamp(0.0, 1.0);
    let inset_x = ((f32::from(area.width) * (1.0 - scale)) / 2.0).round() as u16;
    let inset_y = ((f32::from(area.height) * (1.0 - scale)) / 2.0).round() as u16;
    Rect {
        x: area.x + inset_x,
        y: area.y + inset_y,
        width: area.width.saturating_sub(inset_x * 2),
        height: area.height.saturating_sub(inset_y * 2),
    }
}

/// Columns of the drawer that are on screen for `frame`.
pub fn visible_drawer_width(drawer_width: u16, frame: &DrawerFrame) -> u16 {
    let visible = (f32::from(drawer_width) + frame.offset).round();
    visible.clamp(0.0, f32::from(drawer_width)) as u16
}

/// On-screen part of the drawer, anchored to the left edge of `area`.
pub fn drawer_rect(area: Rect, drawer_width: u16, frame: &DrawerFrame) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: visible_drawer_width(drawer_width, frame).min(area.width),
        height: area.height,
    }
}

/// Index of the tab under column `x` when `count` tabs share `strip` evenly.
pub fn tab_at(strip: Rect, count: usize, x: u16) -> Option<usize> {
    if count == 0 || strip.width == 0 || x < strip.x || x >= strip.x + strip.width {
        return None;
    }
    let offset = usize::from(x - strip.x);
    Some((offset * count / usize::from(strip.width)).min(count - 1))
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

pub fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::drawer::DrawerGeometry;

    #[test]
    fn regions_stack_vertically() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.y, 21);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
    }

    #[test]
    fn scale_insets_symmetrically() {
        let rect = scaled_rect(Rect::new(0, 0, 80, 40), 0.95);
        assert_eq!(rect, Rect::new(2, 1, 76, 38));
        assert_eq!(scaled_rect(Rect::new(0, 0, 100, 40), 1.0), Rect::new(0, 0, 100, 40));
    }

    #[test]
    fn drawer_reveals_with_progress() {
        let geometry = DrawerGeometry::from_viewport(80, 0.75);
        assert_eq!(visible_drawer_width(60, &geometry.frame(0.0)), 0);
        assert_eq!(visible_drawer_width(60, &geometry.frame(0.5)), 30);
        assert_eq!(visible_drawer_width(60, &geometry.frame(1.0)), 60);
    }

    #[test]
    fn tabs_split_strip_evenly() {
        let strip = Rect::new(0, 21, 60, 3);
        assert_eq!(tab_at(strip, 6, 0), Some(0));
        assert_eq!(tab_at(strip, 6, 59), Some(5));
        assert_eq!(tab_at(strip, 6, 25), Some(2));
        assert_eq!(tab_at(strip, 0, 25), None);
    }
}
