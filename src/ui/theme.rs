use ratatui::style::Color;

pub const BRAND_BLUE: Color = Color::Rgb(0x00, 0x5e, 0xb8);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_WARN: Color = Color::Rgb(0xf5, 0x9e, 0x0b);

pub const DRAWER_BG: Color = Color::Rgb(0x17, 0x17, 0x17);
pub const DRAWER_BORDER: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const MENU_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_MENU_BG: Color = Color::Rgb(0x1e, 0x3a, 0x5f);
pub const ACTIVE_MENU_TEXT: Color = Color::Rgb(0x93, 0xc5, 0xfd);

pub const TAB_ACTIVE: Color = BRAND_BLUE;
pub const TAB_INACTIVE: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
