use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const FOCUS_BORDER: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const WIN_TEXT: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const ERROR_TEXT: Color = Color::Rgb(0xef, 0x44, 0x44);
