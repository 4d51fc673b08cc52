use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 102, g: 204, b: 170 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 196, b: 87 };
pub const SEPARATOR: Color = Color::TrueColor { r: 110, g: 110, b: 110 };
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };
pub const RECORD_ID: Color = Color::TrueColor { r: 120, g: 170, b: 255 };
pub const DATE: Color = Color::TrueColor { r: 230, g: 150, b: 220 };
