// File: crates/shutdown-report/src/palette.rs
// Summary: Report color palette as 0xRRGGBB literals.

pub const RED: u32 = 0xe74c3c;
pub const DARK_RED: u32 = 0xc0392b;
pub const BLUE: u32 = 0x3498db;
pub const DARK_BLUE: u32 = 0x2980b9;
pub const PURPLE: u32 = 0x9b59b6;
pub const DARK_PURPLE: u32 = 0x8e44ad;
pub const GREEN: u32 = 0x27ae60;
pub const DARK_GREEN: u32 = 0x1e8449;
pub const NAVY: u32 = 0x2c3e50;
pub const SILVER: u32 = 0xbdc3c7;
pub const SAND: u32 = 0xffeaa7;
pub const ORANGE: u32 = 0xf39c12;
pub const GRAY: u32 = 0x808080;
pub const WHITE: u32 = 0xffffff;
