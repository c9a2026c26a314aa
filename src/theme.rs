//! Frame themes and the hex colors they are persisted as.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex color '{0}'. Expected #RGB or #RRGGBB")]
    InvalidHex(String),
}

/// RGB color value with hex string representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or the CSS shorthand `#RGB`, with or without `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || ColorError::InvalidHex(hex.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Named bezel finishes, each a fixed (base, border) color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameTheme {
    #[default]
    Obsidian,
    Gold,
    Silver,
    SkyBlue,
    Pearl,
}

impl FrameTheme {
    pub const ALL: [FrameTheme; 5] = [
        FrameTheme::Obsidian,
        FrameTheme::Gold,
        FrameTheme::Silver,
        FrameTheme::SkyBlue,
        FrameTheme::Pearl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FrameTheme::Obsidian => "Obsidian Black",
            FrameTheme::Gold => "Luxe Gold",
            FrameTheme::Silver => "Elegant Silver",
            FrameTheme::SkyBlue => "Sky Blue",
            FrameTheme::Pearl => "Pearl White",
        }
    }

    /// Hex strings as written to the config file.
    pub fn hex_pair(self) -> (&'static str, &'static str) {
        match self {
            FrameTheme::Obsidian => ("#111", "#444"),
            FrameTheme::Gold => ("#d4af37", "#b8860b"),
            FrameTheme::Silver => ("#e5e5e5", "#a3a3a3"),
            FrameTheme::SkyBlue => ("#3498db", "#2980b9"),
            FrameTheme::Pearl => ("#f0f0f0", "#ffffff"),
        }
    }

    pub fn base(self) -> RgbColor {
        match self {
            FrameTheme::Obsidian => RgbColor::new(0x11, 0x11, 0x11),
            FrameTheme::Gold => RgbColor::new(0xd4, 0xaf, 0x37),
            FrameTheme::Silver => RgbColor::new(0xe5, 0xe5, 0xe5),
            FrameTheme::SkyBlue => RgbColor::new(0x34, 0x98, 0xdb),
            FrameTheme::Pearl => RgbColor::new(0xf0, 0xf0, 0xf0),
        }
    }

    pub fn border(self) -> RgbColor {
        match self {
            FrameTheme::Obsidian => RgbColor::new(0x44, 0x44, 0x44),
            FrameTheme::Gold => RgbColor::new(0xb8, 0x86, 0x0b),
            FrameTheme::Silver => RgbColor::new(0xa3, 0xa3, 0xa3),
            FrameTheme::SkyBlue => RgbColor::new(0x29, 0x80, 0xb9),
            FrameTheme::Pearl => RgbColor::new(0xff, 0xff, 0xff),
        }
    }

    /// Outer rim shared by every finish.
    pub fn rim(self) -> RgbColor {
        RgbColor::new(0x22, 0x22, 0x22)
    }

    /// Light finishes get dark status bar text.
    pub fn is_light(self) -> bool {
        matches!(self, FrameTheme::Silver | FrameTheme::Pearl)
    }

    pub fn status_text_color(self) -> egui::Color32 {
        if self.is_light() {
            egui::Color32::from_rgb(0x33, 0x33, 0x33)
        } else {
            egui::Color32::WHITE
        }
    }

    /// Chamfer line along the screen edge; white would vanish on pearl.
    pub fn highlight_color(self) -> egui::Color32 {
        if self == FrameTheme::Pearl {
            egui::Color32::from_gray(100)
        } else {
            egui::Color32::from_white_alpha(200)
        }
    }

    /// Find the theme whose persisted colors match, comparing parsed values.
    pub fn from_colors(base: &str, border: &str) -> Option<Self> {
        let base = RgbColor::from_hex(base).ok()?;
        let border = RgbColor::from_hex(border).ok()?;
        Self::ALL
            .into_iter()
            .find(|theme| theme.base() == base && theme.border() == border)
    }
}

impl fmt::Display for FrameTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
