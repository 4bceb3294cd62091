//! Color model and the reference rainbow palette.
//!
//! Colors are packed `0xRRGGBB`. The input surface may pass either a palette
//! name (`"Red"`, case-insensitive) or a `#RRGGBB` literal.

use serde::Serialize;

use super::error::SimError;

/// Packed `0xRRGGBB` color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    pub fn rgb(&self) -> u32 {
        self.0
    }

    /// Opaque `0xAARRGGBB`, the layout the canvas renderer reads.
    pub fn argb(&self) -> u32 {
        0xFF00_0000 | self.0
    }

    pub fn to_hex(&self) -> String {
        format!("#{:06X}", self.0)
    }

    /// Parse a palette name or a `#RRGGBB` literal.
    pub fn parse(value: &str) -> Result<Self, SimError> {
        let v = value.trim();
        if v.is_empty() {
            return Err(SimError::InvalidColor(value.to_string()));
        }

        if let Some(hex) = v.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(SimError::InvalidColor(value.to_string()));
            }
            return u32::from_str_radix(hex, 16)
                .map(Color::from_rgb)
                .map_err(|_| SimError::InvalidColor(value.to_string()));
        }

        PaletteColor::from_name(v)
            .map(PaletteColor::color)
            .ok_or_else(|| SimError::InvalidColor(value.to_string()))
    }
}

impl std::str::FromStr for Color {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

/// The seven reference colors offered by the picker, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
}

pub const PALETTE: [PaletteColor; 7] = [
    PaletteColor::Red,
    PaletteColor::Orange,
    PaletteColor::Yellow,
    PaletteColor::Green,
    PaletteColor::Blue,
    PaletteColor::Indigo,
    PaletteColor::Violet,
];

impl PaletteColor {
    pub fn name(&self) -> &'static str {
        match self {
            PaletteColor::Red => "Red",
            PaletteColor::Orange => "Orange",
            PaletteColor::Yellow => "Yellow",
            PaletteColor::Green => "Green",
            PaletteColor::Blue => "Blue",
            PaletteColor::Indigo => "Indigo",
            PaletteColor::Violet => "Violet",
        }
    }

    pub fn color(self) -> Color {
        match self {
            PaletteColor::Red => Color::from_rgb(0xFF0000),
            PaletteColor::Orange => Color::from_rgb(0xFF7F00),
            PaletteColor::Yellow => Color::from_rgb(0xFFFF00),
            PaletteColor::Green => Color::from_rgb(0x00FF00),
            PaletteColor::Blue => Color::from_rgb(0x0000FF),
            PaletteColor::Indigo => Color::from_rgb(0x4B0082),
            PaletteColor::Violet => Color::from_rgb(0x8F00FF),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        PALETTE
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

impl From<PaletteColor> for Color {
    fn from(p: PaletteColor) -> Self {
        p.color()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteManifest {
    format_version: u32,
    colors: Vec<PaletteManifestEntry>,
}

#[derive(Serialize)]
struct PaletteManifestEntry {
    name: &'static str,
    color: String,
}

/// JSON description of the palette for building the picker buttons.
pub fn palette_manifest_json() -> String {
    let out = PaletteManifest {
        format_version: 1,
        colors: PALETTE
            .iter()
            .map(|p| PaletteManifestEntry {
                name: p.name(),
                color: p.color().to_hex(),
            })
            .collect(),
    };
    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(Color::parse("red"), Ok(Color::from_rgb(0xFF0000)));
        assert_eq!(Color::parse("INDIGO"), Ok(Color::from_rgb(0x4B0082)));
        assert_eq!(Color::parse(" Violet "), Ok(Color::from_rgb(0x8F00FF)));
    }

    #[test]
    fn hex_literals_parse() {
        assert_eq!(Color::parse("#ff7f00"), Ok(PaletteColor::Orange.color()));
        assert_eq!(Color::parse("#123456").map(|c| c.rgb()), Ok(0x123456));
    }

    #[test]
    fn empty_and_garbage_are_rejected() {
        assert!(matches!(Color::parse(""), Err(SimError::InvalidColor(_))));
        assert!(matches!(Color::parse("   "), Err(SimError::InvalidColor(_))));
        assert!(matches!(Color::parse("Magenta"), Err(SimError::InvalidColor(_))));
        assert!(matches!(Color::parse("#12345"), Err(SimError::InvalidColor(_))));
        assert!(matches!(Color::parse("#+12345"), Err(SimError::InvalidColor(_))));
    }

    #[test]
    fn argb_is_opaque() {
        assert_eq!(PaletteColor::Blue.color().argb(), 0xFF00_00FF);
    }

    #[test]
    fn manifest_lists_palette_in_order() {
        let json = palette_manifest_json();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["formatVersion"], 1);
        let colors = v["colors"].as_array().unwrap();
        assert_eq!(colors.len(), 7);
        assert_eq!(colors[0]["name"], "Red");
        assert_eq!(colors[0]["color"], "#FF0000");
        assert_eq!(colors[6]["name"], "Violet");
        assert_eq!(colors[6]["color"], "#8F00FF");
    }
}
