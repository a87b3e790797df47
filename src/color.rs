use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use palette::{Hsl, IntoColor, Srgb};
use serde::{Serialize, Serializer};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Color – a plain 8-bit sRGB triple
// ---------------------------------------------------------------------------

/// Toolkit-independent colour. The UI converts it to its own colour type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Error)]
#[error("invalid hex colour '{input}'")]
pub struct ColorError {
    input: String,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parse `#rrggbb` (or `rrggbb`, `#rgb`).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let rgb = Srgb::<u8>::from_str(hex).map_err(|_| ColorError {
            input: hex.to_string(),
        })?;
        Ok(Color::rgb(rgb.red, rgb.green, rgb.blue))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Same hue and saturation, lightness raised by `amount` (0..1).
    pub fn lightened(self, amount: f32) -> Self {
        let srgb: Srgb = Srgb::new(self.r, self.g, self.b).into_format();
        let hsl: Hsl = srgb.into_color();
        let lighter = Hsl::new(
            hsl.hue,
            hsl.saturation,
            (hsl.lightness + amount).clamp(0.0, 1.0),
        );
        let rgb: Srgb = lighter.into_color();
        let rgb: Srgb<u8> = rgb.into_format();
        Color::rgb(rgb.red, rgb.green, rgb.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Series styling
// ---------------------------------------------------------------------------

/// Secondary visual cue layered over the base colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FillPattern {
    #[default]
    Solid,
    /// Diagonal hatch; marks the second company in side-by-side mode.
    Hatched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesStyle {
    pub color: Color,
    pub pattern: FillPattern,
}

impl SeriesStyle {
    pub fn solid(color: Color) -> Self {
        SeriesStyle {
            color,
            pattern: FillPattern::Solid,
        }
    }

    pub fn hatched(color: Color) -> Self {
        SeriesStyle {
            color,
            pattern: FillPattern::Hatched,
        }
    }
}

// ---------------------------------------------------------------------------
// Color mapping: metric or company name → Color
// ---------------------------------------------------------------------------

/// Maps names to colours, falling back to black for unknown keys.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color>,
    default_color: Color,
}

impl ColorMap {
    /// Build a colour map from `(name, "#rrggbb")` pairs.
    pub fn from_hex_pairs(pairs: &[(&str, &str)]) -> Result<Self, ColorError> {
        let mapping = pairs
            .iter()
            .map(|&(name, hex)| Ok((name.to_string(), Color::from_hex(hex)?)))
            .collect::<Result<BTreeMap<_, _>, ColorError>>()?;

        Ok(ColorMap {
            mapping,
            default_color: Color::BLACK,
        })
    }

    /// Look up the colour for a name. Unknown names get the default colour.
    pub fn color_for(&self, name: &str) -> Color {
        self.mapping
            .get(name)
            .copied()
            .unwrap_or(self.default_color)
    }
}
