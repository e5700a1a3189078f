//! Color values and the codec between `#rrggbb` hex and `rgba(r,g,b,a)` strings.
//!
//! Every function here is total: anything that cannot be parsed resolves to
//! opaque black (or an alpha of `1`) instead of failing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$")
        .expect("hex color pattern compiles")
});

static ALPHA_COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .expect("alpha color pattern compiles")
});

const DEFAULT_ALPHA: f64 = 1.0;

/// Resolved channels of a color. `a` is a fraction, normally within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const OPAQUE_BLACK: Rgba = Rgba::new(0, 0, 0, DEFAULT_ALPHA);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_alpha_color(self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::OPAQUE_BLACK
    }
}

/// A color as the user wrote it, either `#rrggbb` or `rgba(r,g,b,a)`.
///
/// Renderers emit the text verbatim; [`Color::rgba`] resolves the channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgba(&self) -> Rgba {
        resolve(&self.0)
    }

    pub fn alpha(&self) -> f64 {
        extract_alpha(&self.0)
    }

    /// Replaces r, g and b from a hex pick, keeping this color's alpha.
    pub fn with_hex(&self, hex: &str) -> Self {
        Self(to_alpha_color(hex, self.alpha()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Parses either textual form. `None` when the string matches neither.
pub fn parse(color: &str) -> Option<Rgba> {
    let color = color.trim();
    parse_hex(color).or_else(|| parse_alpha_color(color))
}

/// Whether `color` is a six-digit hex color, `#` optional.
pub fn is_hex(color: &str) -> bool {
    parse_hex(color.trim()).is_some()
}

/// Like [`parse`], degrading to opaque black.
pub fn resolve(color: &str) -> Rgba {
    parse(color).unwrap_or_default()
}

/// `#rrggbb` for the r, g, b channels of `color`; `#000000` when malformed.
pub fn to_hex(color: &str) -> String {
    resolve(color).to_hex()
}

/// `rgba(r,g,b,alpha)` from a `#rrggbb` hex string (leading `#` optional),
/// alpha carried through as given.
pub fn to_alpha_color(hex: &str, alpha: f64) -> String {
    parse_hex(hex.trim())
        .unwrap_or_default()
        .with_alpha(alpha)
        .to_alpha_color()
}

/// Fourth component of an `rgba(...)` string; `1` when absent or unparseable.
pub fn extract_alpha(color: &str) -> f64 {
    ALPHA_COLOR_PATTERN
        .captures(color.trim())
        .and_then(|caps| caps.get(4))
        .and_then(|alpha| alpha.as_str().parse::<f64>().ok())
        .unwrap_or(DEFAULT_ALPHA)
}

fn parse_hex(color: &str) -> Option<Rgba> {
    let caps = HEX_PATTERN.captures(color)?;
    let channel = |index: usize| u8::from_str_radix(&caps[index], 16).ok();
    Some(Rgba::new(channel(1)?, channel(2)?, channel(3)?, DEFAULT_ALPHA))
}

fn parse_alpha_color(color: &str) -> Option<Rgba> {
    let caps = ALPHA_COLOR_PATTERN.captures(color)?;
    let channel = |index: usize| caps[index].parse::<u8>().ok();
    let alpha = match caps.get(4) {
        Some(alpha) => alpha.as_str().parse::<f64>().ok()?,
        None => DEFAULT_ALPHA,
    };
    Some(Rgba::new(channel(1)?, channel(2)?, channel(3)?, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_hex_reads_alpha_color_channels() {
        assert_eq!(to_hex("rgba(108,0,162,1)"), "#6c00a2");
        assert_eq!(to_hex("rgba(0, 17, 82, 0.5)"), "#001152");
        assert_eq!(to_hex("rgb(255,255,255)"), "#ffffff");
    }

    #[test]
    fn to_hex_normalizes_hex_input_to_lowercase() {
        assert_eq!(to_hex("#AbCdEf"), "#abcdef");
    }

    #[test]
    fn to_hex_falls_back_to_black_for_malformed_input() {
        assert_eq!(to_hex("tomato"), "#000000");
        assert_eq!(to_hex("rgba(300,0,0,1)"), "#000000");
        assert_eq!(to_hex("#12345"), "#000000");
        assert_eq!(to_hex(""), "#000000");
    }

    #[test]
    fn to_alpha_color_carries_alpha_through() {
        assert_eq!(to_alpha_color("#6c00a2", 1.0), "rgba(108,0,162,1)");
        assert_eq!(to_alpha_color("#b04834", 0.8), "rgba(176,72,52,0.8)");
        assert_eq!(to_alpha_color("b04834", 0.0), "rgba(176,72,52,0)");
    }

    #[test]
    fn to_alpha_color_degrades_malformed_hex_to_black() {
        assert_eq!(to_alpha_color("#zzzzzz", 0.3), "rgba(0,0,0,0.3)");
    }

    #[test]
    fn extract_alpha_defaults_to_one() {
        assert_eq!(extract_alpha("rgba(0,17,82,0.5)"), 0.5);
        assert_eq!(extract_alpha("rgba(0,17,82,.25)"), 0.25);
        assert_eq!(extract_alpha("rgb(0,17,82)"), 1.0);
        assert_eq!(extract_alpha("#001152"), 1.0);
        assert_eq!(extract_alpha("not a color"), 1.0);
    }

    #[test]
    fn hex_survives_alpha_color_round_trip() {
        for hex in ["#000000", "#ffffff", "#6c00a2", "#B04834", "#0a0B0c"] {
            for alpha in [0.0, 0.35, 1.0] {
                let color = to_alpha_color(hex, alpha);
                assert_eq!(to_hex(&color), hex.to_ascii_lowercase());
            }
        }
    }

    #[test]
    fn alpha_color_channels_survive_hex_round_trip() {
        for color in [
            "rgba(176,72,52,0.8)",
            "rgba(176,72,52,0)",
            "rgba(0, 17, 82, 0.5)",
            "rgba(255,255,255,1)",
            "rgb(1,2,3)",
        ] {
            let rebuilt = to_alpha_color(&to_hex(color), extract_alpha(color));
            assert_eq!(resolve(&rebuilt), resolve(color), "{color}");
            assert_eq!(extract_alpha(&rebuilt), extract_alpha(color));
        }
    }

    #[test]
    fn with_hex_preserves_existing_alpha() {
        let stop = Color::new("rgba(176,72,52,0.35)");
        let picked = stop.with_hex("#112233");
        assert_eq!(picked.as_str(), "rgba(17,34,51,0.35)");
        assert_eq!(picked.alpha(), 0.35);
    }
}
