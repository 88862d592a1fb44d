use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// 8-bit sRGB triple. Channels are `u8`, so a value of this type is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Greys, black and white have no meaningful hue.
    pub fn is_achromatic(&self) -> bool {
        self.s == 0.0
    }
}

/// Syntactic shape of a raw color token, as reported by `detect_color_format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorFormat {
    Hex,
    HexShort,
    Rgb,
    Hsl,
    Invalid,
}

/// A palette entry.
///
/// `hex` is the canonical `#RRGGBB` key; `rgb` and `hsl` are derived from it
/// when the color is built and never change afterwards. Only the label can be
/// replaced, via [`Color::with_label`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredColor")]
pub struct Color {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Color {
    /// Assemble a color from already-consistent parts. Callers in `math::convert`
    /// are responsible for deriving `hex` and `hsl` from the same source.
    pub(crate) fn from_parts(hex: String, rgb: Rgb, hsl: Hsl, label: Option<String>) -> Self {
        Self {
            hex,
            rgb,
            hsl,
            label: normalize_label(label),
        }
    }

    /// Build a color programmatically from an RGB triple.
    pub fn from_rgb(rgb: Rgb, label: Option<String>) -> Self {
        let hex = crate::math::convert::rgb_to_hex(rgb);
        let hsl = crate::math::convert::rgb_to_hsl(rgb);
        Self::from_parts(hex, rgb, hsl, label)
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Replace the label, keeping the color value untouched.
    pub fn with_label(self, label: Option<String>) -> Self {
        Self {
            label: normalize_label(label),
            ..self
        }
    }

    /// Value equality: two entries with the same hex are the same color,
    /// whatever their labels say.
    pub fn same_value(&self, other: &Color) -> bool {
        self.hex == other.hex
    }
}

fn normalize_label(label: Option<String>) -> Option<String> {
    label.filter(|l| !l.is_empty())
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::math::convert::create_color(s, None)
            .ok_or_else(|| ParseError::InvalidColor(s.to_string()))
    }
}

/// Persisted form of a color: the URL-state and storage layers only keep the
/// hex value and the label, everything else is rebuilt on load.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredColor {
    pub hex: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl TryFrom<StoredColor> for Color {
    type Error = ParseError;

    fn try_from(stored: StoredColor) -> Result<Self, Self::Error> {
        crate::math::convert::create_color(&stored.hex, stored.label)
            .ok_or(ParseError::InvalidColor(stored.hex))
    }
}

/// Text-size context a pair is judged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl FromStr for TextSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(TextSize::Normal),
            "large" => Ok(TextSize::Large),
            _ => Err(ParseError::TextSize(s.to_string())),
        }
    }
}

/// Compliance tier of a ratio. Variants are declared from weakest to strongest,
/// so the derived `Ord` follows strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "DNP")]
    Dnp,
    /// Passes the large-text AA threshold only.
    #[serde(rename = "AA18")]
    Aa18,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::Aa18 => "AA18",
            WcagLevel::Dnp => "DNP",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conformance target for `meets_wcag_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conformance {
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

/// Outcome of evaluating one (foreground, background) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    pub ratio: f64,
    pub ratio_string: String,
    pub level: WcagLevel,
    /// Against the AA threshold of the text size the result was built for.
    #[serde(rename = "meetsAA")]
    pub meets_aa: bool,
    #[serde(rename = "meetsAAA")]
    pub meets_aaa: bool,
}

/// Off-diagonal tally of a contrast matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixSummary {
    pub total_pairs: u32,
    pub aaa: u32,
    pub aa: u32,
    pub aa18: u32,
    pub dnp: u32,
}

impl MatrixSummary {
    /// Pairs that meet AA or better for the text size the matrix was built with.
    pub fn passing(&self) -> u32 {
        self.aaa + self.aa
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortCriteria {
    /// Keep the user's own order.
    #[default]
    Manual,
    Luminance,
    ContrastScore,
    PassRate,
    Hue,
    Alphabetical,
}

impl FromStr for SortCriteria {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(SortCriteria::Manual),
            "luminance" => Ok(SortCriteria::Luminance),
            "contrast-score" => Ok(SortCriteria::ContrastScore),
            "pass-rate" => Ok(SortCriteria::PassRate),
            "hue" => Ok(SortCriteria::Hue),
            "alphabetical" => Ok(SortCriteria::Alphabetical),
            _ => Err(ParseError::SortCriteria(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(SortDirection::Ascending),
            "descending" => Ok(SortDirection::Descending),
            _ => Err(ParseError::SortDirection(s.to_string())),
        }
    }
}
