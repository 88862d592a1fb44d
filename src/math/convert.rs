use tracing::debug;

use super::color_parse::{
    detect_color_format, hsl_to_rgb, normalize_hue, parse_color_to_rgb, parse_hsl_string,
};
use crate::types::{Color, ColorFormat, Hsl, Rgb};

/// Canonical `#RRGGBB`, uppercase.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Standard RGB -> HSL, rounded to whole degrees and percents.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, (l * 100.0).round());
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    // 359.5 and up rounds to 360, which is 0
    Hsl::new(
        normalize_hue((sector * 60.0).round()),
        (s * 100.0).round(),
        (l * 100.0).round(),
    )
}

pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    parse_color_to_rgb(hex)
}

pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

/// Build a [`Color`] from user text (hex, short hex, `rgb()` or `hsl()`).
///
/// This is the only way text becomes a `Color`. Whatever the input format,
/// the stored `hsl` is recomputed from the final RGB, so two colors with the
/// same hex always carry the same rgb and hsl.
pub fn create_color(input: &str, label: Option<String>) -> Option<Color> {
    let format = detect_color_format(input);

    let rgb = match format {
        ColorFormat::Hex | ColorFormat::HexShort | ColorFormat::Rgb => parse_color_to_rgb(input),
        ColorFormat::Hsl => parse_hsl_string(input).map(hsl_to_rgb),
        ColorFormat::Invalid => None,
    };

    let Some(rgb) = rgb else {
        debug!(input, ?format, "rejected color input");
        return None;
    };

    Some(Color::from_parts(rgb_to_hex(rgb), rgb, rgb_to_hsl(rgb), label))
}

pub fn format_rgb(rgb: Rgb) -> String {
    format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
}

pub fn format_hsl(hsl: Hsl) -> String {
    format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)
}
