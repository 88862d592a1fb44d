use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ColorFormat, Hsl, Rgb};

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9a-fA-F]{6})$").expect("valid regex"));

static HEX_SHORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9a-fA-F]{3})$").expect("valid regex"));

/// `rgb(r, g, b)` with 1-3 digit integers, separated by commas or whitespace.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*(\d{1,3})\s*[,\s]\s*(\d{1,3})\s*[,\s]\s*(\d{1,3})\s*\)$")
        .expect("valid regex")
});

/// `hsl(h, s%, l%)`: signed/decimal hue, percent sign optional on s and l.
static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsl\(\s*([-+]?\d*\.?\d+)\s*[,\s]\s*(\d*\.?\d+)%?\s*[,\s]\s*(\d*\.?\d+)%?\s*\)$",
    )
    .expect("valid regex")
});

/// Classify a raw token by shape only. Numeric ranges are not checked here,
/// so `rgb(256, 0, 0)` is still `Rgb`.
pub fn detect_color_format(input: &str) -> ColorFormat {
    let trimmed = input.trim();

    if HEX_RE.is_match(trimmed) {
        ColorFormat::Hex
    } else if HEX_SHORT_RE.is_match(trimmed) {
        ColorFormat::HexShort
    } else if RGB_RE.is_match(trimmed) {
        ColorFormat::Rgb
    } else if HSL_RE.is_match(trimmed) {
        ColorFormat::Hsl
    } else {
        ColorFormat::Invalid
    }
}

/// Parse `#RRGGBB` / `#RGB` (leading `#` optional). Short form doubles each digit.
pub fn parse_hex(input: &str) -> Option<Rgb> {
    let trimmed = input.trim();

    let digits: String = if let Some(caps) = HEX_RE.captures(trimmed) {
        caps[1].to_string()
    } else if let Some(caps) = HEX_SHORT_RE.captures(trimmed) {
        caps[1].chars().flat_map(|c| [c, c]).collect()
    } else {
        return None;
    };

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// Parse `rgb(r, g, b)`. Out-of-range channels are rejected, never clamped.
pub fn parse_rgb_string(input: &str) -> Option<Rgb> {
    let caps = RGB_RE.captures(input.trim())?;

    let channel = |i: usize| -> Option<u8> {
        let value: u16 = caps[i].parse().ok()?;
        u8::try_from(value).ok()
    };

    Some(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

/// Parse `hsl(h, s%, l%)`. Any hue is wrapped into `[0, 360)`; saturation and
/// lightness outside `[0, 100]` are rejected.
pub fn parse_hsl_string(input: &str) -> Option<Hsl> {
    let caps = HSL_RE.captures(input.trim())?;

    let h: f64 = caps[1].parse().ok()?;
    let s: f64 = caps[2].parse().ok()?;
    let l: f64 = caps[3].parse().ok()?;

    if !(0.0..=100.0).contains(&s) || !(0.0..=100.0).contains(&l) {
        return None;
    }

    Some(Hsl::new(normalize_hue(h), s, l))
}

pub(crate) fn normalize_hue(h: f64) -> f64 {
    // `+ 0.0` folds -0.0 into 0.0
    ((h % 360.0) + 360.0) % 360.0 + 0.0
}

/// Standard HSL -> RGB, each channel rounded to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    if s == 0.0 {
        let v = unit_to_channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = hsl.h / 360.0;

    Rgb::new(
        unit_to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        unit_to_channel(hue_to_channel(p, q, h)),
        unit_to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Scale a `[0, 1]` value to a channel. Clamps so float drift can't wrap.
pub(crate) fn unit_to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Single entry point for "text in, RGB out".
pub fn parse_color_to_rgb(input: &str) -> Option<Rgb> {
    match detect_color_format(input) {
        ColorFormat::Hex | ColorFormat::HexShort => parse_hex(input),
        ColorFormat::Rgb => parse_rgb_string(input),
        ColorFormat::Hsl => parse_hsl_string(input).map(hsl_to_rgb),
        ColorFormat::Invalid => None,
    }
}

pub fn is_valid_color(input: &str) -> bool {
    parse_color_to_rgb(input).is_some()
}
