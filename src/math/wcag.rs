use crate::types::{Conformance, Rgb, TextSize, WcagLevel};

/// AA / AAA minimum ratios for one text-size context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub aa: f64,
    pub aaa: f64,
}

pub const NORMAL_TEXT: Thresholds = Thresholds { aa: 4.5, aaa: 7.0 };
pub const LARGE_TEXT: Thresholds = Thresholds { aa: 3.0, aaa: 4.5 };

/// Non-text UI components (SC 1.4.11). Only AA is defined.
pub const UI_COMPONENT_AA: f64 = 3.0;

impl TextSize {
    pub fn thresholds(self) -> Thresholds {
        match self {
            TextSize::Normal => NORMAL_TEXT,
            TextSize::Large => LARGE_TEXT,
        }
    }
}

/// Convert sRGB channel (0-255) to linear light value.
/// WCAG 2.1 wording: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.1.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * srgb_to_linear(rgb.r) + 0.7152 * srgb_to_linear(rgb.g) + 0.0722 * srgb_to_linear(rgb.b)
}

/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn ratio_from_luminance(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Calculate WCAG 2.1 contrast ratio between two colors. Order-independent.
pub fn contrast_ratio(c1: Rgb, c2: Rgb) -> f64 {
    ratio_from_luminance(relative_luminance(c1), relative_luminance(c2))
}

/// `"21:1"`, `"4.5:1"`, `"4.55:1"`: two decimals at most, trailing zeros dropped.
pub fn format_contrast_ratio(ratio: f64) -> String {
    let rounded = (ratio * 100.0).round() / 100.0;
    let fixed = format!("{rounded:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}:1")
}

/// Tier a ratio. `Aa18` only exists for normal text: it flags pairs that are
/// usable for large text alone.
pub fn wcag_level(ratio: f64, text_size: TextSize) -> WcagLevel {
    let t = text_size.thresholds();
    if ratio >= t.aaa {
        WcagLevel::Aaa
    } else if ratio >= t.aa {
        WcagLevel::Aa
    } else if text_size == TextSize::Normal && ratio >= LARGE_TEXT.aa {
        WcagLevel::Aa18
    } else {
        WcagLevel::Dnp
    }
}

pub fn meets_wcag_level(ratio: f64, level: Conformance, text_size: TextSize) -> bool {
    let t = text_size.thresholds();
    match level {
        Conformance::Aa => ratio >= t.aa,
        Conformance::Aaa => ratio >= t.aaa,
    }
}

pub fn meets_ui_contrast(ratio: f64) -> bool {
    ratio >= UI_COMPONENT_AA
}
