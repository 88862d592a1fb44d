//! WCAG 2.1 contrast evaluation for brand palettes: color parsing and
//! conversion, relative luminance and contrast ratios, compliance tiers, the
//! pairwise contrast matrix, and palette sorting.

pub mod engine;
pub mod error;
pub mod math;
pub mod sort;
pub mod types;

#[cfg(feature = "node")]
pub mod bindings;

pub use engine::{evaluate_palette, PaletteOptions, PaletteReport};
pub use error::ParseError;
pub use math::checker::{contrast_matrix, contrast_result, summarize_matrix};
pub use math::color_parse::{
    detect_color_format, hsl_to_rgb, is_valid_color, parse_color_to_rgb, parse_hex,
    parse_hsl_string, parse_rgb_string,
};
pub use math::convert::{
    create_color, format_hsl, format_rgb, hex_to_hsl, hex_to_rgb, hsl_to_hex, rgb_to_hex,
    rgb_to_hsl,
};
pub use math::wcag::{
    contrast_ratio, format_contrast_ratio, meets_ui_contrast, meets_wcag_level,
    relative_luminance, wcag_level,
};
pub use sort::{
    sort_alphabetically, sort_by_contrast_score, sort_by_hue, sort_by_luminance,
    sort_by_pass_rate, sort_colors, sort_criteria_label,
};
pub use types::{
    Color, ColorFormat, Conformance, ContrastResult, Hsl, MatrixSummary, Rgb, SortCriteria,
    SortDirection, StoredColor, TextSize, WcagLevel,
};
