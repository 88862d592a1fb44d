use tracing::trace;

use super::wcag::{format_contrast_ratio, ratio_from_luminance, relative_luminance, wcag_level};
use crate::types::{Color, ContrastResult, MatrixSummary, Rgb, TextSize, WcagLevel};

/// Evaluate one (foreground, background) pair.
pub fn contrast_result(fg: Rgb, bg: Rgb, text_size: TextSize) -> ContrastResult {
    result_from_luminance(relative_luminance(fg), relative_luminance(bg), text_size)
}

fn result_from_luminance(fg_lum: f64, bg_lum: f64, text_size: TextSize) -> ContrastResult {
    let ratio = ratio_from_luminance(fg_lum, bg_lum);
    let thresholds = text_size.thresholds();

    ContrastResult {
        ratio,
        ratio_string: format_contrast_ratio(ratio),
        level: wcag_level(ratio, text_size),
        meets_aa: ratio >= thresholds.aa,
        meets_aaa: ratio >= thresholds.aaa,
    }
}

/// Build the N×N grid, indexed `[foreground][background]`. The diagonal is
/// computed like any other cell (always 1:1).
///
/// Luminance is computed once per color; only the ratios are N².
pub fn contrast_matrix(colors: &[Color], text_size: TextSize) -> Vec<Vec<ContrastResult>> {
    trace!(colors = colors.len(), ?text_size, "building contrast matrix");

    let luminances: Vec<f64> = colors.iter().map(|c| relative_luminance(c.rgb())).collect();

    luminances
        .iter()
        .map(|&fg| {
            luminances
                .iter()
                .map(|&bg| result_from_luminance(fg, bg, text_size))
                .collect()
        })
        .collect()
}

/// Tally the off-diagonal cells of a matrix by level.
pub fn summarize_matrix(matrix: &[Vec<ContrastResult>]) -> MatrixSummary {
    let mut summary = MatrixSummary::default();

    for (i, row) in matrix.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            // Same entry on both axes
            if i == j {
                continue;
            }
            summary.total_pairs += 1;
            match cell.level {
                WcagLevel::Aaa => summary.aaa += 1,
                WcagLevel::Aa => summary.aa += 1,
                WcagLevel::Aa18 => summary.aa18 += 1,
                WcagLevel::Dnp => summary.dnp += 1,
            }
        }
    }

    summary
}
