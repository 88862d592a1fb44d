use serde::{Deserialize, Serialize};

use crate::math::checker::{contrast_matrix, summarize_matrix};
use crate::sort::sort_colors;
use crate::types::{Color, ContrastResult, MatrixSummary, SortCriteria, SortDirection, TextSize};

/// User-facing grid settings, as the storage layer persists them.
/// Missing keys fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaletteOptions {
    pub text_size: TextSize,
    pub sort_criteria: SortCriteria,
    pub sort_direction: SortDirection,
}

impl PaletteOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Everything the grid view needs after a palette or settings change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteReport {
    /// Palette in display order.
    pub colors: Vec<Color>,
    /// `[foreground][background]`, same order as `colors`.
    pub matrix: Vec<Vec<ContrastResult>>,
    pub summary: MatrixSummary,
}

/// Sort the palette, then evaluate every pair in the sorted order.
///
/// This is the main entry point called on every palette or settings change.
pub fn evaluate_palette(colors: &[Color], options: &PaletteOptions) -> PaletteReport {
    let colors = sort_colors(colors, options.sort_criteria, options.sort_direction);
    let matrix = contrast_matrix(&colors, options.text_size);
    let summary = summarize_matrix(&matrix);

    PaletteReport {
        colors,
        matrix,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::convert::create_color;
    use crate::types::WcagLevel;

    fn palette() -> Vec<Color> {
        ["#808080", "#FFFFFF", "#000000"]
            .iter()
            .map(|hex| create_color(hex, None).unwrap())
            .collect()
    }

    #[test]
    fn defaults() {
        let options = PaletteOptions::default();
        assert_eq!(options.text_size, TextSize::Normal);
        assert_eq!(options.sort_criteria, SortCriteria::Manual);
        assert_eq!(options.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn options_from_partial_json() {
        let options = PaletteOptions::from_json(r#"{"textSize":"large"}"#).unwrap();
        assert_eq!(options.text_size, TextSize::Large);
        assert_eq!(options.sort_criteria, SortCriteria::Manual);
    }

    #[test]
    fn options_from_full_json() {
        let options = PaletteOptions::from_json(
            r#"{"textSize":"normal","sortCriteria":"pass-rate","sortDirection":"descending"}"#,
        )
        .unwrap();
        assert_eq!(options.sort_criteria, SortCriteria::PassRate);
        assert_eq!(options.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn options_reject_unknown_values() {
        assert!(PaletteOptions::from_json(r#"{"textSize":"huge"}"#).is_err());
        assert!(PaletteOptions::from_json("not json").is_err());
    }

    #[test]
    fn manual_report_keeps_order() {
        let report = evaluate_palette(&palette(), &PaletteOptions::default());
        let hexes: Vec<&str> = report.colors.iter().map(Color::hex).collect();
        assert_eq!(hexes, ["#808080", "#FFFFFF", "#000000"]);
        assert_eq!(report.matrix.len(), 3);
        assert_eq!(report.summary.total_pairs, 6);
    }

    #[test]
    fn matrix_follows_sorted_order() {
        let options = PaletteOptions {
            sort_criteria: SortCriteria::Luminance,
            ..PaletteOptions::default()
        };
        let report = evaluate_palette(&palette(), &options);
        let hexes: Vec<&str> = report.colors.iter().map(Color::hex).collect();
        assert_eq!(hexes, ["#FFFFFF", "#808080", "#000000"]);
        // white on black is now [0][2]
        assert_eq!(report.matrix[0][2].level, WcagLevel::Aaa);
        assert_eq!(report.matrix[0][2].ratio_string, "21:1");
    }

    #[test]
    fn large_text_changes_levels() {
        let normal = evaluate_palette(&palette(), &PaletteOptions::default());
        let large = evaluate_palette(
            &palette(),
            &PaletteOptions {
                text_size: TextSize::Large,
                ..PaletteOptions::default()
            },
        );
        // gray on white ~3.95: AA18 for normal text, AA for large
        assert_eq!(normal.matrix[0][1].level, WcagLevel::Aa18);
        assert_eq!(large.matrix[0][1].level, WcagLevel::Aa);
        assert!(large.summary.passing() > normal.summary.passing());
    }
}
