//! Palette reordering.
//!
//! Every function returns a new `Vec` and leaves the input alone. All sorts are
//! stable, so ties keep their input order and re-sorting is a no-op. Direction
//! is applied by reversing the comparator, never the output, which keeps ties
//! stable in both directions.

use std::cmp::Ordering;

use tracing::trace;

use crate::math::wcag::{ratio_from_luminance, relative_luminance, NORMAL_TEXT};
use crate::types::{Color, SortCriteria, SortDirection};

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Stable sort on a precomputed `f64` key, one key per color.
fn sort_by_score(colors: &[Color], scores: Vec<f64>, direction: SortDirection) -> Vec<Color> {
    let mut keyed: Vec<(f64, &Color)> = scores.into_iter().zip(colors).collect();
    keyed.sort_by(|a, b| directed(a.0.total_cmp(&b.0), direction));
    keyed.into_iter().map(|(_, c)| c.clone()).collect()
}

/// Ascending means lightest first.
pub fn sort_by_luminance(colors: &[Color], direction: SortDirection) -> Vec<Color> {
    // Negated so that ascending order on the key puts the highest luminance first
    let scores = colors.iter().map(|c| -relative_luminance(c.rgb())).collect();
    sort_by_score(colors, scores, direction)
}

/// Ratio of every color against every other one, row `i` holding color `i`'s
/// ratios. The diagonal is left at 1.0 and must be skipped by callers.
fn pairwise_ratios(colors: &[Color]) -> Vec<Vec<f64>> {
    let luminances: Vec<f64> = colors.iter().map(|c| relative_luminance(c.rgb())).collect();
    luminances
        .iter()
        .map(|&a| luminances.iter().map(|&b| ratio_from_luminance(a, b)).collect())
        .collect()
}

fn others(row: &[f64], index: usize) -> impl Iterator<Item = f64> + '_ {
    row.iter()
        .enumerate()
        .filter(move |(j, _)| *j != index)
        .map(|(_, &ratio)| ratio)
}

/// Mean contrast of each color against the rest of the palette (self excluded).
/// Ascending puts the lowest average first.
pub fn sort_by_contrast_score(colors: &[Color], direction: SortDirection) -> Vec<Color> {
    let ratios = pairwise_ratios(colors);
    let peers = colors.len().saturating_sub(1);

    let scores = ratios
        .iter()
        .enumerate()
        .map(|(i, row)| {
            if peers == 0 {
                0.0
            } else {
                others(row, i).sum::<f64>() / peers as f64
            }
        })
        .collect();

    sort_by_score(colors, scores, direction)
}

/// Percentage of the other colors each one reaches 4.5:1 against.
///
/// Always judged against the normal-text AA threshold, whatever text size the
/// grid is currently showing.
pub fn sort_by_pass_rate(colors: &[Color], direction: SortDirection) -> Vec<Color> {
    let ratios = pairwise_ratios(colors);
    let peers = colors.len().saturating_sub(1);

    let scores = ratios
        .iter()
        .enumerate()
        .map(|(i, row)| {
            if peers == 0 {
                0.0
            } else {
                let passing = others(row, i).filter(|&r| r >= NORMAL_TEXT.aa).count();
                passing as f64 / peers as f64 * 100.0
            }
        })
        .collect();

    sort_by_score(colors, scores, direction)
}

/// Chromatic colors by hue. Greys go last when ascending (first when
/// descending) and are ordered by lightness among themselves.
pub fn sort_by_hue(colors: &[Color], direction: SortDirection) -> Vec<Color> {
    let mut sorted = colors.to_vec();
    sorted.sort_by(|a, b| {
        let (ha, hb) = (a.hsl(), b.hsl());
        let ordering = match (ha.is_achromatic(), hb.is_achromatic()) {
            (true, true) => ha.l.total_cmp(&hb.l),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => ha.h.total_cmp(&hb.h),
        };
        directed(ordering, direction)
    });
    sorted
}

/// Case-insensitive by label, falling back to the hex for unlabeled colors.
/// Labeled colors always come before unlabeled ones; direction only applies
/// within each group.
pub fn sort_alphabetically(colors: &[Color], direction: SortDirection) -> Vec<Color> {
    let mut keyed: Vec<(bool, String, &Color)> = colors
        .iter()
        .map(|c| match c.label() {
            Some(label) => (true, label.to_lowercase(), c),
            None => (false, c.hex().to_lowercase(), c),
        })
        .collect();

    keyed.sort_by(|a, b| {
        // `true` (labeled) first regardless of direction
        b.0.cmp(&a.0).then_with(|| directed(a.1.cmp(&b.1), direction))
    });

    keyed.into_iter().map(|(_, _, c)| c.clone()).collect()
}

/// Dispatch on `criteria`. `Manual` and palettes of one color or fewer come
/// back as plain copies.
pub fn sort_colors(
    colors: &[Color],
    criteria: SortCriteria,
    direction: SortDirection,
) -> Vec<Color> {
    if colors.len() <= 1 || criteria == SortCriteria::Manual {
        return colors.to_vec();
    }

    trace!(colors = colors.len(), ?criteria, ?direction, "sorting palette");

    match criteria {
        SortCriteria::Manual => colors.to_vec(),
        SortCriteria::Luminance => sort_by_luminance(colors, direction),
        SortCriteria::ContrastScore => sort_by_contrast_score(colors, direction),
        SortCriteria::PassRate => sort_by_pass_rate(colors, direction),
        SortCriteria::Hue => sort_by_hue(colors, direction),
        SortCriteria::Alphabetical => sort_alphabetically(colors, direction),
    }
}

/// Short description of the active sort for buttons and screen-reader
/// announcements, e.g. `"↑ Luminance (lightest first)"`.
pub fn sort_criteria_label(criteria: SortCriteria, direction: SortDirection) -> String {
    let ascending = direction == SortDirection::Ascending;
    let arrow = if ascending { "↑" } else { "↓" };

    let (name, detail) = match criteria {
        SortCriteria::Manual => return "Manual order".to_string(),
        SortCriteria::Luminance => (
            "Luminance",
            if ascending { "lightest first" } else { "darkest first" },
        ),
        SortCriteria::ContrastScore => (
            "Contrast score",
            if ascending { "lowest first" } else { "highest first" },
        ),
        SortCriteria::PassRate => (
            "Pass rate",
            if ascending { "lowest first" } else { "highest first" },
        ),
        SortCriteria::Hue => ("Hue", if ascending { "0° to 360°" } else { "360° to 0°" }),
        SortCriteria::Alphabetical => ("Label", if ascending { "A-Z" } else { "Z-A" }),
    };

    format!("{arrow} {name} ({detail})")
}
