use approx::assert_abs_diff_eq;
use palette_contrast::{
    contrast_matrix, contrast_ratio, contrast_result, create_color, hex_to_rgb, parse_hex,
    parse_rgb_string, relative_luminance, rgb_to_hex, sort_by_luminance, sort_colors,
    wcag_level, Color, Rgb, SortCriteria, SortDirection, TextSize, WcagLevel,
};

fn labeled(input: &str, label: &str) -> Color {
    create_color(input, Some(label.to_string())).unwrap()
}

#[test]
fn short_hex_scenario() {
    assert_eq!(parse_hex("#F50"), Some(Rgb::new(255, 85, 0)));
    assert_eq!(create_color("#F50", None).unwrap().hex(), "#FF5500");
}

#[test]
fn hex_round_trip_over_channel_grid() {
    for r in (0..=255u8).step_by(51) {
        for g in (0..=255u8).step_by(15) {
            for b in [0u8, 1, 127, 128, 254, 255] {
                let rgb = Rgb::new(r, g, b);
                assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)), Some(rgb));
            }
        }
    }
}

#[test]
fn luminance_bounds() {
    assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
    assert_abs_diff_eq!(relative_luminance(Rgb::WHITE), 1.0, epsilon = 1e-12);
}

#[test]
fn black_on_white_result() {
    let black = parse_rgb_string("rgb(0, 0, 0)").unwrap();
    let white = parse_rgb_string("rgb(255, 255, 255)").unwrap();
    let result = contrast_result(black, white, TextSize::Normal);

    assert_abs_diff_eq!(result.ratio, 21.0, epsilon = 1e-9);
    assert_eq!(result.ratio_string, "21:1");
    assert_eq!(result.level, WcagLevel::Aaa);
    assert!(result.meets_aa);
    assert!(result.meets_aaa);
}

#[test]
fn aa18_only_for_normal_text() {
    assert_eq!(wcag_level(3.2, TextSize::Normal), WcagLevel::Aa18);
    assert_eq!(wcag_level(3.2, TextSize::Large), WcagLevel::Aa);
}

#[test]
fn contrast_is_commutative_and_reflexive() {
    let palette: Vec<Rgb> = ["#FF5500", "#1E293B", "#A1A1AA", "#09090B", "#F4F4F5"]
        .iter()
        .map(|hex| parse_hex(hex).unwrap())
        .collect();
    for &a in &palette {
        assert_eq!(contrast_ratio(a, a), 1.0);
        for &b in &palette {
            assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        }
    }
}

#[test]
fn rgb_matrix_scenario() {
    let palette = [
        labeled("#FF0000", "Red"),
        labeled("#00FF00", "Green"),
        labeled("#0000FF", "Blue"),
    ];
    let matrix = contrast_matrix(&palette, TextSize::Normal);

    assert_eq!(matrix.len(), 3);
    assert!(matrix.iter().all(|row| row.len() == 3));
    assert_eq!(matrix[0][0].ratio, 1.0);
}

#[test]
fn luminance_sort_scenario() {
    let palette = [
        labeled("#FFFFFF", "white"),
        labeled("#000000", "black"),
        labeled("#808080", "gray"),
    ];
    let sorted = sort_by_luminance(&palette, SortDirection::Ascending);
    let labels: Vec<_> = sorted.iter().map(|c| c.label().unwrap()).collect();
    assert_eq!(labels, ["white", "gray", "black"]);
}

#[test]
fn manual_sort_leaves_input_untouched() {
    let palette = vec![
        labeled("#808080", "gray"),
        labeled("#FFFFFF", "white"),
        labeled("#000000", "black"),
    ];
    let before = palette.clone();

    let sorted = sort_colors(&palette, SortCriteria::Manual, SortDirection::Descending);

    assert_eq!(sorted, before);
    assert_eq!(palette, before);
    assert_ne!(sorted.as_ptr(), palette.as_ptr());
}

#[test]
fn sorting_does_not_mutate_input() {
    let palette = vec![
        labeled("#808080", "gray"),
        labeled("#FFFFFF", "white"),
        labeled("#000000", "black"),
    ];
    let before = palette.clone();
    let _ = sort_colors(&palette, SortCriteria::Luminance, SortDirection::Ascending);
    let _ = sort_colors(&palette, SortCriteria::Hue, SortDirection::Descending);
    assert_eq!(palette, before);
}
