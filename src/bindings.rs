//! N-API surface for the browser/Electron front end.

use napi::{Error, Result, Status};
use napi_derive::napi;

use crate::error::ParseError;
use crate::types::{Color, ContrastResult, SortCriteria, SortDirection, TextSize};

/// JS view of a `Color`.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsColor {
    pub hex: String,
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub label: Option<String>,
}

impl From<&Color> for JsColor {
    fn from(color: &Color) -> Self {
        let rgb = color.rgb();
        let hsl = color.hsl();
        Self {
            hex: color.hex().to_string(),
            r: rgb.r.into(),
            g: rgb.g.into(),
            b: rgb.b.into(),
            h: hsl.h,
            s: hsl.s,
            l: hsl.l,
            label: color.label().map(str::to_string),
        }
    }
}

/// JS view of a `ContrastResult`. `level` is "AAA" | "AA" | "AA18" | "DNP".
#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsContrastResult {
    pub ratio: f64,
    pub ratio_string: String,
    pub level: String,
    #[napi(js_name = "meetsAA")]
    pub meets_aa: bool,
    #[napi(js_name = "meetsAAA")]
    pub meets_aaa: bool,
}

impl From<ContrastResult> for JsContrastResult {
    fn from(result: ContrastResult) -> Self {
        Self {
            ratio: result.ratio,
            level: result.level.as_str().to_string(),
            ratio_string: result.ratio_string,
            meets_aa: result.meets_aa,
            meets_aaa: result.meets_aaa,
        }
    }
}

fn invalid_arg(err: ParseError) -> Error {
    Error::new(Status::InvalidArg, err.to_string())
}

/// JS objects only carry hex + label across the boundary; rebuild the rest.
fn to_palette(colors: Vec<JsColor>) -> Result<Vec<Color>> {
    colors
        .into_iter()
        .map(|c| {
            crate::math::convert::create_color(&c.hex, c.label)
                .ok_or(ParseError::InvalidColor(c.hex))
                .map_err(invalid_arg)
        })
        .collect()
}

#[napi]
pub fn health_check() -> String {
    "palette-contrast ok".to_string()
}

#[napi]
pub fn create_color(input: String, label: Option<String>) -> Option<JsColor> {
    crate::math::convert::create_color(&input, label).map(|c| JsColor::from(&c))
}

#[napi]
pub fn is_valid_color(input: String) -> bool {
    crate::math::color_parse::is_valid_color(&input)
}

#[napi]
pub fn format_contrast_ratio(ratio: f64) -> String {
    crate::math::wcag::format_contrast_ratio(ratio)
}

#[napi]
pub fn contrast_matrix(
    colors: Vec<JsColor>,
    text_size: String,
) -> Result<Vec<Vec<JsContrastResult>>> {
    let text_size: TextSize = text_size.parse().map_err(invalid_arg)?;
    let palette = to_palette(colors)?;

    Ok(crate::math::checker::contrast_matrix(&palette, text_size)
        .into_iter()
        .map(|row| row.into_iter().map(JsContrastResult::from).collect())
        .collect())
}

#[napi]
pub fn sort_palette(
    colors: Vec<JsColor>,
    criteria: String,
    direction: String,
) -> Result<Vec<JsColor>> {
    let criteria: SortCriteria = criteria.parse().map_err(invalid_arg)?;
    let direction: SortDirection = direction.parse().map_err(invalid_arg)?;
    let palette = to_palette(colors)?;

    Ok(crate::sort::sort_colors(&palette, criteria, direction)
        .iter()
        .map(JsColor::from)
        .collect())
}

#[napi]
pub fn sort_criteria_label(criteria: String, direction: String) -> Result<String> {
    let criteria: SortCriteria = criteria.parse().map_err(invalid_arg)?;
    let direction: SortDirection = direction.parse().map_err(invalid_arg)?;
    Ok(crate::sort::sort_criteria_label(criteria, direction))
}
