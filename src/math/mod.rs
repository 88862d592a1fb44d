pub mod checker;
pub mod color_parse;
pub mod convert;
pub mod wcag;
