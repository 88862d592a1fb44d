use thiserror::Error;

/// Rejection reasons for the `FromStr`/`TryFrom` entry points. The core
/// functions themselves report failure with `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("not a hex, rgb() or hsl() color: {0:?}")]
    InvalidColor(String),
    #[error("unknown text size {0:?}, expected \"normal\" or \"large\"")]
    TextSize(String),
    #[error("unknown sort criteria {0:?}")]
    SortCriteria(String),
    #[error("unknown sort direction {0:?}, expected \"ascending\" or \"descending\"")]
    SortDirection(String),
}
