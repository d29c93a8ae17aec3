use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("sheet is empty, expected a header row")]
    MissingHeader,
    #[error("header row has no columns")]
    EmptyHeader,
}

/// Everything that can abort a load. Each variant ends rendering for the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error(transparent)]
    Format(#[from] FormatError),
}
