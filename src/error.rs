use thiserror::Error;

/// Failures of the projection engine.
///
/// Missing values are not errors: they travel through every view as `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("unknown metric group '{0}'")]
    UnknownGroup(String),
    #[error("failed to write table text: {0}")]
    TableText(String),
}
