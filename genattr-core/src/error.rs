use thiserror::Error;

/// Core error type for genattr.
///
/// The extraction entry points never surface these; they are logged and
/// swallowed there. Configuration loading and resolver construction return
/// them as `CoreResult<T>`.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("body top-level JSON value is {found}, expected an object")]
    NotAnObject { found: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type CoreResult<T> = std::result::Result<T, ExtractError>;
