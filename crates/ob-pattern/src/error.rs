use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("input action duration must be at least one tick")]
    ZeroDuration,

    #[error("pattern parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PatternResult<T> = Result<T, PatternError>;
