use ob_pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("no games to compare")]
    NoGames,

    #[error("analyzer configuration error: {0}")]
    Config(String),

    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
