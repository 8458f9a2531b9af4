use ob_core::ObError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulator configuration error: {0}")]
    Config(#[from] ObError),
}

pub type SimResult<T> = Result<T, SimError>;
