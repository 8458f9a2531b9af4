use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("pool {name:?} holds {found}, not {requested}")]
    TypeMismatch {
        name:      String,
        requested: &'static str,
        found:     &'static str,
    },
}

pub type PoolResult<T> = Result<T, PoolError>;
