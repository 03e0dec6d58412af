use thiserror::Error;

pub type ScaleResult<T> = Result<T, ScaleError>;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unknown scale {0:?}")]
    UnknownScale(String),

    #[error("invalid scale config: {0}")]
    InvalidConfig(String),
}
