use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Unknown field: {text}")]
    UnknownField { text: String },

    #[error("Unknown compounding frequency: {text}")]
    UnknownFrequency { text: String },
}
