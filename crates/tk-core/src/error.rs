use thiserror::Error;

pub type TkResult<T> = Result<T, TkError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TkError {
    #[error("{what} must be positive and finite, got {value}")]
    NotPositive { what: &'static str, value: f64 },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
