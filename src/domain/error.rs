use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input cannot be tokenized as markup: {reason}")]
    MalformedInput { reason: String },
}
