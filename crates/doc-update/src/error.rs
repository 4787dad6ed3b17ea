use doc_update_path::{ErrorCode, PathError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum UpdateError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("Unknown modifier: {0}. Expected a valid update modifier or pipeline-style update specified as an array")]
    UnknownOperator(String),

    #[error("{0}")]
    FailedToParse(String),

    #[error("Path '{path}' contains an element of non-array type '{type_name}'")]
    NonArray {
        path: String,
        type_name: &'static str,
    },

    #[error("{0}")]
    TypeMismatch(String),

    #[error("{0}")]
    BadValue(String),

    #[error("Updating the path '{path}' would create a conflict at '{conflict}'")]
    Conflict { path: String, conflict: String },

    #[error("Performing an update on the path '_id' would modify the immutable field '_id'")]
    ImmutableField,
}

impl UpdateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            UpdateError::Path(err) => err.code(),
            UpdateError::UnknownOperator(_) | UpdateError::FailedToParse(_) => {
                ErrorCode::FailedToParse
            }
            UpdateError::NonArray { .. } | UpdateError::TypeMismatch(_) => ErrorCode::TypeMismatch,
            UpdateError::BadValue(_) => ErrorCode::BadValue,
            UpdateError::Conflict { .. } => ErrorCode::ConflictingUpdateOperators,
            UpdateError::ImmutableField => ErrorCode::ImmutableField,
        }
    }
}
