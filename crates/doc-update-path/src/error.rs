use thiserror::Error;

/// Numeric error codes surfaced to callers, matching MongoDB's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    BadValue,
    FailedToParse,
    TypeMismatch,
    PathNotViable,
    ConflictingUpdateOperators,
    EmptyFieldName,
    ImmutableField,
}

impl ErrorCode {
    pub fn as_i32(self) -> i32 {
        match self {
            ErrorCode::BadValue => 2,
            ErrorCode::FailedToParse => 9,
            ErrorCode::TypeMismatch => 14,
            ErrorCode::PathNotViable => 28,
            ErrorCode::ConflictingUpdateOperators => 40,
            ErrorCode::EmptyFieldName => 56,
            ErrorCode::ImmutableField => 66,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ErrorCode::BadValue => "BadValue",
            ErrorCode::FailedToParse => "FailedToParse",
            ErrorCode::TypeMismatch => "TypeMismatch",
            ErrorCode::PathNotViable => "PathNotViable",
            ErrorCode::ConflictingUpdateOperators => "ConflictingUpdateOperators",
            ErrorCode::EmptyFieldName => "EmptyFieldName",
            ErrorCode::ImmutableField => "ImmutableField",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("An empty update path is not valid.")]
    EmptyPath,
    #[error("The update path '{path}' contains an empty field name, which is not allowed.")]
    EmptyField { path: String },
    #[error("The update path '{path}' exceeds the maximum depth of {max}")]
    TooDeep { path: String, max: usize },
    /// `element` is already rendered, braces included.
    #[error("Cannot create field '{field}' in element {element}")]
    CannotCreate { field: String, element: String },
    #[error("Cannot use the part ({part}) of ({path}) to traverse the element ({element})")]
    CannotTraverse {
        part: String,
        path: String,
        element: String,
    },
    #[error("can't backfill array to larger than {max} elements")]
    BackfillTooLarge { max: usize },
}

impl PathError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PathError::EmptyPath | PathError::EmptyField { .. } => ErrorCode::EmptyFieldName,
            PathError::TooDeep { .. } | PathError::BackfillTooLarge { .. } => ErrorCode::BadValue,
            PathError::CannotCreate { .. } | PathError::CannotTraverse { .. } => {
                ErrorCode::PathNotViable
            }
        }
    }
}
