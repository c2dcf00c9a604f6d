use crate::value::Value;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PathError {
    #[error("Invalid path element {element}: expected a string key, an integer index or a nested sequence")]
    InvalidPath { element: String },

    #[error("Path nesting exceeds the limit of {limit} levels")]
    TooDeep { limit: usize },

    #[error("Path has more than {limit} segments")]
    TooManySegments { limit: usize },

    #[error("Index {index} needs more than {limit} padding elements")]
    PaddingTooLarge { index: i64, limit: usize },
}

impl PathError {
    pub fn invalid_path(element: &Value) -> Self {
        PathError::InvalidPath {
            element: element.type_desc(),
        }
    }
}
