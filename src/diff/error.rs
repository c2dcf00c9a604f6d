use crate::pointer::Pointer;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DiffError {
    #[error("Values nest deeper than {limit} levels at '{path}'")]
    NestingTooDeep { path: Pointer, limit: usize },
}

impl DiffError {
    pub fn nesting_too_deep(path: &Pointer, limit: usize) -> Self {
        DiffError::NestingTooDeep {
            path: path.clone(),
            limit,
        }
    }
}
