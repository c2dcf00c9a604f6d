use crate::{
    pointer::{Pointer, PointerError},
    value::Value,
};

#[derive(Debug, thiserror::Error, PartialEq, Clone)]
pub enum PatchError {
    #[error("Invalid pointer: {0}")]
    InvalidPointer(#[from] PointerError),

    #[error("Member '{key}' not found while resolving '{path}'")]
    KeyNotFound { path: Pointer, key: String },

    #[error("Index {index} is out of range for an array of length {len} while resolving '{path}'")]
    IndexOutOfRange {
        path: Pointer,
        index: usize,
        len: usize,
    },

    #[error("Token '{token}' in '{path}' is not a valid array index")]
    InvalidArrayIndex { path: Pointer, token: String },

    #[error("Value at '{path}' is {actual}, expected an object or an array")]
    NotAContainer { path: Pointer, actual: String },

    #[error("Cannot remove the root of the document")]
    CannotRemoveRoot,

    #[error("Cannot move '{from}' to '{path}': the target is the source itself or one of its children")]
    InvalidMoveTarget { from: Pointer, path: Pointer },

    #[error("Test failed at '{path}': expected {expected}, found {actual}")]
    TestFailed {
        path: Pointer,
        expected: Value,
        actual: Value,
    },

    #[error("Unsupported operation '{op}'")]
    UnsupportedOperation { op: String },

    #[error("Operation '{op}' is missing the required member '{member}'")]
    MissingMember { op: String, member: String },

    #[error("Invalid operation: {reason}")]
    InvalidOperation { reason: String },
}

impl PatchError {
    pub fn key_not_found(path: &Pointer, key: &str) -> Self {
        PatchError::KeyNotFound {
            path: path.clone(),
            key: key.to_string(),
        }
    }

    pub fn index_out_of_range(path: &Pointer, index: usize, len: usize) -> Self {
        PatchError::IndexOutOfRange {
            path: path.clone(),
            index,
            len,
        }
    }

    pub fn invalid_array_index(path: &Pointer, token: &str) -> Self {
        PatchError::InvalidArrayIndex {
            path: path.clone(),
            token: token.to_string(),
        }
    }

    pub fn not_a_container(path: &Pointer, actual: &Value) -> Self {
        PatchError::NotAContainer {
            path: path.clone(),
            actual: actual.type_desc(),
        }
    }

    pub fn invalid_move_target(from: &Pointer, path: &Pointer) -> Self {
        PatchError::InvalidMoveTarget {
            from: from.clone(),
            path: path.clone(),
        }
    }

    pub fn test_failed(path: &Pointer, expected: &Value, actual: &Value) -> Self {
        PatchError::TestFailed {
            path: path.clone(),
            expected: expected.clone(),
            actual: actual.clone(),
        }
    }

    pub fn unsupported_operation(op: &str) -> Self {
        PatchError::UnsupportedOperation { op: op.to_string() }
    }

    pub fn missing_member(op: &str, member: &str) -> Self {
        PatchError::MissingMember {
            op: op.to_string(),
            member: member.to_string(),
        }
    }

    pub fn invalid_operation(reason: impl Into<String>) -> Self {
        PatchError::InvalidOperation {
            reason: reason.into(),
        }
    }
}
