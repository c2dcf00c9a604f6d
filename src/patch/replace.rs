use crate::{
    patch::{error::PatchError, target},
    pointer::Pointer,
    value::Value,
};

/// The "replace" operation.
///
/// Replaces the value at the target location with `value`. The target
/// MUST exist; an empty `path` replaces the whole document.
pub fn replace(doc: &Value, path: &Pointer, value: Value) -> Result<Value, PatchError> {
    target::update(doc, path.tokens(), path, |_| Ok(value))
}
