use crate::{
    patch::{add::add, error::PatchError, remove::remove, target},
    pointer::Pointer,
    value::Value,
};

/// The "move" operation.
///
/// Removes the value at `from` and adds it at `path`. The `from` location
/// MUST exist.
///
/// `path` must be neither `from` itself nor one of its children; a value
/// cannot be moved into itself. This is checked before the document is
/// looked at.
pub fn move_op(doc: &Value, from: &Pointer, path: &Pointer) -> Result<Value, PatchError> {
    if from == path || from.is_prefix_of(path) {
        return Err(PatchError::invalid_move_target(from, path));
    }

    let value = target::resolve(doc, from)?.clone();
    let without = remove(doc, from)?;
    add(&without, path, value)
}
