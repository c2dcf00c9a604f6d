use crate::{
    patch::{error::PatchError, target},
    pointer::{Pointer, array_index},
    value::Value,
};

/// The "add" operation.
///
/// o  An empty `path` makes `value` the entire new document.
///
/// o  If the parent is an object, the member is added, or replaced if it
///    already exists.
///
/// o  If the parent is an array, `value` is inserted at the index and the
///    elements at or above it shift right. The index must not be greater
///    than the array length; `-` appends.
///
/// The parent itself must exist. Adding `/a/b` to `{"a": {"foo": 1}}` is
/// fine, adding it to `{"q": {"bar": 2}}` is an error.
pub fn add(doc: &Value, path: &Pointer, value: Value) -> Result<Value, PatchError> {
    if path.is_root() {
        return Ok(value);
    }

    target::update_parent(doc, path, |container, token| match container {
        Value::Object(entries) => {
            let mut entries = entries.as_ref().clone();
            entries.insert(token.to_string(), value);
            Ok(Value::object(entries))
        }
        Value::Array(items) => {
            let index = if token == "-" {
                items.len()
            } else {
                array_index(token).ok_or_else(|| PatchError::invalid_array_index(path, token))?
            };
            if index > items.len() {
                return Err(PatchError::index_out_of_range(path, index, items.len()));
            }
            let mut items = items.as_ref().clone();
            items.insert(index, value);
            Ok(Value::array(items))
        }
        other => {
            let parent = path.parent().unwrap_or_default();
            Err(PatchError::not_a_container(&parent, other))
        }
    })
}
