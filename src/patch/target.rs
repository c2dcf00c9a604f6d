use crate::{
    patch::error::PatchError,
    pointer::{Pointer, array_index},
    value::Value,
};

/// Returns the value `pointer` refers to. Every token must resolve.
pub(super) fn resolve<'a>(doc: &'a Value, pointer: &Pointer) -> Result<&'a Value, PatchError> {
    let mut current = doc;
    for (depth, token) in pointer.tokens().iter().enumerate() {
        current = match current {
            Value::Object(entries) => entries
                .get(token)
                .ok_or_else(|| PatchError::key_not_found(pointer, token))?,
            Value::Array(items) => &items[existing_index(items, token, pointer)?],
            other => return Err(PatchError::not_a_container(&prefix(pointer, depth), other)),
        };
    }
    Ok(current)
}

/// Parses `token` as the index of an existing array element.
///
/// `-` names the slot past the last element and therefore never exists.
pub(super) fn existing_index(
    items: &[Value],
    token: &str,
    pointer: &Pointer,
) -> Result<usize, PatchError> {
    if token == "-" {
        return Err(PatchError::index_out_of_range(pointer, items.len(), items.len()));
    }
    let index = array_index(token).ok_or_else(|| PatchError::invalid_array_index(pointer, token))?;
    if index >= items.len() {
        return Err(PatchError::index_out_of_range(pointer, index, items.len()));
    }
    Ok(index)
}

/// Rebuilds `doc` with the node at `tokens` replaced by `f(node)`.
///
/// Only the nodes between the root and the target are copied; every other
/// subtree is shared with `doc`. `pointer` is the full pointer of the
/// operation and is only used for error reporting.
pub(super) fn update<F>(doc: &Value, tokens: &[String], pointer: &Pointer, f: F) -> Result<Value, PatchError>
where
    F: FnOnce(&Value) -> Result<Value, PatchError>,
{
    let Some((token, rest)) = tokens.split_first() else {
        return f(doc);
    };

    match doc {
        Value::Object(entries) => {
            let child = entries
                .get(token)
                .ok_or_else(|| PatchError::key_not_found(pointer, token))?;
            let updated = update(child, rest, pointer, f)?;
            let mut entries = entries.as_ref().clone();
            entries.insert(token.clone(), updated);
            Ok(Value::object(entries))
        }
        Value::Array(items) => {
            let index = existing_index(items, token, pointer)?;
            let updated = update(&items[index], rest, pointer, f)?;
            let mut items = items.as_ref().clone();
            items[index] = updated;
            Ok(Value::array(items))
        }
        other => {
            let depth = pointer.len() - tokens.len();
            Err(PatchError::not_a_container(&prefix(pointer, depth), other))
        }
    }
}

/// Rebuilds `doc` with the container holding the target of `pointer`
/// replaced by `f(container, last_token)`. `pointer` must not be the root.
pub(super) fn update_parent<F>(doc: &Value, pointer: &Pointer, f: F) -> Result<Value, PatchError>
where
    F: FnOnce(&Value, &str) -> Result<Value, PatchError>,
{
    let Some((last, parent)) = pointer.tokens().split_last() else {
        return f(doc, "");
    };
    update(doc, parent, pointer, |container| f(container, last))
}

fn prefix(pointer: &Pointer, depth: usize) -> Pointer {
    Pointer::new(pointer.tokens()[..depth].to_vec())
}
