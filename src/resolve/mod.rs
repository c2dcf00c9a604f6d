//! Miss-tolerant access to a value tree by [`Path`].
//!
//! Absence is data here, not an error: [`get`] yields `None` for a missing
//! location, [`remove`] leaves the tree untouched and [`set`] creates
//! whatever containers are missing on the way down. Updates never touch the
//! input; they return a new root that shares every untouched subtree with it.

use std::iter;

use indexmap::IndexMap;

use crate::{
    path::{MAX_ARRAY_PADDING, MAX_SET_SEGMENTS, Path, PathError, Segment},
    value::Value,
};

/// Resolves `index` against an array of `len` elements, counting negative
/// indices from the end.
pub(crate) fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let resolved = if index < 0 {
        len.checked_sub(usize::try_from(index.unsigned_abs()).ok()?)?
    } else {
        usize::try_from(index).ok()?
    };
    (resolved < len).then_some(resolved)
}

fn child<'a>(node: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match (node, segment) {
        (Value::Object(entries), Segment::Key(key)) => entries.get(key),
        (Value::Array(items), Segment::Index(index)) => {
            normalize_index(*index, items.len()).map(|i| &items[i])
        }
        _ => None,
    }
}

/// Returns the value at `path`, or `None` if any step is missing or hits a
/// node of the wrong kind.
pub fn get<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    path.flatten().try_fold(root, child)
}

/// Like [`get`] but falls back to `default`.
pub fn get_or<'a>(root: &'a Value, path: &Path, default: &'a Value) -> &'a Value {
    get(root, path).unwrap_or(default)
}

/// Returns a new root with `value` placed at `path`.
///
/// Missing or wrongly typed intermediate nodes are replaced by fresh objects
/// (for key segments) or arrays (for index segments). Indices past the end
/// pad the array with `Null`; negative indices reaching before the start pad
/// its front. An empty path replaces the root.
///
/// Fails when the path has more than [`MAX_SET_SEGMENTS`] segments or an
/// index needs more than [`MAX_ARRAY_PADDING`] padding elements.
pub fn set(root: &Value, path: &Path, value: Value) -> Result<Value, PathError> {
    let mut parents: Vec<(Option<&Value>, &Segment)> = Vec::new();
    let mut current = Some(root);
    for segment in path.flatten() {
        if parents.len() == MAX_SET_SEGMENTS {
            return Err(PathError::TooManySegments {
                limit: MAX_SET_SEGMENTS,
            });
        }
        parents.push((current, segment));
        current = current.and_then(|node| child(node, segment));
    }

    parents
        .into_iter()
        .rev()
        .try_fold(value, |value, (parent, segment)| match segment {
            Segment::Key(key) => Ok(with_key(parent, key, value)),
            Segment::Index(index) => with_index(parent, *index, value),
        })
}

fn with_key(parent: Option<&Value>, key: &str, value: Value) -> Value {
    let mut entries = match parent {
        Some(Value::Object(entries)) => entries.as_ref().clone(),
        _ => IndexMap::new(),
    };
    entries.insert(key.to_string(), value);
    Value::object(entries)
}

fn with_index(parent: Option<&Value>, index: i64, value: Value) -> Result<Value, PathError> {
    let mut items = match parent {
        Some(Value::Array(items)) => items.as_ref().clone(),
        _ => Vec::new(),
    };

    let too_large = || PathError::PaddingTooLarge {
        index,
        limit: MAX_ARRAY_PADDING,
    };
    let position = if index >= 0 {
        let position = usize::try_from(index).map_err(|_| too_large())?;
        if position >= items.len() {
            if position - items.len() > MAX_ARRAY_PADDING {
                return Err(too_large());
            }
            items.resize(position + 1, Value::Null);
        }
        position
    } else {
        let back = usize::try_from(index.unsigned_abs()).map_err(|_| too_large())?;
        if back > items.len() {
            let missing = back - items.len();
            if missing - 1 > MAX_ARRAY_PADDING {
                return Err(too_large());
            }
            items.splice(0..0, iter::repeat_n(Value::Null, missing));
        }
        items.len() - back
    };

    items[position] = value;
    Ok(Value::array(items))
}

/// Returns a new root without the element at `path`.
///
/// If `path` does not resolve, the input root itself is returned (the result
/// is [`Value::ptr_eq`] to it). Removing the empty path yields `Null`.
pub fn remove(root: &Value, path: &Path) -> Value {
    let mut parents: Vec<(&Value, &Segment)> = Vec::new();
    let mut current = root;
    for segment in path.flatten() {
        let Some(next) = child(current, segment) else {
            return root.clone();
        };
        parents.push((current, segment));
        current = next;
    }

    let Some((parent, segment)) = parents.pop() else {
        return Value::Null;
    };
    let innermost = without(parent, segment);

    parents
        .into_iter()
        .rev()
        .fold(innermost, |value, (parent, segment)| {
            replaced(parent, segment, value)
        })
}

// Callers only pass (parent, segment) pairs recorded during a successful walk.
fn without(parent: &Value, segment: &Segment) -> Value {
    match (parent, segment) {
        (Value::Object(entries), Segment::Key(key)) => {
            let mut entries = entries.as_ref().clone();
            entries.shift_remove(key);
            Value::object(entries)
        }
        (Value::Array(items), Segment::Index(index)) => {
            match normalize_index(*index, items.len()) {
                Some(position) => {
                    let mut items = items.as_ref().clone();
                    items.remove(position);
                    Value::array(items)
                }
                None => parent.clone(),
            }
        }
        _ => parent.clone(),
    }
}

fn replaced(parent: &Value, segment: &Segment, value: Value) -> Value {
    match (parent, segment) {
        (Value::Object(entries), Segment::Key(key)) => {
            let mut entries = entries.as_ref().clone();
            entries.insert(key.clone(), value);
            Value::object(entries)
        }
        (Value::Array(items), Segment::Index(index)) => {
            match normalize_index(*index, items.len()) {
                Some(position) => {
                    let mut items = items.as_ref().clone();
                    items[position] = value;
                    Value::array(items)
                }
                None => parent.clone(),
            }
        }
        _ => parent.clone(),
    }
}
