use indexmap::IndexMap;

use crate::{
    diff::{DiffError, MAX_DIFF_DEPTH},
    patch::{Patch, PatchOp},
    pointer::Pointer,
    value::Value,
};

pub(super) fn diff_recursive(
    left: &Value,
    right: &Value,
    depth: usize,
    path_pos: &mut Pointer,
    patch_ops: &mut Patch,
) -> Result<(), DiffError> {
    if left == right {
        return Ok(());
    }

    match (left, right) {
        (Value::Object(left_map), Value::Object(right_map)) => {
            check_depth(depth, path_pos)?;
            diff_object(left_map, right_map, depth + 1, path_pos, patch_ops)
        }
        (Value::Array(left_array), Value::Array(right_array)) => {
            check_depth(depth, path_pos)?;
            diff_array(left_array, right_array, depth + 1, path_pos, patch_ops)
        }
        (_, right) => {
            patch_ops.push(PatchOp::replace(path_pos.clone(), right.clone()));
            Ok(())
        }
    }
}

fn check_depth(depth: usize, path_pos: &Pointer) -> Result<(), DiffError> {
    if depth >= MAX_DIFF_DEPTH {
        return Err(DiffError::nesting_too_deep(path_pos, MAX_DIFF_DEPTH));
    }
    Ok(())
}

fn diff_object(
    left_map: &IndexMap<String, Value>,
    right_map: &IndexMap<String, Value>,
    depth: usize,
    path_pos: &mut Pointer,
    patch_ops: &mut Patch,
) -> Result<(), DiffError> {
    for (key, right_value) in right_map {
        path_pos.push(key.as_str());
        let result = match left_map.get(key) {
            Some(left_value) => diff_recursive(left_value, right_value, depth, path_pos, patch_ops),
            None => {
                patch_ops.push(PatchOp::add(path_pos.clone(), right_value.clone()));
                Ok(())
            }
        };
        path_pos.pop();
        result?;
    }

    for key in left_map.keys() {
        if !right_map.contains_key(key) {
            patch_ops.push(PatchOp::remove(path_pos.child(key.as_str())));
        }
    }
    Ok(())
}

/// Trims the common prefix and suffix, diffs the overlapping middle by
/// position, then appends the extra elements of `right` or removes the
/// extra elements of `left` from the highest index down.
fn diff_array(
    left: &[Value],
    right: &[Value],
    depth: usize,
    path_pos: &mut Pointer,
    patch_ops: &mut Patch,
) -> Result<(), DiffError> {
    let prefix = left.iter().zip(right).take_while(|(l, r)| l == r).count();
    let max_suffix = left.len().min(right.len()) - prefix;
    let suffix = left
        .iter()
        .rev()
        .zip(right.iter().rev())
        .take(max_suffix)
        .take_while(|(l, r)| l == r)
        .count();

    let left_mid = &left[prefix..left.len() - suffix];
    let right_mid = &right[prefix..right.len() - suffix];
    let common = left_mid.len().min(right_mid.len());

    for (offset, (l, r)) in left_mid.iter().zip(right_mid).enumerate() {
        path_pos.push((prefix + offset).to_string());
        let result = diff_recursive(l, r, depth, path_pos, patch_ops);
        path_pos.pop();
        result?;
    }

    for (offset, value) in right_mid.iter().enumerate().skip(common) {
        let index = (prefix + offset).to_string();
        patch_ops.push(PatchOp::add(path_pos.child(index), value.clone()));
    }

    for offset in (common..left_mid.len()).rev() {
        let index = (prefix + offset).to_string();
        patch_ops.push(PatchOp::remove(path_pos.child(index)));
    }
    Ok(())
}
