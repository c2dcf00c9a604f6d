//! JSON Patch (RFC 6902) application.
//!
//! Each operation is a pure function from a document to a new document.
//! [`apply`] runs a whole patch and stops at the first failing operation;
//! since nothing is modified in place, a failed patch leaves the input as
//! it was.

mod add;
mod copy;
mod error;
mod move_op;
mod operation;
mod remove;
mod replace;
mod target;

pub use add::add;
pub use copy::copy;
pub use error::PatchError;
pub use move_op::move_op;
pub use operation::{Patch, PatchOp};
pub use remove::remove;
pub use replace::replace;
pub use test::test;

use crate::value::Value;

/// Applies `patch` to `doc` and returns the patched document.
pub fn apply(doc: &Value, patch: &[PatchOp]) -> Result<Value, PatchError> {
    log::debug!("applying patch of {} operation(s)", patch.len());
    patch
        .iter()
        .enumerate()
        .try_fold(doc.clone(), |current, (index, op)| {
            log::trace!("operation {index}: {op}");
            apply_op(&current, op).inspect_err(|err| {
                log::debug!("operation {index} ({}) failed: {err}", op.name());
            })
        })
}

/// Applies a single operation.
pub fn apply_op(doc: &Value, op: &PatchOp) -> Result<Value, PatchError> {
    match op {
        PatchOp::Add { path, value } => add(doc, path, value.clone()),
        PatchOp::Remove { path } => remove(doc, path),
        PatchOp::Replace { path, value } => replace(doc, path, value.clone()),
        PatchOp::Move { from, path } => move_op(doc, from, path),
        PatchOp::Copy { from, path } => copy(doc, from, path),
        PatchOp::Test { path, value } => test(doc, path, value),
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::{pointer::Pointer, value};

    fn ptr(raw: &str) -> Pointer {
        raw.try_into().unwrap()
    }

    fn patch(ops: Value) -> Patch {
        Patch::try_from(&ops).unwrap()
    }

    #[test]
    fn apply_with_failing_test_should_not_apply_any_changes() {
        let doc = value!({"a": 1, "b": 2});
        let ops = vec![
            PatchOp::add(ptr("/c"), value!({"foo": "bar"})),
            PatchOp::test(ptr("/a"), value!(2)),
        ];

        let_assert!(Err(PatchError::TestFailed { path, .. }) = apply(&doc, &ops));

        check!(path == ptr("/a"));
        check!(doc == value!({"a": 1, "b": 2}));
    }

    #[test]
    fn apply_with_all_successful_operations_should_apply_all_changes() {
        let doc = value!({"a": 1, "b": 2});
        let ops = vec![
            PatchOp::add(ptr("/c"), value!({"foo": "bar"})),
            PatchOp::test(ptr("/a"), value!(1)),
            PatchOp::replace(ptr("/b"), value!({"baz": [1, 2, 3]})),
        ];

        let_assert!(Ok(result) = apply(&doc, &ops));

        check!(result == value!({"a": 1, "b": {"baz": [1, 2, 3]}, "c": {"foo": "bar"}}));
    }

    #[test]
    fn apply_empty_patch_returns_the_input() {
        let doc = value!({"a": [1]});

        let_assert!(Ok(result) = apply(&doc, &[]));

        check!(result.ptr_eq(&doc));
    }

    #[test]
    fn apply_stops_at_the_first_error() {
        let doc = value!({"a": 1});
        let ops = patch(value!([
            {"op": "remove", "path": "/missing"},
            {"op": "move", "from": "/a", "path": "/a/b"}
        ]));

        let_assert!(Err(PatchError::KeyNotFound { key, .. }) = apply(&doc, &ops));
        check!(key == "missing");
    }

    #[test]
    fn apply_sees_the_result_of_earlier_operations() {
        let doc = value!({"foo": {"bar": "baz", "waldo": "fred"}, "qux": {"corge": "grault"}});
        let ops = patch(value!([
            {"op": "move", "from": "/foo/waldo", "path": "/qux/thud"},
            {"op": "copy", "from": "/qux/thud", "path": "/foo/waldo"},
            {"op": "test", "path": "/foo/waldo", "value": "fred"}
        ]));

        let_assert!(Ok(result) = apply(&doc, &ops));

        check!(
            result
                == value!({
                    "foo": {"bar": "baz", "waldo": "fred"},
                    "qux": {"corge": "grault", "thud": "fred"}
                })
        );
    }

    #[test]
    fn apply_replace_then_add_to_array() {
        let doc = value!({"a": [1, 2]});
        let ops = patch(value!([
            {"op": "replace", "path": "/a/0", "value": 9},
            {"op": "add", "path": "/a/-", "value": 3}
        ]));

        let_assert!(Ok(result) = apply(&doc, &ops));

        check!(result == value!({"a": [9, 2, 3]}));
    }

    #[test]
    fn apply_move_into_descendant_fails() {
        let doc = value!({"a": {"b": 1}});
        let ops = patch(value!([{"op": "move", "from": "/a", "path": "/a/b"}]));

        let_assert!(Err(PatchError::InvalidMoveTarget { .. }) = apply(&doc, &ops));
    }

    #[test]
    fn apply_op_dispatches_by_variant() {
        let doc = value!({"a": 1});

        let_assert!(Ok(result) = apply_op(&doc, &PatchOp::copy(ptr("/a"), ptr("/b"))));
        check!(result == value!({"a": 1, "b": 1}));

        let_assert!(Ok(result) = apply_op(&result, &PatchOp::remove(ptr("/a"))));
        check!(result == value!({"b": 1}));
    }
}
