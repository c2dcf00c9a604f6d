use assert2::{check, let_assert};
use jsontree::{
    Patch, PatchError, PatchOp, Pointer, Value, apply, diff, equals, get, path, remove, set, value,
};

fn patch(ops: Value) -> Patch {
    Patch::try_from(&ops).unwrap()
}

#[test]
fn get_nested_index() {
    let doc = value!({"a": [1, 2, [3, 4]]});

    check!(get(&doc, &path!["a", 2, 0]) == Some(&value!(3)));
}

#[test]
fn set_pads_array_with_null() {
    let_assert!(Ok(result) = set(&value!([1, 2, 3]), &path![4], value!(4)));

    check!(result == value!([1, 2, 3, null, 4]));
}

#[test]
fn remove_nested_key() {
    let doc = value!([1, {"a": 2, "b": 3}, 4]);

    check!(remove(&doc, &path![1, "b"]) == value!([1, {"a": 2}, 4]));
}

#[test]
fn remove_missing_returns_the_same_root() {
    let doc = value!([1, {"a": 2}]);

    let result = remove(&doc, &path![1, "zzz"]);

    check!(result.ptr_eq(&doc));
}

#[test]
fn diff_single_replace() {
    let_assert!(Ok(ops) = diff(&value!({"a": 1}), &value!({"a": 2})));

    check!(ops.to_value() == value!([{"op": "replace", "path": "/a", "value": 2}]));
}

#[test]
fn apply_replace_nested() {
    let ops = patch(value!([{"op": "replace", "path": "/1/a", "value": 4}]));

    let_assert!(Ok(result) = apply(&value!([1, {"a": 2}, 3]), &ops));

    check!(result == value!([1, {"a": 4}, 3]));
}

#[test]
fn apply_move_into_descendant_fails() {
    let ops = patch(value!([{"op": "move", "from": "/a", "path": "/a/b"}]));

    for doc in [value!({"a": {}}), value!({"a": 1}), value!({})] {
        let_assert!(Err(PatchError::InvalidMoveTarget { from, path }) = apply(&doc, &ops));
        check!(from == "/a".parse::<Pointer>().unwrap());
        check!(path == "/a/b".parse::<Pointer>().unwrap());
    }
}

#[test]
fn equality_distinguishes_booleans_from_numbers() {
    check!(equals(&value!(0), &value!(0.0)));
    check!(!equals(&value!(1), &value!(true)));
    check!(!equals(&value!(false), &value!(0)));
}

#[test]
fn failed_patch_leaves_input_untouched() {
    let doc = value!({"list": [1, 2], "flag": true});
    let ops = vec![
        PatchOp::remove("/list/0".parse().unwrap()),
        PatchOp::add("/list/-".parse().unwrap(), value!(3)),
        PatchOp::test("/flag".parse().unwrap(), value!(1)),
    ];

    let_assert!(Err(PatchError::TestFailed { .. }) = apply(&doc, &ops));

    check!(doc == value!({"list": [1, 2], "flag": true}));
}

#[test]
fn unsupported_op_is_rejected_when_decoding() {
    let_assert!(
        Err(PatchError::UnsupportedOperation { op }) =
            Patch::try_from(&value!([{"op": "merge", "path": "/a", "value": 1}]))
    );
    check!(op == "merge");
}
