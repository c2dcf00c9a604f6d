use crate::{
    patch::{error::PatchError, target},
    pointer::Pointer,
    value::Value,
};

/// The "remove" operation.
///
/// The target location MUST exist for the operation to be successful.
/// Removing an array element shifts every element above it one position
/// to the left. The document root cannot be removed.
pub fn remove(doc: &Value, path: &Pointer) -> Result<Value, PatchError> {
    if path.is_root() {
        return Err(PatchError::CannotRemoveRoot);
    }

    target::update_parent(doc, path, |container, token| match container {
        Value::Object(entries) => {
            if !entries.contains_key(token) {
                return Err(PatchError::key_not_found(path, token));
            }
            let mut entries = entries.as_ref().clone();
            entries.shift_remove(token);
            Ok(Value::object(entries))
        }
        Value::Array(items) => {
            let index = target::existing_index(items, token, path)?;
            let mut items = items.as_ref().clone();
            items.remove(index);
            Ok(Value::array(items))
        }
        other => {
            let parent = path.parent().unwrap_or_default();
            Err(PatchError::not_a_container(&parent, other))
        }
    })
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::value;

    fn ptr(raw: &str) -> Pointer {
        raw.try_into().unwrap()
    }

    #[test]
    fn remove_empty_path_should_fail() {
        let doc = value!({"a": 1, "b": 2});

        let_assert!(Err(PatchError::CannotRemoveRoot) = remove(&doc, &ptr("")));
    }

    #[test]
    fn remove_slash_path_removes_the_empty_key() {
        let doc = value!({"a": 1, "b": 2, "": 3});

        let_assert!(Ok(result) = remove(&doc, &ptr("/")));

        check!(result == value!({"a": 1, "b": 2}));
    }

    #[test]
    fn remove_existing_field() {
        let doc = value!({"a": 1, "b": 2});

        let_assert!(Ok(result) = remove(&doc, &ptr("/a")));

        check!(result == value!({"b": 2}));
        check!(doc == value!({"a": 1, "b": 2}));
    }

    #[test]
    fn remove_keeps_the_order_of_remaining_keys() {
        let doc = value!({"a": 1, "b": 2, "c": 3});

        let_assert!(Ok(result) = remove(&doc, &ptr("/b")));

        check!(result.to_string() == r#"{"a":1,"c":3}"#);
    }

    #[test]
    fn remove_non_existing_field_should_fail() {
        let doc = value!({"a": 1, "b": 2});

        let_assert!(Err(PatchError::KeyNotFound { path, key }) = remove(&doc, &ptr("/c")));

        check!(path == ptr("/c"));
        check!(key == "c");
    }

    #[test]
    fn remove_field_from_nested_object() {
        let doc = value!({"a": {"b": {"c": 3, "d": 4}}, "e": 5});

        let_assert!(Ok(result) = remove(&doc, &ptr("/a/b/c")));

        check!(result == value!({"a": {"b": {"d": 4}}, "e": 5}));
    }

    #[test]
    fn remove_from_empty_document_should_fail() {
        let_assert!(Err(PatchError::KeyNotFound { .. }) = remove(&value!({}), &ptr("/a")));
    }

    #[test]
    fn remove_from_array_shifts_elements() {
        let doc = value!([1, 2, 3]);

        let_assert!(Ok(result) = remove(&doc, &ptr("/0")));

        check!(result == value!([2, 3]));
    }

    #[test]
    fn remove_from_array_out_of_bounds_should_fail() {
        let doc = value!([1, 2, 3]);

        let_assert!(
            Err(PatchError::IndexOutOfRange { index, len, .. }) = remove(&doc, &ptr("/3"))
        );

        check!(index == 3);
        check!(len == 3);
    }

    #[test]
    fn remove_with_dash_should_fail() {
        let_assert!(
            Err(PatchError::IndexOutOfRange { index: 3, len: 3, .. }) =
                remove(&value!([1, 2, 3]), &ptr("/-"))
        );
    }

    #[test]
    fn remove_from_scalar_should_fail() {
        let doc = value!({"a": 1, "b": 2});

        let_assert!(Err(PatchError::NotAContainer { path, .. }) = remove(&doc, &ptr("/a/0")));

        check!(path == ptr("/a"));
    }

    #[test]
    fn remove_with_empty_key_and_nested_path() {
        let doc = value!({"a": {"": {"b": 1}}, "b": 2});

        let_assert!(Ok(result) = remove(&doc, &ptr("/a//b")));

        check!(result == value!({"a": {"": {}}, "b": 2}));
    }

    #[test]
    fn remove_with_special_characters_in_key() {
        let doc = value!({"a/b": {"c~d": 1}, "e": 2});

        let_assert!(Ok(result) = remove(&doc, &ptr("/a~1b/c~0d")));

        check!(result == value!({"a/b": {}, "e": 2}));
    }
}
