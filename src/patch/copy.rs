use crate::{
    patch::{add::add, error::PatchError, target},
    pointer::Pointer,
    value::Value,
};

/// The "copy" operation.
///
/// Copies the value at `from` to `path` as if by an "add" of that value.
/// The `from` location MUST exist. The copy shares structure with its
/// source, which is safe because values are never modified in place.
pub fn copy(doc: &Value, from: &Pointer, path: &Pointer) -> Result<Value, PatchError> {
    let value = target::resolve(doc, from)?.clone();
    add(doc, path, value)
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
    fn copy_existing_field() {
        let doc = value!({"a": 1, "b": 2});

        let_assert!(Ok(result) = copy(&doc, &ptr("/a"), &ptr("/c")));

        check!(result == value!({"a": 1, "b": 2, "c": 1}));
    }

    #[test]
    fn copy_non_existing_field_should_fail() {
        let doc = value!({"a": 1, "b": 2});

        let_assert!(Err(PatchError::KeyNotFound { key, .. }) = copy(&doc, &ptr("/x"), &ptr("/c")));

        check!(key == "x");
    }

    #[test]
    fn copy_into_own_child_is_allowed() {
        let doc = value!({"a": {"b": 1}});

        let_assert!(Ok(result) = copy(&doc, &ptr("/a"), &ptr("/a/c")));

        check!(result == value!({"a": {"b": 1, "c": {"b": 1}}}));
    }

    #[test]
    fn copy_array_element_to_end_of_array() {
        let doc = value!({"a": [1, 2, 3]});

        let_assert!(Ok(result) = copy(&doc, &ptr("/a/0"), &ptr("/a/-")));

        check!(result == value!({"a": [1, 2, 3, 1]}));
    }

    #[test]
    fn copy_shares_the_copied_subtree() {
        let doc = value!({"a": {"deep": [1, 2]}});

        let_assert!(Ok(result) = copy(&doc, &ptr("/a"), &ptr("/b")));

        let_assert!(Some(a) = result.get_key("a"));
        let_assert!(Some(b) = result.get_key("b"));
        check!(a.ptr_eq(b));
    }

    #[test]
    fn copy_to_missing_parent_should_fail() {
        let_assert!(
            Err(PatchError::KeyNotFound { key, .. }) =
                copy(&value!({"a": 1}), &ptr("/a"), &ptr("/x/y"))
        );

        check!(key == "x");
    }
}
