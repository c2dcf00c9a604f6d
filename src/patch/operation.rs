use std::{fmt, ops::Deref};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{patch::error::PatchError, pointer::Pointer, value::Value};

/// A single JSON Patch operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOp {
    Add { path: Pointer, value: Value },
    Remove { path: Pointer },
    Replace { path: Pointer, value: Value },
    Move { from: Pointer, path: Pointer },
    Copy { from: Pointer, path: Pointer },
    Test { path: Pointer, value: Value },
}

impl PatchOp {
    pub fn add(path: Pointer, value: Value) -> Self {
        PatchOp::Add { path, value }
    }

    pub fn remove(path: Pointer) -> Self {
        PatchOp::Remove { path }
    }

    pub fn replace(path: Pointer, value: Value) -> Self {
        PatchOp::Replace { path, value }
    }

    pub fn move_op(from: Pointer, path: Pointer) -> Self {
        PatchOp::Move { from, path }
    }

    pub fn copy(from: Pointer, path: Pointer) -> Self {
        PatchOp::Copy { from, path }
    }

    pub fn test(path: Pointer, value: Value) -> Self {
        PatchOp::Test { path, value }
    }

    /// The `op` tag of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            PatchOp::Add { .. } => "add",
            PatchOp::Remove { .. } => "remove",
            PatchOp::Replace { .. } => "replace",
            PatchOp::Move { .. } => "move",
            PatchOp::Copy { .. } => "copy",
            PatchOp::Test { .. } => "test",
        }
    }

    pub fn path(&self) -> &Pointer {
        match self {
            PatchOp::Add { path, .. }
            | PatchOp::Remove { path }
            | PatchOp::Replace { path, .. }
            | PatchOp::Move { path, .. }
            | PatchOp::Copy { path, .. }
            | PatchOp::Test { path, .. } => path,
        }
    }

    /// Source location of `move` and `copy`.
    pub fn from_path(&self) -> Option<&Pointer> {
        match self {
            PatchOp::Move { from, .. } | PatchOp::Copy { from, .. } => Some(from),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            PatchOp::Add { value, .. } | PatchOp::Replace { value, .. } | PatchOp::Test { value, .. } => {
                Some(value)
            }
            _ => None,
        }
    }
}

impl fmt::Display for PatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::from(self))
    }
}

impl From<&PatchOp> for Value {
    fn from(op: &PatchOp) -> Self {
        let mut entries = IndexMap::new();
        entries.insert("op".to_string(), Value::from(op.name()));
        if let Some(from) = op.from_path() {
            entries.insert("from".to_string(), Value::from(from.to_string()));
        }
        entries.insert("path".to_string(), Value::from(op.path().to_string()));
        if let Some(value) = op.value() {
            entries.insert("value".to_string(), value.clone());
        }
        Value::object(entries)
    }
}

impl TryFrom<&Value> for PatchOp {
    type Error = PatchError;

    /// Decodes an operation record such as
    /// `{"op": "move", "from": "/a", "path": "/b"}`.
    fn try_from(record: &Value) -> Result<Self, Self::Error> {
        let entries = record.as_object().ok_or_else(|| {
            PatchError::invalid_operation(format!(
                "expected an operation object, found {}",
                record.type_desc()
            ))
        })?;
        let op = match entries.get("op") {
            Some(Value::String(op)) => op.as_str(),
            Some(other) => {
                return Err(PatchError::invalid_operation(format!(
                    "member 'op' must be a string, found {}",
                    other.type_desc()
                )));
            }
            None => return Err(PatchError::missing_member("<unknown>", "op")),
        };

        let path = || pointer_member(entries, op, "path");
        let from = || pointer_member(entries, op, "from");
        let value = || value_member(entries, op, "value");

        match op {
            "add" => Ok(PatchOp::add(path()?, value()?)),
            "remove" => Ok(PatchOp::remove(path()?)),
            "replace" => Ok(PatchOp::replace(path()?, value()?)),
            "move" => Ok(PatchOp::move_op(from()?, path()?)),
            "copy" => Ok(PatchOp::copy(from()?, path()?)),
            "test" => Ok(PatchOp::test(path()?, value()?)),
            other => Err(PatchError::unsupported_operation(other)),
        }
    }
}

fn pointer_member(
    entries: &IndexMap<String, Value>,
    op: &str,
    member: &str,
) -> Result<Pointer, PatchError> {
    match entries.get(member) {
        Some(Value::String(raw)) => Ok(raw.parse::<Pointer>()?),
        Some(other) => Err(PatchError::invalid_operation(format!(
            "member '{member}' of '{op}' must be a pointer string, found {}",
            other.type_desc()
        ))),
        None => Err(PatchError::missing_member(op, member)),
    }
}

fn value_member(
    entries: &IndexMap<String, Value>,
    op: &str,
    member: &str,
) -> Result<Value, PatchError> {
    entries
        .get(member)
        .cloned()
        .ok_or_else(|| PatchError::missing_member(op, member))
}

/// An ordered sequence of operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch(Vec<PatchOp>);

impl Patch {
    pub fn new(operations: Vec<PatchOp>) -> Self {
        Patch(operations)
    }

    pub fn push(&mut self, op: PatchOp) {
        self.0.push(op);
    }

    pub fn into_inner(self) -> Vec<PatchOp> {
        self.0
    }

    /// Encodes the patch as an array of operation records.
    pub fn to_value(&self) -> Value {
        self.0.iter().map(Value::from).collect()
    }
}

impl Deref for Patch {
    type Target = [PatchOp];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<PatchOp>> for Patch {
    fn from(operations: Vec<PatchOp>) -> Self {
        Patch(operations)
    }
}

impl IntoIterator for Patch {
    type Item = PatchOp;
    type IntoIter = std::vec::IntoIter<PatchOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl TryFrom<&Value> for Patch {
    type Error = PatchError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let records = value.as_array().ok_or_else(|| {
            PatchError::invalid_operation(format!(
                "expected an array of operations, found {}",
                value.type_desc()
            ))
        })?;
        records
            .iter()
            .map(PatchOp::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Patch)
    }
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
    fn decodes_every_operation_kind() {
        let_assert!(
            Ok(patch) = Patch::try_from(&value!([
                {"op": "add", "path": "/a", "value": 1},
                {"op": "remove", "path": "/a"},
                {"op": "replace", "path": "/b", "value": null},
                {"op": "move", "from": "/b", "path": "/c"},
                {"op": "copy", "from": "/c", "path": "/d"},
                {"op": "test", "path": "/d", "value": [1]}
            ]))
        );

        check!(
            patch.into_inner()
                == vec![
                    PatchOp::add(ptr("/a"), value!(1)),
                    PatchOp::remove(ptr("/a")),
                    PatchOp::replace(ptr("/b"), Value::Null),
                    PatchOp::move_op(ptr("/b"), ptr("/c")),
                    PatchOp::copy(ptr("/c"), ptr("/d")),
                    PatchOp::test(ptr("/d"), value!([1])),
                ]
        );
    }

    #[test]
    fn unknown_op_is_unsupported() {
        let_assert!(
            Err(PatchError::UnsupportedOperation { op }) =
                PatchOp::try_from(&value!({"op": "merge", "path": "/a"}))
        );

        check!(op == "merge");
    }

    #[test]
    fn missing_value_is_reported() {
        let_assert!(
            Err(PatchError::MissingMember { op, member }) =
                PatchOp::try_from(&value!({"op": "add", "path": "/a"}))
        );

        check!(op == "add");
        check!(member == "value");
    }

    #[test]
    fn missing_from_is_reported() {
        let_assert!(
            Err(PatchError::MissingMember { member, .. }) =
                PatchOp::try_from(&value!({"op": "copy", "path": "/a"}))
        );

        check!(member == "from");
    }

    #[test]
    fn malformed_pointer_is_reported() {
        let_assert!(
            Err(PatchError::InvalidPointer(_)) =
                PatchOp::try_from(&value!({"op": "remove", "path": "a"}))
        );
    }

    #[test]
    fn non_object_record_is_invalid() {
        let_assert!(Err(PatchError::InvalidOperation { .. }) = PatchOp::try_from(&value!([1])));
        let_assert!(
            Err(PatchError::InvalidOperation { .. }) =
                PatchOp::try_from(&value!({"op": 1, "path": "/a"}))
        );
        let_assert!(Err(PatchError::InvalidOperation { .. }) = Patch::try_from(&value!({})));
    }

    #[test]
    fn encodes_records_with_op_first() {
        let op = PatchOp::move_op(ptr("/a~1b"), ptr("/c"));

        check!(op.to_string() == r#"{"op":"move","from":"/a~1b","path":"/c"}"#);
    }

    #[test]
    fn serde_matches_the_wire_shape() {
        let_assert!(
            Ok(op) = serde_json::from_str::<PatchOp>(r#"{"op":"replace","path":"/a","value":2}"#)
        );

        check!(op == PatchOp::replace(ptr("/a"), value!(2)));
        let_assert!(Ok(text) = serde_json::to_string(&Patch::new(vec![op])));
        check!(text == r#"[{"op":"replace","path":"/a","value":2}]"#);
    }
}
