use std::slice;

use indexmap::{IndexMap, map};

use super::Value;

/// Copies every container of `value` using a heap stack instead of
/// recursion.
pub(super) fn deep_copy(value: &Value) -> Value {
    let mut stack = match Frame::open(value) {
        Ok(frame) => vec![frame],
        Err(scalar) => return scalar,
    };

    while let Some(top) = stack.last_mut() {
        let copied = match top.next_child() {
            Some(child) => match Frame::open(child) {
                Ok(frame) => {
                    stack.push(frame);
                    continue;
                }
                Err(scalar) => scalar,
            },
            None => match stack.pop() {
                Some(frame) => frame.finish(),
                None => break,
            },
        };
        match stack.last_mut() {
            Some(parent) => parent.attach(copied),
            None => return copied,
        }
    }
    Value::Null
}

enum Frame<'a> {
    Array {
        source: slice::Iter<'a, Value>,
        items: Vec<Value>,
    },
    Object {
        source: map::Iter<'a, String, Value>,
        entries: IndexMap<String, Value>,
        key: Option<&'a String>,
    },
}

impl<'a> Frame<'a> {
    /// Starts copying a container; scalars are cloned right away.
    fn open(value: &'a Value) -> Result<Self, Value> {
        match value {
            Value::Array(items) => Ok(Frame::Array {
                source: items.iter(),
                items: Vec::with_capacity(items.len()),
            }),
            Value::Object(entries) => Ok(Frame::Object {
                source: entries.iter(),
                entries: IndexMap::with_capacity(entries.len()),
                key: None,
            }),
            scalar => Err(scalar.clone()),
        }
    }

    fn next_child(&mut self) -> Option<&'a Value> {
        match self {
            Frame::Array { source, .. } => source.next(),
            Frame::Object { source, key, .. } => source.next().map(|(name, child)| {
                *key = Some(name);
                child
            }),
        }
    }

    fn attach(&mut self, copied: Value) {
        match self {
            Frame::Array { items, .. } => items.push(copied),
            Frame::Object { entries, key, .. } => {
                if let Some(name) = key.take() {
                    entries.insert(name.clone(), copied);
                }
            }
        }
    }

    fn finish(self) -> Value {
        match self {
            Frame::Array { items, .. } => Value::array(items),
            Frame::Object { entries, .. } => Value::object(entries),
        }
    }
}
