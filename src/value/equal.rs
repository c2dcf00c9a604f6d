use std::sync::Arc;

use super::{Number, Value};

/// Structural JSON equality.
///
/// `Bool` and `Number` are disjoint: `true` is never equal to `1` and
/// `false` is never equal to `0`. Numbers compare by numeric value, so
/// `0 == 0.0`. Arrays compare element-wise in order, objects compare by key
/// set and per-key value regardless of key order.
pub fn equals(a: &Value, b: &Value) -> bool {
    let mut pending = vec![(a, b)];
    while let Some((a, b)) = pending.pop() {
        let same = match (a, b) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                if Arc::ptr_eq(a, b) {
                    continue;
                }
                pending.extend(a.iter().zip(b.iter()));
                a.len() == b.len()
            }
            (Value::Object(a), Value::Object(b)) => {
                if Arc::ptr_eq(a, b) {
                    continue;
                }
                a.len() == b.len()
                    && a.iter().all(|(key, x)| match b.get(key) {
                        Some(y) => {
                            pending.push((x, y));
                            true
                        }
                        None => false,
                    })
            }
            _ => false,
        };
        if !same {
            return false;
        }
    }
    true
}

/// Integers compare exactly with each other and with integral floats, so
/// equality stays transitive beyond the 53-bit float mantissa.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    match (a.is_f64(), b.is_f64()) {
        (true, true) => a.as_f64() == b.as_f64(),
        (true, false) => integer_equals_float(b, a.as_f64()),
        (false, true) => integer_equals_float(a, b.as_f64()),
        (false, false) => match (a.as_i64(), b.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => a.as_u64().is_some() && a.as_u64() == b.as_u64(),
        },
    }
}

// 2^63, the first float outside i64
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn integer_equals_float(integer: &Number, float: Option<f64>) -> bool {
    let Some(f) = float else {
        return false;
    };
    if f.fract() != 0.0 {
        return false;
    }
    if let Some(i) = integer.as_i64() {
        return (-I64_BOUND..I64_BOUND).contains(&f) && f as i64 == i;
    }
    if let Some(u) = integer.as_u64() {
        return (0.0..2.0 * I64_BOUND).contains(&f) && f as u64 == u;
    }
    false
}
