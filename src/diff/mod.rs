mod engine;
mod error;

pub use error::DiffError;

use crate::{patch::Patch, pointer::Pointer, value::Value};

/// Maximum container nesting [`diff`] descends into.
pub const MAX_DIFF_DEPTH: usize = 256;

/// Computes a patch that turns `left` into `right`.
///
/// Applying the result to `left` yields a value equal to `right`, and two
/// equal values produce an empty patch. The patch is not guaranteed to be
/// minimal: array elements are compared by position and moves are never
/// detected.
pub fn diff(left: &Value, right: &Value) -> Result<Patch, DiffError> {
    let mut patch_ops = Patch::default();
    let mut path_pos = Pointer::root();

    engine::diff_recursive(left, right, 0, &mut path_pos, &mut patch_ops)?;

    log::debug!("diff produced {} operation(s)", patch_ops.len());
    Ok(patch_ops)
}
