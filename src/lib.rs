//! Immutable JSON-shaped values with path-based access and JSON Patch.
//!
//! Every operation returns a new value that shares its untouched subtrees
//! with the input; nothing is modified in place.
//!
//! ```
//! use jsontree::{Value, path, value};
//!
//! let doc = value!({"a": [1, {"b": 2}]});
//! let updated = jsontree::set(&doc, &path!["a", 1, "c"], Value::from(3)).unwrap();
//!
//! assert_eq!(updated, value!({"a": [1, {"b": 2, "c": 3}]}));
//! assert_eq!(doc, value!({"a": [1, {"b": 2}]}));
//! ```

pub mod codec;
pub mod diff;
pub mod patch;
pub mod path;
pub mod pointer;
pub mod resolve;
pub mod store;
pub mod value;

pub use diff::{DiffError, diff};
pub use patch::{Patch, PatchError, PatchOp, apply};
pub use path::{Path, PathError, Segment};
pub use pointer::{Pointer, PointerError};
pub use resolve::{get, get_or, remove, set};
pub use store::{ListenerHandle, Store};
pub use value::{Value, deep_clone, equals};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
