mod error;

use std::{fmt, ops::Add, slice};

pub use error::PathError;

use crate::value::Value;

/// Maximum nesting of a [`Path`] built from a dynamically typed [`Value`].
pub const MAX_PATH_DEPTH: usize = 128;

/// Maximum number of flattened segments [`crate::resolve::set`] follows.
pub const MAX_SET_SEGMENTS: usize = 1024;

/// Maximum number of `Null` elements [`crate::resolve::set`] inserts to
/// reach an index outside an array.
pub const MAX_ARRAY_PADDING: usize = 1 << 16;

/// A single addressing step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Member of an object.
    Key(String),

    /// Element of an array. Negative values count from the end.
    Index(i64),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{key:?}"),
            Segment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Address into a value tree.
///
/// A path is either a single segment or a sequence of paths, which may
/// themselves be nested. Only the flattened order of segments matters, so
/// `["a", [1, ["b"]]]` and `["a", 1, "b"]` address the same location. This
/// lets callers compose addresses with `+` without splicing vectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Path {
    Segment(Segment),
    Nested(Vec<Path>),
}

impl Path {
    /// The empty path, addressing the root itself.
    pub fn root() -> Self {
        Path::Nested(Vec::new())
    }

    /// Lazily yields every segment in depth-first order.
    ///
    /// The iterator borrows the path and can be restarted by calling
    /// `flatten` again.
    pub fn flatten(&self) -> Flatten<'_> {
        match self {
            Path::Segment(segment) => Flatten {
                single: Some(segment),
                stack: Vec::new(),
            },
            Path::Nested(children) => Flatten {
                single: None,
                stack: vec![children.iter()],
            },
        }
    }

    pub fn is_root(&self) -> bool {
        self.flatten().next().is_none()
    }

    pub fn segments(&self) -> Vec<Segment> {
        self.flatten().cloned().collect()
    }
}

/// Iterator returned by [`Path::flatten`].
#[derive(Debug, Clone)]
pub struct Flatten<'a> {
    single: Option<&'a Segment>,
    stack: Vec<slice::Iter<'a, Path>>,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = &'a Segment;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(segment) = self.single.take() {
            return Some(segment);
        }
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(Path::Segment(segment)) => return Some(segment),
                Some(Path::Nested(children)) => self.stack.push(children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl Add for Path {
    type Output = Path;

    fn add(self, rhs: Path) -> Path {
        match self {
            Path::Nested(mut children) => {
                children.push(rhs);
                Path::Nested(children)
            }
            segment => Path::Nested(vec![segment, rhs]),
        }
    }
}

impl Default for Path {
    fn default() -> Self {
        Path::root()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, segment) in self.flatten().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{segment}")?;
        }
        f.write_str("]")
    }
}

impl From<Segment> for Path {
    fn from(segment: Segment) -> Self {
        Path::Segment(segment)
    }
}

impl From<&str> for Path {
    fn from(key: &str) -> Self {
        Path::Segment(Segment::Key(key.to_string()))
    }
}

impl From<String> for Path {
    fn from(key: String) -> Self {
        Path::Segment(Segment::Key(key))
    }
}

impl From<i64> for Path {
    fn from(index: i64) -> Self {
        Path::Segment(Segment::Index(index))
    }
}

impl From<i32> for Path {
    fn from(index: i32) -> Self {
        Path::Segment(Segment::Index(index.into()))
    }
}

impl From<Vec<Path>> for Path {
    fn from(children: Vec<Path>) -> Self {
        Path::Nested(children)
    }
}

impl TryFrom<&Value> for Path {
    type Error = PathError;

    /// Interprets a dynamically typed value as a path: strings are keys,
    /// integral numbers are indices and arrays nest. Anything else is an
    /// invalid path element.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        path_from_value(value, 0)
    }
}

fn path_from_value(value: &Value, depth: usize) -> Result<Path, PathError> {
    if depth > MAX_PATH_DEPTH {
        return Err(PathError::TooDeep {
            limit: MAX_PATH_DEPTH,
        });
    }
    match value {
        Value::String(key) => Ok(Path::from(key.clone())),
        Value::Number(n) => n
            .as_i64()
            .map(Path::from)
            .ok_or_else(|| PathError::invalid_path(value)),
        Value::Array(items) => items
            .iter()
            .map(|item| path_from_value(item, depth + 1))
            .collect::<Result<Vec<_>, _>>()
            .map(Path::Nested),
        Value::Null | Value::Bool(_) | Value::Object(_) => Err(PathError::invalid_path(value)),
    }
}

/// Builds a [`Path`] from keys, indices and nested paths.
///
/// ```
/// use jsontree::{path, path::Segment};
///
/// let p = path!["a", 2, path!["b"]];
/// let flat: Vec<_> = p.flatten().cloned().collect();
/// assert_eq!(flat, vec![Segment::Key("a".into()), Segment::Index(2), Segment::Key("b".into())]);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::path::Path::root()
    };
    ($($segment:expr),+ $(,)?) => {
        $crate::path::Path::Nested(vec![$($crate::path::Path::from($segment)),+])
    };
}
