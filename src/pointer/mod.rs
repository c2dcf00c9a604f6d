mod error;
mod parser;

use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

pub use error::PointerError;

/// A parsed JSON Pointer (RFC 6901).
///
/// Tokens are stored unescaped. Whether a token addresses an array element or
/// an object member is only decided when the pointer is resolved against a
/// value, so `"0"` stays a plain string here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pointer {
    tokens: Vec<String>,
}

impl Pointer {
    /// Pointer to the whole document (`""`).
    pub fn root() -> Self {
        Pointer { tokens: Vec::new() }
    }

    pub fn new(tokens: Vec<String>) -> Self {
        Pointer { tokens }
    }

    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Pointer to the container holding the target, `None` for the root.
    pub fn parent(&self) -> Option<Pointer> {
        let (_, parent) = self.tokens.split_last()?;
        Some(Pointer {
            tokens: parent.to_vec(),
        })
    }

    /// Final reference token, `None` for the root.
    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.tokens.pop()
    }

    pub fn child(&self, token: impl Into<String>) -> Pointer {
        let mut child = self.clone();
        child.push(token);
        child
    }

    /// Returns true if `other` lies strictly below `self`.
    pub fn is_prefix_of(&self, other: &Pointer) -> bool {
        self.tokens.len() < other.tokens.len() && other.tokens.starts_with(&self.tokens)
    }
}

/// Parses a pointer string into its unescaped reference tokens.
pub fn parse(input: &str) -> Result<Vec<String>, PointerError> {
    match parser::parse_pointer(input) {
        Ok(("", tokens)) => Ok(tokens),
        Ok((rest, _)) => Err(error::trailing_input_error(input, rest)),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(error::convert_verbose_error(input, e))
        }
        Err(nom::Err::Incomplete(_)) => Err(PointerError::invalid_syntax(
            input.len(),
            "unexpected end of input",
        )),
    }
}

/// Formats reference tokens as a pointer string. No tokens yields `""`.
pub fn format<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for token in tokens {
        out.push('/');
        out.push_str(&escape(token.as_ref()));
    }
    out
}

/// Escapes a single reference token. `~` is escaped before `/` so the
/// produced `~1` is never escaped again.
pub fn escape(token: &str) -> Cow<'_, str> {
    if !token.contains(['~', '/']) {
        return Cow::Borrowed(token);
    }
    Cow::Owned(token.replace('~', "~0").replace('/', "~1"))
}

/// Interprets a reference token as an array index.
///
/// Only ASCII digits without a leading zero are accepted; `-` and signed or
/// fractional numbers are not indices.
pub fn array_index(token: &str) -> Option<usize> {
    let digits_only = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
    let leading_zero = token.len() > 1 && token.starts_with('0');
    if !digits_only || leading_zero {
        return None;
    }
    token.parse().ok()
}

impl FromStr for Pointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Pointer::new)
    }
}

impl TryFrom<&str> for Pointer {
    type Error = PointerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(&self.tokens))
    }
}

impl Serialize for Pointer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pointer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
