//! Text encoding of values.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::value::Value;

/// Indentation used by [`encode_file`] when none is given.
pub const DEFAULT_FILE_INDENT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
}

impl Format {
    /// Detects the format from the file suffix.
    pub fn from_path(path: &Path) -> Result<Self, CodecError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            _ => Err(CodecError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Cannot determine the format of '{}' from its suffix", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encodes `value`. Without `indent` the output is compact.
pub fn encode(value: &Value, format: Format, indent: Option<usize>) -> Result<String, CodecError> {
    match format {
        Format::Json => encode_json(value, indent),
    }
}

fn encode_json(value: &Value, indent: Option<usize>) -> Result<String, CodecError> {
    let Some(width) = indent else {
        return Ok(serde_json::to_string(value)?);
    };

    let spaces = " ".repeat(width);
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(spaces.as_bytes()));
    value.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(|err| CodecError::Io(std::io::Error::other(err)))
}

pub fn decode(text: &str, format: Format) -> Result<Value, CodecError> {
    match format {
        Format::Json => Ok(serde_json::from_str(text)?),
    }
}

/// Writes `value` to `path`. The format is taken from the suffix unless
/// given.
pub fn encode_file(
    value: &Value,
    path: &Path,
    format: Option<Format>,
    indent: Option<usize>,
) -> Result<(), CodecError> {
    let format = match format {
        Some(format) => format,
        None => Format::from_path(path)?,
    };
    let text = encode(value, format, indent)?;
    fs::write(path, text)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

pub fn decode_file(path: &Path, format: Option<Format>) -> Result<Value, CodecError> {
    let format = match format {
        Some(format) => format,
        None => Format::from_path(path)?,
    };
    let text = fs::read_to_string(path)?;
    decode(&text, format)
}
