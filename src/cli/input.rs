use std::{error::Error, io::Read, path::Path as FilePath};

use jsontree::{
    Path, Value,
    codec::{self, Format},
};

/// Loads a document from `file`, or from stdin when no file is given.
pub fn load_document(file: Option<&FilePath>) -> Result<Value, Box<dyn Error>> {
    match file {
        Some(path) => Ok(codec::decode_file(path, Some(Format::Json))?),
        None => read_from_stdin(),
    }
}

fn read_from_stdin() -> Result<Value, Box<dyn Error>> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(codec::decode(&buffer, Format::Json)?)
}

pub fn parse_value(raw: &str) -> Result<Value, Box<dyn Error>> {
    Ok(codec::decode(raw, Format::Json)?)
}

/// Parses a path argument. Bare words that are not JSON are taken as a
/// single key, so `get name` works as well as `get '"name"'`.
pub fn parse_path(raw: &str) -> Result<Path, Box<dyn Error>> {
    match codec::decode(raw, Format::Json) {
        Ok(value) => Ok(Path::try_from(&value)?),
        Err(_) => Ok(Path::from(raw)),
    }
}

pub fn print(value: &Value, indent: Option<usize>) -> Result<(), Box<dyn Error>> {
    println!("{}", codec::encode(value, Format::Json, indent)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use jsontree::{path, path::PathError};

    use super::*;

    #[test]
    fn parse_path_accepts_json_and_bare_keys() {
        let_assert!(Ok(p) = parse_path(r#"["a", 0, -1]"#));
        check!(p == path!["a", 0, -1]);

        let_assert!(Ok(p) = parse_path("3"));
        check!(p == Path::from(3));

        let_assert!(Ok(p) = parse_path("name"));
        check!(p == Path::from("name"));
    }

    #[test]
    fn parse_path_rejects_invalid_segments() {
        let_assert!(Err(err) = parse_path(r#"["a", 1.5]"#));
        let_assert!(Some(PathError::InvalidPath { .. }) = err.downcast_ref::<PathError>());
    }
}
