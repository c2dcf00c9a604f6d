use std::error::Error;

use crate::cli::{
    GetArgs, RemoveArgs, SetArgs,
    input::{load_document, parse_path, parse_value, print},
};

pub fn handle_get_command(args: GetArgs, indent: Option<usize>) -> Result<(), Box<dyn Error>> {
    let doc = load_document(args.file.as_deref())?;
    let path = parse_path(&args.path)?;

    let value = jsontree::get(&doc, &path).ok_or_else(|| format!("No value at path {path}"))?;
    print(value, indent)
}

pub fn handle_set_command(args: SetArgs, indent: Option<usize>) -> Result<(), Box<dyn Error>> {
    let doc = load_document(args.file.as_deref())?;
    let path = parse_path(&args.path)?;
    let value = parse_value(&args.value)?;

    print(&jsontree::set(&doc, &path, value)?, indent)
}

pub fn handle_remove_command(args: RemoveArgs, indent: Option<usize>) -> Result<(), Box<dyn Error>> {
    let doc = load_document(args.file.as_deref())?;
    let path = parse_path(&args.path)?;

    print(&jsontree::remove(&doc, &path), indent)
}
