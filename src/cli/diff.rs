use std::error::Error;

use jsontree::{Patch, apply, diff};

use crate::cli::{
    DiffArgs, PatchArgs,
    input::{load_document, print},
};

pub fn handle_diff_command(args: DiffArgs, indent: Option<usize>) -> Result<(), Box<dyn Error>> {
    let file1 = load_document(Some(args.file1.as_path()))?;
    let file2 = load_document(Some(args.file2.as_path()))?;

    let result = diff(&file1, &file2)?;

    print(&result.to_value(), indent)
}

pub fn handle_patch_command(args: PatchArgs, indent: Option<usize>) -> Result<(), Box<dyn Error>> {
    let patch = Patch::try_from(&load_document(Some(args.patch.as_path()))?)?;
    let doc = load_document(args.file.as_deref())?;

    print(&apply(&doc, &patch)?, indent)
}
