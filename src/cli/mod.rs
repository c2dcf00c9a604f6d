pub mod diff;
pub mod input;
pub mod query;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "jsontree", version, about)]
pub struct Cli {
    /// Indentation width of the printed JSON; compact output when omitted
    #[arg(long, global = true, env = "JSONTREE_INDENT")]
    pub indent: Option<usize>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the value found at a path
    Get(GetArgs),

    /// Print the document with a value set at a path
    Set(SetArgs),

    /// Print the document with the value at a path removed
    Remove(RemoveArgs),

    /// Print the JSON Patch that turns one document into another
    Diff(DiffArgs),

    /// Apply a JSON Patch to a document
    Patch(PatchArgs),
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Path as JSON: a key (`'"name"'`), an index (`-1`) or a nested
    /// array of paths (`'["items", 0, "id"]'`)
    pub path: String,

    /// JSON document; read from stdin when omitted
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Path as JSON, see `get`
    pub path: String,

    /// New value as JSON
    pub value: String,

    /// JSON document; read from stdin when omitted
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Path as JSON, see `get`
    pub path: String,

    /// JSON document; read from stdin when omitted
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Source document
    pub file1: PathBuf,

    /// Destination document
    pub file2: PathBuf,
}

#[derive(Debug, Args)]
pub struct PatchArgs {
    /// File holding the array of patch operations
    pub patch: PathBuf,

    /// JSON document; read from stdin when omitted
    pub file: Option<PathBuf>,
}
