mod cli;

use std::error::Error;

use clap::Parser;
use cli::{Cli, Command};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let indent = cli.indent;

    let result = match cli.cmd {
        Command::Get(args) => cli::query::handle_get_command(args, indent),
        Command::Set(args) => cli::query::handle_set_command(args, indent),
        Command::Remove(args) => cli::query::handle_remove_command(args, indent),
        Command::Diff(args) => cli::diff::handle_diff_command(args, indent),
        Command::Patch(args) => cli::diff::handle_patch_command(args, indent),
    };

    result.map_err(|e| {
        eprintln!("Error: {}", e);
        e
    })
}
