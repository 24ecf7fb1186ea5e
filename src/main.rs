//! dunemate CLI - developer companion for Dune workspaces
//!
//! Usage: dunemate <COMMAND>
//!
//! Commands:
//!   switch   Print the counterpart of an implementation or interface file
//!   alias    Register a directory's alias in the workspace root manifest
//!   promote  List and apply pending dune promotions

mod cli;
mod commands;
mod ui;

use clap::Parser;

use cli::{Cli, Commands};
use dunemate::DunemateError;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let result = match cli.command {
        Commands::Switch { file } => commands::cmd_switch(file, json),
        Commands::Alias { dir, name } => commands::cmd_alias(dir, name, json, cli.verbose),
        Commands::Promote { target, all, list } => {
            commands::cmd_promote(target, all, list, json, cli.verbose)
        }
    };

    if let Err(err) = result {
        // A cancelled prompt mutated nothing; report it without failing.
        if matches!(
            err.downcast_ref::<DunemateError>(),
            Some(DunemateError::Aborted)
        ) {
            ui::info("Aborted.", json);
            return;
        }
        ui::print_error(&err, json);
        std::process::exit(1);
    }
}
