use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dunemate::AliasKind;

/// dunemate - developer companion for Dune workspaces
#[derive(Parser, Debug)]
#[command(name = "dunemate")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'dunemate alias' or 'dunemate promote' without arguments for interactive pickers.")]
pub struct Cli {
    /// Output line-delimited JSON events
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the counterpart of an implementation or interface file
    Switch {
        /// File to resolve (.ml, .mli or _intf.ml)
        file: Option<PathBuf>,
    },

    /// Register a directory's alias in the workspace root manifest
    Alias {
        /// Directory to register (picked interactively when omitted)
        dir: Option<PathBuf>,

        /// Alias kind to register the directory under
        #[arg(short, long, value_enum)]
        name: Option<AliasKind>,
    },

    /// List and apply pending dune promotions
    Promote {
        /// Apply the promotion for this path only
        target: Option<PathBuf>,

        /// Apply every pending promotion
        #[arg(long, conflicts_with = "target")]
        all: bool,

        /// Only list pending promotions
        #[arg(long, conflicts_with_all = ["target", "all"])]
        list: bool,
    },
}
