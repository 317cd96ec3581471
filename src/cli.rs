use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::utils;

#[derive(Parser)]
#[command(
    name = "syscleaner",
    about = "A system cleanup tool — reclaim space from temp folders, caches and logs",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report what would be cleaned (dry-run, no deletion)
    Scan(TargetArgs),

    /// Clean junk files (requires --confirm to actually delete)
    Clean {
        /// Actually delete files. Without this flag, behaves like scan.
        #[arg(long)]
        confirm: bool,

        #[command(flatten)]
        targets: TargetArgs,
    },

    /// List cleanup categories and the directories they resolve to
    Categories,

    /// Show the config file location and contents
    Config {
        /// Write the default config if none exists yet
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args, Clone, Default)]
pub struct TargetArgs {
    /// Only clean these categories (repeatable). Defaults to the configured set.
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Clean this directory instead of categories (repeatable)
    #[arg(long = "path", value_name = "DIR")]
    pub paths: Vec<PathBuf>,

    /// Minimum file age (e.g. "7d", "12h", "0" for any age)
    #[arg(long, value_parser = utils::parse_age)]
    pub max_age: Option<Duration>,

    /// List every failed file, not just the counts
    #[arg(long)]
    pub show_errors: bool,
}
