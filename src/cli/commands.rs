//! CLI command definitions

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dashpatch")]
#[command(
    about = "Insert the staking status banners into DashboardScreen.kt",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Agent project root (default: DASHPATCH_ROOT, then current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Show what would change without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Insert even if the block is already present at the insertion point
    #[arg(long)]
    pub force: bool,

    /// Keep a timestamped copy of the original next to the target
    #[arg(long)]
    pub backup: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
