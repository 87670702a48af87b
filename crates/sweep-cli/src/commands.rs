use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "sweep")]
#[command(about = "Empty a folder, with dry-run and backup modes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Delete or relocate every immediate child of a folder
    Clean(CleanArgs),
    /// Show the recorded operation history
    History {
        /// Only show the most recent N rows
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Folder whose children will be removed
    pub folder: String,

    /// Preview what would be deleted without touching anything
    #[arg(long, conflicts_with = "backup_dir")]
    pub dry_run: bool,

    /// Move entries into this directory instead of deleting them
    #[arg(long, value_name = "DIR")]
    pub backup_dir: Option<String>,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
