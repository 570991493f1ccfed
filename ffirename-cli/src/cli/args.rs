use clap::Parser;
use std::path::PathBuf;

use super::types::OutputFormat;

/// Copy FFI plate images into a sibling `_new` folder under normalized names
#[derive(Parser, Debug)]
#[command(name = "ffirename")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder to rename. You are prompted for one when it is omitted.
    #[arg(value_name = "FOLDER")]
    pub folder: Option<PathBuf>,

    /// Show what would be copied without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Format of the final report
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Only print errors and the final report
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the underlying error after a failed run
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file to use instead of <config dir>/ffirename/config.toml
    #[arg(long, value_name = "PATH", env = "FFIRENAME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}
