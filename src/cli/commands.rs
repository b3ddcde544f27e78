//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clialgo")]
#[command(about = "Tag, filter and export CS2040C notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding your .txt notes and .cpp files
    /// (default: $CLIALGO_ROOT, then the current directory)
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Export folder for this session, relative to the root
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<String>,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
