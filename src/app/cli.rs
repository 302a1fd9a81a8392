use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Dump a repository's source files and tree into one file for LLM context"
)]
pub struct Cli {
    /// Repository root to scan (defaults to the current directory)
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Directory holding the global config.json language catalog
    #[arg(long, value_name = "DIR", env = "LLM_CONTEXT_HOME")]
    pub install_dir: Option<PathBuf>,

    /// Extra glob patterns for files or directories to leave out (e.g. 'tests/**')
    #[arg(long, num_args = 1..)]
    pub exclude: Option<Vec<String>>,
}
