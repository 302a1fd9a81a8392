use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-repository working directory holding the local config and the dump.
pub const CONTEXT_DIR_NAME: &str = ".LLMContext";
pub const DUMP_FILE_NAME: &str = "repository_dump.txt";
pub const LOCAL_CONFIG_NAME: &str = "config.json";
pub const GLOBAL_CONFIG_NAME: &str = "config.json";

/// Directories never descended into, whatever the ignore rules say.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] =
    &[".git", ".idea", "__pycache__", "node_modules", ".venv", "venv"];

/// The extension set for one language, e.g. `{"extensions": [".rs"]}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// The configuration in effect for a run.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub language: LanguageConfig,
    /// Set when the language was picked from the catalog during this run.
    pub selected_language: Option<String>,
}

impl ResolvedConfig {
    pub fn was_interactive(&self) -> bool {
        self.selected_language.is_some()
    }
}

/// A collected file, relative to the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub relative: PathBuf,
    /// `relative` with forward-slash separators; the sort key.
    pub display: String,
}

/// What the dump writer managed to do.
#[derive(Debug)]
pub struct DumpReport {
    pub output_path: PathBuf,
    pub listed: usize,
    pub written: usize,
    pub failed: Vec<String>,
}

/// How a run ended when nothing went wrong.
#[derive(Debug)]
pub enum RunOutcome {
    NothingToDo,
    Dumped(DumpReport),
}
