use anyhow::{Context, Result};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::Path;

pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Compiled patterns from the `.gitignore` at the scan root.
///
/// Paths handed to the matchers are relative to that root.
#[derive(Debug, Clone)]
pub struct IgnoreSpec {
    matcher: Gitignore,
}

impl IgnoreSpec {
    /// Compiles gitignore-syntax lines. Bad lines are logged and skipped.
    pub fn from_lines<'a>(root: &Path, lines: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut builder = GitignoreBuilder::new(root);
        for line in lines {
            if let Err(err) = builder.add_line(None, line) {
                log::warn!("Skipping invalid ignore pattern {:?}: {}", line, err);
            }
        }
        let matcher = builder.build().context("Failed to compile ignore patterns")?;
        Ok(Self { matcher })
    }

    /// Directory-form test: only patterns that may match a directory apply.
    pub fn matches_dir(&self, relative: &Path) -> bool {
        self.matcher.matched(relative, true).is_ignore()
    }

    /// File test, also true when one of the file's parent directories is ignored.
    pub fn matches_file(&self, relative: &Path) -> bool {
        self.matcher
            .matched_path_or_any_parents(relative, false)
            .is_ignore()
    }

    pub fn pattern_count(&self) -> usize {
        self.matcher.num_ignores() as usize + self.matcher.num_whitelists() as usize
    }
}

/// Loads `<root>/.gitignore` if there is one. Nested ignore files are not read.
pub fn load_ignore_spec(root: &Path) -> Result<Option<IgnoreSpec>> {
    let path = root.join(IGNORE_FILE_NAME);
    if !path.is_file() {
        log::info!("No .gitignore found in the current directory.");
        return Ok(None);
    }

    log::info!("Found .gitignore at: {}", path.display());
    let bytes = fs::read(&path).context(format!("Failed to read {:?}", path))?;
    let content = String::from_utf8_lossy(&bytes);
    let spec = IgnoreSpec::from_lines(root, content.lines())?;
    log::debug!("Compiled {} ignore patterns", spec.pattern_count());
    Ok(Some(spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn spec(lines: &[&str]) -> IgnoreSpec {
        IgnoreSpec::from_lines(Path::new("/repo"), lines.iter().copied()).unwrap()
    }

    #[test]
    fn absent_file_means_no_spec() {
        let dir = tempdir().unwrap();
        assert!(load_ignore_spec(dir.path()).unwrap().is_none());
    }

    #[test]
    fn loads_patterns_from_root_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "# build output\ntarget/\n*.log\n").unwrap();

        let spec = load_ignore_spec(dir.path()).unwrap().unwrap();
        assert!(spec.matches_dir(Path::new("target")));
        assert!(spec.matches_file(Path::new("app.log")));
        assert!(!spec.matches_file(Path::new("main.rs")));
    }

    #[test]
    fn trailing_slash_only_matches_directories() {
        let spec = spec(&["sub/"]);
        assert!(spec.matches_dir(Path::new("sub")));
        assert!(!spec.matches_file(Path::new("sub")));
        assert!(spec.matches_file(Path::new("sub/c.rs")));
    }

    #[test]
    fn later_negation_reincludes() {
        let spec = spec(&["*.rs", "!keep.rs"]);
        assert!(spec.matches_file(Path::new("drop.rs")));
        assert!(!spec.matches_file(Path::new("keep.rs")));
        assert!(!spec.matches_file(Path::new("nested/keep.rs")));
    }

    #[test]
    fn order_matters() {
        let spec = spec(&["!keep.rs", "*.rs"]);
        assert!(spec.matches_file(Path::new("keep.rs")));
    }

    #[test]
    fn anchored_pattern_only_matches_at_root() {
        let spec = spec(&["/build"]);
        assert!(spec.matches_dir(Path::new("build")));
        assert!(!spec.matches_dir(Path::new("src/build")));
    }
}
