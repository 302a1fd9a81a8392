use crate::app::ignore_rules::IgnoreSpec;
use crate::app::models::{FileEntry, CONTEXT_DIR_NAME, DEFAULT_EXCLUDED_DIRS};
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::{DirEntry, WalkBuilder};
use pathdiff::diff_paths;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Walks a tree and collects files whose extension is in the target set.
pub struct Scanner {
    root: PathBuf,
    extensions: HashSet<String>,
    ignore_spec: Option<IgnoreSpec>,
    exclude_set: GlobSet,
}

impl Scanner {
    pub fn new(
        root: PathBuf,
        extensions: &[String],
        ignore_spec: Option<IgnoreSpec>,
        excludes: &[String],
    ) -> Result<Self> {
        Ok(Self {
            root,
            extensions: extensions.iter().cloned().collect(),
            ignore_spec,
            exclude_set: build_globset(excludes)?,
        })
    }

    /// Pre-order walk with directory pruning; returns paths sorted by their
    /// forward-slash form. Empty when nothing matched.
    pub fn collect(&self) -> Vec<FileEntry> {
        let prune = DirPruner {
            root: self.root.clone(),
            ignore_spec: self.ignore_spec.clone(),
            exclude_set: self.exclude_set.clone(),
        };

        // Only our own rules apply: no hidden-file, nested .gitignore or
        // global git exclude handling from the walker.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| !prune.should_prune(entry))
            .build();

        let mut entries = Vec::new();
        for result in walker {
            match result {
                Ok(entry) => {
                    if let Some(file) = self.process_entry(&entry) {
                        entries.push(file);
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        // Lossy display strings can collide; the real path breaks the tie.
        entries.sort_by(|a, b| {
            a.display
                .cmp(&b.display)
                .then_with(|| a.relative.cmp(&b.relative))
        });
        entries.dedup_by(|a, b| a.relative == b.relative);
        entries
    }

    fn process_entry(&self, entry: &DirEntry) -> Option<FileEntry> {
        if entry.depth() == 0 || !is_file_like(entry) {
            return None;
        }

        let relative = diff_paths(entry.path(), &self.root)?;
        let display = to_slash(&relative);

        if let Some(spec) = &self.ignore_spec {
            if spec.matches_file(&relative) {
                log::debug!("Ignored by .gitignore: {}", display);
                return None;
            }
        }
        if self.exclude_set.is_match(&display) {
            log::debug!("Excluded by pattern: {}", display);
            return None;
        }

        let name = entry.file_name().to_string_lossy();
        let ext = extension_of(&name)?;
        if !self.extensions.contains(ext) {
            return None;
        }

        Some(FileEntry { relative, display })
    }
}

/// Decides which directories are never descended into.
struct DirPruner {
    root: PathBuf,
    ignore_spec: Option<IgnoreSpec>,
    exclude_set: GlobSet,
}

impl DirPruner {
    fn should_prune(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return false;
        }

        let name = entry.file_name();
        if name == CONTEXT_DIR_NAME || DEFAULT_EXCLUDED_DIRS.iter().any(|d| name == *d) {
            log::debug!("Skipping excluded directory: {}", entry.path().display());
            return true;
        }

        let Some(relative) = diff_paths(entry.path(), &self.root) else {
            return false;
        };
        if let Some(spec) = &self.ignore_spec {
            if spec.matches_dir(&relative) {
                log::debug!("Skipping ignored directory: {}", to_slash(&relative));
                return true;
            }
        }
        self.exclude_set.is_match(to_slash(&relative))
    }
}

/// Regular files, plus symlinks that point at regular files.
fn is_file_like(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}

/// The text from the last `.` of the name onward, dot included.
///
/// Leading-dot names without another dot (`.bashrc`) and names ending in a
/// dot have no extension.
pub fn extension_of(name: &str) -> Option<&str> {
    let idx = name.rfind('.')?;
    if idx == 0 || idx + 1 == name.len() {
        return None;
    }
    Some(&name[idx..])
}

fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).context(format!("Invalid glob pattern: {}", pat))?);
    }
    Ok(builder.build()?)
}
