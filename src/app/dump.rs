use crate::app::models::{DumpReport, FileEntry};
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub const STRUCTURE_HEADER: &str = "Project Structure:";
pub const SEPARATOR_WIDTH: usize = 80;

/// Writes the tree followed by every collected file to `output_path`.
///
/// A file that cannot be read is logged and left out of the body; it still
/// counts towards `listed`. Failing to write the dump itself is an error.
pub fn write_dump(
    output_path: &Path,
    entries: &[FileEntry],
    root: &Path,
    tree: &str,
) -> Result<DumpReport> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory {:?}", parent))?;
    }

    let file = File::create(output_path)
        .context(format!("Failed to create dump file {:?}", output_path))?;
    let mut out = BufWriter::new(file);

    write!(
        out,
        "{}\n\n{}\n\n{}\n\n",
        STRUCTURE_HEADER,
        tree,
        "=".repeat(SEPARATOR_WIDTH)
    )?;

    let mut written = 0;
    let mut failed = Vec::new();
    for entry in entries {
        log::info!("  Adding: {}", entry.display);
        let bytes = match fs::read(root.join(&entry.relative)) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("    - Could not read file {}: {}", entry.display, err);
                failed.push(entry.display.clone());
                continue;
            }
        };
        write_file_block(&mut out, &entry.display, &bytes)?;
        written += 1;
    }

    out.flush()
        .context(format!("Failed to write dump file {:?}", output_path))?;

    Ok(DumpReport {
        output_path: output_path.to_path_buf(),
        listed: entries.len(),
        written,
        failed,
    })
}

fn write_file_block(out: &mut impl Write, display: &str, bytes: &[u8]) -> Result<()> {
    let content = String::from_utf8_lossy(bytes);
    write!(out, "--- File: {} ---\n\n{}\n\n", display, content)
        .context(format!("Failed to write contents of {}", display))
}
