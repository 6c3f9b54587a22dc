use anyhow::Context;
use log::{debug, info};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const IGNORE_FILE: &str = ".gitignore";

/// A single child of a listed directory.
#[derive(Debug, Clone)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_symlink: bool,
}

/// Reads `<root>/.gitignore` into literal substrings, in file order.
///
/// A missing file yields no patterns. Blank lines and lines starting with `#` are
/// skipped; the comment check runs before trimming, so `  #keep` stays as `#keep`.
pub fn load_ignore_patterns(root: &Path) -> anyhow::Result<Vec<String>> {
    let ignore_path = root.join(IGNORE_FILE);
    let mut patterns = Vec::new();

    if !ignore_path.exists() {
        debug!("No {} file found at: {}", IGNORE_FILE, ignore_path.display());
        return Ok(patterns);
    }

    debug!("Parsing {} file at: {}", IGNORE_FILE, ignore_path.display());
    let file = fs::File::open(&ignore_path)
        .with_context(|| format!("failed to open {}", ignore_path.display()))?;
    let reader = BufReader::new(file);

    for line in reader.lines() {
        let line = line.with_context(|| format!("failed to read {}", ignore_path.display()))?;
        let trimmed = line.trim();

        if !trimmed.is_empty() && !line.starts_with('#') {
            patterns.push(trimmed.to_string());
        }
    }

    info!("Loaded {} patterns from {}", patterns.len(), IGNORE_FILE);
    Ok(patterns)
}

/// Lists the immediate children of `dir`, sorted by file name.
pub fn list_directory(dir: &Path) -> anyhow::Result<Vec<DirEntryInfo>> {
    let mut entries = Vec::new();

    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        let is_symlink = entry.path_is_symlink();
        let is_dir = if is_symlink {
            entry.path().is_dir()
        } else {
            entry.file_type().is_dir()
        };

        entries.push(DirEntryInfo {
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.into_path(),
            is_dir,
            is_symlink,
        });
    }

    debug!("Listed {} entries in {}", entries.len(), dir.display());
    Ok(entries)
}

pub fn read_file_contents(path: &Path) -> anyhow::Result<String> {
    debug!("Reading file contents: {}", path.display());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!("Read {} bytes from file", contents.len());
    Ok(contents)
}
