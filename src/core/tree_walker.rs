use crate::core::relevance::{
    EXCLUDED_DIR, EXCLUDED_FILE, is_relevant_file, language_for, should_embed, should_ignore,
};
use crate::core::snapshot_generator::format_embedded_file;
use crate::domain::models::{EmbeddedFile, SnapshotOutput};
use crate::infra::file_system::{DirEntryInfo, list_directory};
use log::{debug, info};
use std::path::{Path, PathBuf};

const INDENT: &str = "│   ";
const BRANCH: &str = "├── ";
const CORNER: &str = "└── ";

/// Walks `root` top-down, filling the tree buffer and the embedded-content buffer.
///
/// Every directory emits its heading and relevant files before any of its
/// subdirectories are visited. `read_file` supplies the content of embedded files.
pub fn walk_project(
    root: &Path,
    ignore_patterns: &[String],
    embed_files: &[String],
    read_file: impl Fn(&Path) -> anyhow::Result<String>,
) -> anyhow::Result<SnapshotOutput> {
    info!("Walking project tree at: {}", root.display());

    if !root.is_dir() {
        anyhow::bail!("{} is not a readable directory", root.display());
    }

    let mut walker = TreeWalker {
        root,
        ignore_patterns,
        embed_files,
        read_file: &read_file,
        output: SnapshotOutput {
            root_dir: root.display().to_string(),
            ..SnapshotOutput::default()
        },
    };
    walker.visit(root)?;

    info!(
        "Walk finished with {} embedded files",
        walker.output.embedded_count
    );
    Ok(walker.output)
}

struct TreeWalker<'a, F> {
    root: &'a Path,
    ignore_patterns: &'a [String],
    embed_files: &'a [String],
    read_file: &'a F,
    output: SnapshotOutput,
}

impl<F> TreeWalker<'_, F>
where
    F: Fn(&Path) -> anyhow::Result<String>,
{
    fn visit(&mut self, dir: &Path) -> anyhow::Result<()> {
        let (dirs, files): (Vec<DirEntryInfo>, Vec<DirEntryInfo>) =
            list_directory(dir)?.into_iter().partition(|e| e.is_dir);

        let dirs: Vec<DirEntryInfo> = dirs
            .into_iter()
            .filter(|d| d.name != EXCLUDED_DIR && !self.is_ignored(&d.path))
            .collect();
        let relevant_files: Vec<DirEntryInfo> = files
            .into_iter()
            .filter(|f| f.name != EXCLUDED_FILE && !self.is_ignored(&f.path))
            .filter(|f| is_relevant_file(&f.name))
            .collect();

        if !relevant_files.is_empty() || !dirs.is_empty() {
            let depth = self.depth_of(dir);
            self.push_line(&format!(
                "{}{}{}/",
                INDENT.repeat(depth),
                BRANCH,
                display_name(dir)
            ));

            let last = relevant_files.len().saturating_sub(1);
            for (idx, file) in relevant_files.iter().enumerate() {
                let indent = if idx == last {
                    format!("{}{}", INDENT.repeat(depth), CORNER)
                } else {
                    INDENT.repeat(depth + 1)
                };
                self.push_line(&format!("{}{}", indent, file.name));

                if should_embed(&file.name, self.embed_files) {
                    self.embed(file)?;
                }
            }
        } else {
            debug!("Nothing to list in {}", dir.display());
        }

        for sub in dirs.iter().filter(|d| !d.is_symlink) {
            self.visit(&sub.path)?;
        }
        Ok(())
    }

    fn embed(&mut self, file: &DirEntryInfo) -> anyhow::Result<()> {
        let content = (self.read_file)(&file.path)?;
        let embedded = EmbeddedFile {
            name: file.name.clone(),
            relative_path: self.relative_path(&file.path),
            language: language_for(&file.name),
            content,
        };

        debug!("Embedding {}", embedded.relative_path.display());
        self.output
            .file_contents
            .push_str(&format_embedded_file(&embedded));
        self.output.embedded_count += 1;
        Ok(())
    }

    fn is_ignored(&self, path: &Path) -> bool {
        should_ignore(&path.to_string_lossy(), self.ignore_patterns)
    }

    fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(self.root).unwrap_or(path).to_path_buf()
    }

    fn depth_of(&self, dir: &Path) -> usize {
        self.relative_path(dir).components().count()
    }

    fn push_line(&mut self, line: &str) {
        self.output.tree.push_str(line);
        self.output.tree.push('\n');
    }
}

fn display_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| dir.display().to_string())
}
