use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    pub root_dir: String,
    pub embed_files: Vec<String>,
    pub output_path: String,
    pub to_stdout: bool,
}

/// A file whose full content is inlined into the snapshot.
#[derive(Debug, Clone)]
pub struct EmbeddedFile {
    pub name: String,
    pub relative_path: PathBuf,
    pub language: &'static str,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct SnapshotOutput {
    pub root_dir: String,
    pub tree: String,
    pub file_contents: String,
    pub embedded_count: usize,
}
