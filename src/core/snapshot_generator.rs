use crate::domain::models::{EmbeddedFile, SnapshotOutput};
use log::debug;

const SEPARATOR_WIDTH: usize = 40;

pub fn format_embedded_file(file: &EmbeddedFile) -> String {
    format!(
        "## {}\nPath: `{}`\n\n```{}\n{}\n```\n\n{}\n",
        file.name,
        file.relative_path.display(),
        file.language,
        file.content,
        "-".repeat(SEPARATOR_WIDTH)
    )
}

/// Concatenates the tree section and, when anything was embedded, the content section.
pub fn format_output(output: &SnapshotOutput) -> String {
    debug!(
        "Formatting snapshot with {} embedded files",
        output.embedded_count
    );
    let mut result = String::new();

    result.push_str(&format!("# Project Structure for `{}`\n\n", output.root_dir));
    result.push_str(&output.tree);

    if !output.file_contents.is_empty() {
        result.push_str("\n# File Content\n\n");
        result.push_str(&output.file_contents);
    }

    result
}
