use anyhow::Context;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub const DEFAULT_OUTPUT_FILE: &str = "project_structure.md";

pub trait OutputWriter {
    fn write(&self, content: &str) -> anyhow::Result<()>;

    /// Where the document ended up, for the confirmation line.
    fn destination(&self) -> String;
}

pub struct FileWriter {
    path: String,
}

impl FileWriter {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing output to file: {}", self.path);
        fs::write(Path::new(&self.path), content)
            .with_context(|| format!("failed to write {}", self.path))?;
        info!("Output written to file: {}", self.path);
        Ok(())
    }

    fn destination(&self) -> String {
        self.path.clone()
    }
}

pub struct ConsoleWriter;

impl OutputWriter for ConsoleWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing output to console");
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn destination(&self) -> String {
        "stdout".to_string()
    }
}

pub fn create_writer(output_path: &str, to_stdout: bool) -> Box<dyn OutputWriter> {
    if to_stdout {
        return Box::new(ConsoleWriter) as Box<dyn OutputWriter>;
    }

    Box::new(FileWriter::new(output_path.to_string())) as Box<dyn OutputWriter>
}

/// Writes the whole document in one call, then confirms on stderr.
pub fn write_output(
    formatted_content: &str,
    output_path: &str,
    to_stdout: bool,
) -> anyhow::Result<()> {
    let writer = create_writer(output_path, to_stdout);
    writer.write(formatted_content)?;

    // stdout may be carrying the document itself
    let mut stderr = io::stderr();
    stderr.execute(SetForegroundColor(Color::Green))?;
    writeln!(
        stderr,
        "Project structure and component contents have been saved to {}",
        writer.destination()
    )?;
    stderr.execute(ResetColor)?;

    Ok(())
}
