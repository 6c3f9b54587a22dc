use crate::core::relevance::DEFAULT_EMBED_FILES;
use crate::core::snapshot_generator::format_output;
use crate::core::tree_walker::walk_project;
use crate::domain::models::SnapshotConfig;
use crate::infra::file_system::{load_ignore_patterns, read_file_contents};
use crate::infra::logger::{prompt_root_dir_interactive, setup_logger};
use crate::infra::output::{DEFAULT_OUTPUT_FILE, write_output};
use clap::Parser;
use log::{debug, info};
use std::path::Path;

#[derive(Parser)]
#[command(name = "project-structure")]
#[command(
    about = "Write a markdown snapshot of a project's file tree and key files",
    long_about = None
)]
pub struct Cli {
    /// Project root; prompted for on stdin when omitted
    #[arg(long)]
    pub path: Option<String>,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Comma-separated file names whose content is embedded
    #[arg(long)]
    pub embed: Option<String>,

    #[arg(long)]
    pub stdout: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn embed_files(&self) -> Vec<String> {
        match &self.embed {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_EMBED_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    let root_dir = match &cli.path {
        Some(path) => path.clone(),
        None => prompt_root_dir_interactive()?,
    };

    let config = SnapshotConfig {
        root_dir,
        embed_files: cli.embed_files(),
        output_path: cli.output.clone(),
        to_stdout: cli.stdout,
    };
    debug!("Snapshot configuration: {:?}", config);

    let document = generate_snapshot(&config)?;

    info!("Writing output");
    write_output(&document, &config.output_path, config.to_stdout)
}

/// Builds the full markdown document in memory; nothing is written here.
pub fn generate_snapshot(config: &SnapshotConfig) -> anyhow::Result<String> {
    let root = Path::new(&config.root_dir);

    info!("Loading ignore patterns from {}", config.root_dir);
    let ignore_patterns = load_ignore_patterns(root)?;

    let output = walk_project(
        root,
        &ignore_patterns,
        &config.embed_files,
        read_file_contents,
    )?;

    Ok(format_output(&output))
}
