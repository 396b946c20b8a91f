//! `markdown` command implementation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use apidoc_config::{CliSettings, Config};
use apidoc_documenter::{Documenter, DocsSummary};
use apidoc_markup::MarkdownBackend;
use apidoc_model::discover_api_json_files;
use apidoc_output::FsPageWriter;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the markdown command.
#[derive(Args)]
pub(crate) struct MarkdownArgs {
    /// Path to configuration file (default: auto-discover apidoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing `*.api.json` files. Overrides config.
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Directory for generated pages. Overrides config.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl MarkdownArgs {
    /// Execute the markdown command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, no input is found, or
    /// page generation fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            input_dir: self.input_dir,
            output_dir: self.output_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Using config: {}", path.display()));
        }

        let summary = generate(&config, output)?;

        output.success(&format!(
            "Wrote {} pages for {} packages to {}",
            summary.pages,
            summary.packages,
            config.output_resolved.dir.display()
        ));
        if summary.skipped > 0 {
            output.warning(&format!(
                "Skipped {} items with unsupported kinds",
                summary.skipped
            ));
        }
        Ok(())
    }
}

/// Load every configured API file and write Markdown pages to the output directory.
fn generate(config: &Config, output: &Output) -> Result<DocsSummary, CliError> {
    let files = collect_input_files(&config.input_resolved.dir, &config.input_resolved.files)?;
    if files.is_empty() {
        return Err(CliError::Validation(format!(
            "No *.api.json files found in {}",
            config.input_resolved.dir.display()
        )));
    }

    let mut documenter = Documenter::new();
    for path in &files {
        output.info(&format!("Reading {}", path.display()));
        documenter.load_api_json_file(path)?;
    }

    let mut writer = FsPageWriter::<MarkdownBackend>::new(&config.output_resolved.dir);
    Ok(documenter.write_docs(&mut writer)?)
}

/// Discovered files come first, then explicit files not already discovered.
///
/// Paths are compared after canonicalization, so `input/a.api.json` and an
/// absolute path to the same file count once.
fn collect_input_files(dir: &Path, extra: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = discover_api_json_files(dir)?;
    let mut seen: HashSet<PathBuf> = files.iter().map(|path| file_identity(path)).collect();
    for path in extra {
        if seen.insert(file_identity(path)) {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// Canonical path, or the path as given if it can't be resolved.
fn file_identity(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
