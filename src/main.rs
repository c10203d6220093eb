use clap::Parser;
use eyre::{Context, Result, eyre};
use keep_notes_export::sequential;
use keep_notes_export::utils::ExportConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Convert Google Keep notes from a Takeout export to Markdown files.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the exported .json note files
    /// (usually Takeout/Keep inside the unpacked archive).
    #[arg(value_name = "SOURCE_DIR")]
    source_dir: Option<PathBuf>,

    /// Directory to write markdown files.
    /// Defaults to ./keep-markdown if not set in config.
    #[arg(value_name = "TARGET_DIR")]
    target_dir: Option<PathBuf>,

    /// Path to a specific configuration file.
    /// Defaults to $XDG_CONFIG_HOME/keep-notes-export/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Suppress standard output (progress bar and per-file lines).
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Deserialize, Default)]
struct FileConfig {
    source_dir: Option<PathBuf>,
    target_dir: Option<PathBuf>,
}

fn load_file_config(explicit_path: Option<&Path>) -> Result<FileConfig> {
    let path = if let Some(p) = explicit_path {
        if !p.exists() {
            return Err(eyre!("Config file not found: {}", p.display()));
        }
        Some(p.to_path_buf())
    } else {
        // Search: XDG/OS config dir, then nothing
        dirs::config_dir()
            .map(|d| d.join("keep-notes-export/config.toml"))
            .filter(|p| p.exists())
    };

    match path {
        None => Ok(FileConfig::default()),
        Some(p) => {
            let content = fs::read_to_string(&p)
                .wrap_err_with(|| format!("Failed to read config: {}", p.display()))?;
            toml::from_str(&content)
                .wrap_err_with(|| format!("Failed to parse config: {}", p.display()))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load config file (CLI path > default path)
    let file_cfg = load_file_config(cli.config.as_deref())?;

    // 2. Resolve source_dir (CLI > Config)
    let source_dir = cli.source_dir.or(file_cfg.source_dir).ok_or_else(|| {
        eyre!("Could not determine source directory.\nPass SOURCE_DIR or set source_dir in config.toml.")
    })?;

    if !source_dir.is_dir() {
        return Err(eyre!(
            "Source directory not found: {}",
            source_dir.display()
        ));
    }

    // 3. Resolve target_dir (CLI > Config > Default)
    let target_dir = cli
        .target_dir
        .or(file_cfg.target_dir)
        .unwrap_or_else(|| PathBuf::from("keep-markdown"));

    // 4. Run the export
    sequential::execute(ExportConfig {
        source_dir,
        target_dir,
        quiet: cli.quiet,
    })
}
