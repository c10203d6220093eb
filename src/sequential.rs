use crate::importer::KeepNote;
use crate::renderer;
use crate::utils::{ExportConfig, ProcessResult};
use eyre::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// The main entry point for the export logic.
/// Ensures the target directory exists, then converts each note file in turn.
/// A failing file is reported and skipped; it never stops the batch.
pub fn execute(config: ExportConfig) -> Result<()> {
    fs::create_dir_all(&config.target_dir).wrap_err_with(|| {
        format!(
            "Failed to create target directory: {}",
            config.target_dir.display()
        )
    })?;

    let files = collect_note_files(&config.source_dir)?;

    let pb = if config.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)",
            )
            .unwrap()
            .progress_chars("=>-"),
        );
        bar.println(format!("Found {} notes.", files.len()));
        bar
    };

    let mut count_created = 0usize;
    let mut count_updated = 0usize;
    let mut count_errors = 0usize;

    for (name, path) in &files {
        let stem = name.strip_suffix(".json").unwrap_or(name);
        match convert_note(path, stem, &config) {
            Ok(result) => {
                match result {
                    ProcessResult::Created => count_created += 1,
                    ProcessResult::Updated => count_updated += 1,
                }
                if !config.quiet {
                    let tag = match result {
                        ProcessResult::Created => "Created:",
                        ProcessResult::Updated => "Updated:",
                    };
                    pb.println(format!("{}  {}.md", tag, stem));
                }
            }
            Err(e) => {
                count_errors += 1;
                pb.println(format!("Error [{}]: {:#}", name, e));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    if !config.quiet {
        let mut summary = format!("Done. {} created, {} updated.", count_created, count_updated);
        if count_errors > 0 {
            summary.push_str(&format!(" Completed with {} error(s).", count_errors));
        }
        eprintln!("{}", summary);
    }

    Ok(())
}

/// List the `.json` note files of the source directory, non-recursively.
/// Directory order is platform-dependent; sorted by name for stable output.
fn collect_note_files(source_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(source_dir)
        .wrap_err_with(|| format!("Failed to read source directory: {}", source_dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.wrap_err("Failed to read directory entry")?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".json") || !entry.path().is_file() {
            continue;
        }
        files.push((name, entry.path()));
    }
    files.sort();
    Ok(files)
}

/// Convert a single note file, overwriting any previous output.
/// Every failure mode (vanished file, bad JSON, unrenderable field, write
/// error) surfaces here as the file's result.
fn convert_note(path: &Path, stem: &str, config: &ExportConfig) -> Result<ProcessResult> {
    let out_path = config.target_dir.join(format!("{}.md", stem));
    let result = if out_path.exists() {
        ProcessResult::Updated
    } else {
        ProcessResult::Created
    };

    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read: {}", path.display()))?;
    let note: KeepNote = serde_json::from_str(&raw).wrap_err("Failed to decode note JSON")?;
    let md = renderer::render_note(&note)?;
    fs::write(&out_path, md)
        .wrap_err_with(|| format!("Failed to write: {}", out_path.display()))?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_mixed_entries_when_collecting_then_only_json_files_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("upper.JSON"), "{}").unwrap();
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let files = collect_note_files(dir.path()).unwrap();

        let names: Vec<&str> = files.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn given_missing_source_dir_when_collecting_then_errors() {
        assert!(collect_note_files(Path::new("/nonexistent/keep")).is_err());
    }
}
