use chrono::{DateTime, Local};
use eyre::{Result, eyre};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use std::path::PathBuf;

/// Configuration required to run the export process.
/// This decouples the logic from how the arguments were parsed (CLI/Config file).
#[derive(Clone)]
pub struct ExportConfig {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    pub quiet: bool,
}

/// Outcome of converting a single note file.
#[derive(Clone, Copy)]
pub enum ProcessResult {
    Created,
    Updated,
}

lazy_static! {
    static ref URL_REGEX: Regex =
        Regex::new(r"https?://[^\s]+").expect("Failed to compile URL regex");
}

/// Format a microsecond epoch timestamp as local `YYYY-MM-DD HH:MM:SS`.
///
/// Sub-second precision is truncated. Values far enough outside the
/// representable range are an error, reported per-file by the batch loop.
pub fn format_timestamp_usec(usec: i64) -> Result<String> {
    let secs = usec / 1_000_000;
    let utc = DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| eyre!("Timestamp out of range: {} usec", usec))?;
    Ok(utc
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string())
}

/// Rewrite every bare `http(s)://` URL in `text` as a Markdown link
/// `[URL](URL)`.
///
/// A URL is a maximal run of non-whitespace characters, so trailing
/// punctuation stays part of the link. Not idempotent: text that already
/// contains Markdown-formatted links gets wrapped a second time.
pub fn rewrite_links(text: &str) -> Cow<'_, str> {
    URL_REGEX.replace_all(text, "[${0}](${0})")
}
