//! # keep-notes-export
//!
//! A CLI tool that converts [Google Keep](https://keep.google.com) notes from a
//! Google Takeout archive into local Markdown files.
//!
//! ## What it does
//!
//! Takeout exports each Keep note as a standalone JSON file. This tool reads
//! every `*.json` file in a source directory, renders the note as Markdown
//! (title, body, checklist, labels, pin/archive flags, timestamps), and writes
//! one `.md` file per note to a target directory. Bare URLs in the note body
//! are rewritten as Markdown links.
//!
//! The source directory is only ever read — your export is never modified.
//!
//! ## Fault tolerance
//!
//! Each file is converted independently: a malformed note is reported and
//! skipped, and the rest of the batch still completes. Re-running over the
//! same export produces identical output, overwriting earlier results.
//!
//! ## Usage
//!
//! ```sh
//! # Convert an unpacked Takeout Keep folder
//! keep-notes-export ~/Takeout/Keep ~/notes/keep
//! ```
//!
//! Preferences can be persisted in `~/.config/keep-notes-export/config.toml`.
//!
//! ## Compatibility
//!
//! Tracks the (undocumented) Takeout Keep JSON layout. Fields this tool does
//! not know about are ignored, so newer exports keep converting.

pub mod importer;
pub mod renderer;
pub mod sequential;
pub mod utils;
