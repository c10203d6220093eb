use crate::importer::KeepNote;
use crate::utils::{format_timestamp_usec, rewrite_links};
use eyre::Result;
use std::fmt::Write;

/// Render one note as a standalone Markdown document.
///
/// Section order mirrors the Keep UI top to bottom: title, body, checklist,
/// labels, pin/archive flags, timestamps, then a `---` separator.
pub fn render_note(note: &KeepNote) -> Result<String> {
    let mut md = String::new();

    let title = note
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("Untitled");
    writeln!(md, "# {}\n", title)?;

    // A single '\n' in Keep is a visual line break; Markdown needs a blank
    // line to render one.
    let body = note
        .text_content
        .as_deref()
        .unwrap_or_default()
        .replace('\n', "\n\n");
    writeln!(md, "{}\n", rewrite_links(&body))?;

    if !note.list_content.is_empty() {
        writeln!(md, "## Checkboxes:")?;
        for item in &note.list_content {
            let checkbox = if item.is_checked { "[x]" } else { "[ ]" };
            writeln!(md, "- {} {}", checkbox, item.text)?;
        }
    }

    if !note.labels.is_empty() {
        let names: Vec<&str> = note.labels.iter().map(|l| l.name.as_str()).collect();
        writeln!(md, "**Labels**: {}\n", names.join(", "))?;
    }

    writeln!(md, "**Pinned**: {}", if note.is_pinned { "Yes" } else { "No" })?;
    writeln!(
        md,
        "**Archived**: {}\n",
        if note.is_archived { "Yes" } else { "No" }
    )?;

    let created = note.created_timestamp_usec.map(|t| t.0).unwrap_or(0);
    let edited = note.user_edited_timestamp_usec.map(|t| t.0).unwrap_or(0);
    writeln!(md, "**Created**: {}", format_timestamp_usec(created)?)?;
    writeln!(md, "**Last Edited**: {}\n", format_timestamp_usec(edited)?)?;

    writeln!(md, "---\n")?;

    Ok(md)
}
