//! Plain-text rendering of a [`DraftView`] for the terminal.

use rfpdraft::{
    constants::{MAX_RENDERED_ITEMS, PREVIEW_CHARS},
    DraftView,
};
use std::fmt::Write as _;

pub fn render_draft(view: &DraftView, preview: Option<&str>) -> String {
    let mut out = String::from("Done: model returned results.\n");

    if let Some(preview) = preview {
        let _ = writeln!(
            out,
            "\nExtracted text preview (first {}k chars):\n{preview}",
            PREVIEW_CHARS / 1000
        );
    }

    let _ = writeln!(out, "\nRaw model output (JSON):\n{}", view.raw);

    if let Some(notice) = &view.notice {
        let _ = write!(out, "\n{notice}");
        return out;
    }

    out.push_str("\nSummary\n");
    for bullet in &view.summary {
        let _ = writeln!(out, "- {bullet}");
    }

    out.push_str("\nExtracted questions and draft answers\n");
    for item in &view.items {
        let _ = writeln!(out, "{}. {}", item.index, item.question);
        if !item.draft_answer.is_empty() {
            let _ = writeln!(out, "   {}", item.draft_answer);
        }
    }
    if view.total_items > view.items.len() {
        let _ = writeln!(
            out,
            "Showing the first {MAX_RENDERED_ITEMS} of {} items.",
            view.total_items
        );
    }

    if !view.missing_info.is_empty() {
        out.push_str("\nMissing / follow-up info to request\n");
        for bullet in &view.missing_info {
            let _ = writeln!(out, "- {bullet}");
        }
    }

    out.trim_end().to_string()
}
