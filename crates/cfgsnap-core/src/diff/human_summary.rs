//! Human-readable text renderer for snapshot diffs.

use crate::diff::model::{ChangeKind, DiffResult};
use std::fmt::Write as _;

/// Render a plain-text summary of a [`DiffResult`] for terminal review.
///
/// Each line shows the path with its scope, followed by an indented block:
/// `new:` for added keys, `is removed` / `old:` for removed keys, and
/// `old:` / `new:` for changed keys. Entries are separated by a blank line.
pub fn render_human_summary(diff: &DiffResult) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Snapshot {} -> {}: {} ({} changes)",
        diff.from,
        diff.to,
        diff.count,
        diff.count.changes()
    );
    out.push('\n');

    if diff.is_empty() {
        out.push_str("No differences.\n");
        return out;
    }

    for line in &diff.lines {
        let _ = writeln!(out, "{} [{}:{}]", line.path, line.scope, line.scope_id);
        match line.kind {
            ChangeKind::Added => {
                let _ = writeln!(out, "\tnew: {}", line.new_value);
            }
            ChangeKind::Removed => {
                out.push_str("\tis removed\n");
                let _ = writeln!(out, "\told: {}", line.old_value);
            }
            ChangeKind::Changed => {
                let _ = writeln!(out, "\told: {}", line.old_value);
                let _ = writeln!(out, "\tnew: {}", line.new_value);
            }
        }
        out.push('\n');
    }

    out
}
