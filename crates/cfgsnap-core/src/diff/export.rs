//! Renders a diff as a replayable `config:set` command script.
//!
//! One line per diff line, in diff order:
//!
//! ```text
//! config:set --scope="<scope>" --scope-id="<scopeId>" "<path>" "<value>"
//! ```
//!
//! `<value>` is the new value with each CR?LF replaced by the two characters
//! `\n`. Nothing else is escaped, so a value containing `"` produces a line a
//! shell will not parse as intended. Removed keys render with an empty value:
//! the script sets them to `""` because the command has no unset form.

use crate::diff::model::{DiffLine, DiffResult};
use std::io::{self, Write};

/// Replace every `\r\n` and lone `\n` with a literal backslash-n.
pub fn escape_newlines(value: &str) -> String {
    value.replace("\r\n", "\\n").replace('\n', "\\n")
}

/// Render one diff line as a `config:set` command.
pub fn export_line(line: &DiffLine) -> String {
    format!(
        r#"config:set --scope="{}" --scope-id="{}" "{}" "{}""#,
        line.scope,
        line.scope_id,
        line.path,
        escape_newlines(&line.new_value)
    )
}

/// Render the whole diff, one command per line.
pub fn export_lines(diff: &DiffResult) -> Vec<String> {
    diff.lines.iter().map(export_line).collect()
}

/// Write rendered commands to `w`, each terminated by `\n`.
///
/// # Errors
///
/// Propagates write failures from `w`.
pub fn write_export<W: Write>(w: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(w, "{}", line)?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::{ChangeKind, DiffResultCount};
    use crate::keys::Scope;

    fn line(
        path: &str,
        scope: Scope,
        scope_id: i64,
        new_value: &str,
        kind: ChangeKind,
    ) -> DiffLine {
        DiffLine {
            path: path.to_string(),
            scope,
            scope_id,
            old_value: String::new(),
            new_value: new_value.to_string(),
            kind,
        }
    }

    #[test]
    fn test_crlf_and_lf_become_literal_backslash_n() {
        assert_eq!(escape_newlines("a\r\nb"), "a\\nb");
        assert_eq!(escape_newlines("a\nb\r\nc"), "a\\nb\\nc");
        assert_eq!(escape_newlines("lone\rcr"), "lone\rcr");
    }

    #[test]
    fn test_export_line_format() {
        let l = line(
            "general/locale/timezone",
            Scope::Stores,
            7,
            "Europe/Paris",
            ChangeKind::Changed,
        );
        assert_eq!(
            export_line(&l),
            r#"config:set --scope="stores" --scope-id="7" "general/locale/timezone" "Europe/Paris""#
        );
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let l = line(
            "design/head/title",
            Scope::Default,
            0,
            r#"say "hi""#,
            ChangeKind::Added,
        );
        assert!(export_line(&l).ends_with(r#""say "hi"""#));
    }

    #[test]
    fn test_removed_line_sets_empty_value() {
        let l = line(
            "web/cookie/path",
            Scope::Websites,
            1,
            "",
            ChangeKind::Removed,
        );
        assert_eq!(
            export_line(&l),
            r#"config:set --scope="websites" --scope-id="1" "web/cookie/path" """#
        );
    }

    #[test]
    fn test_write_export_preserves_order() {
        let diff = DiffResult {
            lines: vec![
                line("a", Scope::Default, 0, "a\r\nb", ChangeKind::Added),
                line("b", Scope::Default, 0, "", ChangeKind::Removed),
            ],
            count: DiffResultCount {
                added: 1,
                changed: 0,
                removed: 1,
            },
            from: 1,
            to: 2,
        };
        let mut out = Vec::new();
        write_export(&mut out, &export_lines(&diff)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "config:set --scope=\"default\" --scope-id=\"0\" \"a\" \"a\\nb\"\n\
             config:set --scope=\"default\" --scope-id=\"0\" \"b\" \"\"\n"
        );
    }
}
