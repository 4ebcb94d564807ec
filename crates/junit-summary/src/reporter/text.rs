//! Plain-text summary

use crate::result::{Report, TestCaseResult};

use super::Renderer;

/// Captured output is cut to this many lines per stream
const MAX_OUTPUT_LINES: usize = 20;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, report: &Report, top_n: usize) -> String {
        let totals = &report.totals;
        let failed = report.failed_cases();
        let slowest = report.slowest(top_n);

        let mut lines: Vec<String> = Vec::new();
        lines.push(format!("JUnit: {}", report.source.display()));
        lines.push(format!(
            "Suites: {}  Tests: {}  Failures: {}  Errors: {}  Skipped: {}  Time: {:.3}s",
            totals.suites, totals.tests, totals.failures, totals.errors, totals.skipped, totals.time_s
        ));
        lines.push(String::new());

        if failed.is_empty() {
            lines.push("Failures/errors: none".to_string());
        } else {
            lines.push("Failures/errors:".to_string());
            for case in failed {
                push_failed_case(&mut lines, case);
            }
        }
        lines.push(String::new());

        lines.push(format!("Slowest {} tests:", slowest.len()));
        for case in slowest {
            lines.push(format!(
                "- {:.3}s  {} :: {}",
                case.time_s, case.classname, case.name
            ));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn push_failed_case(lines: &mut Vec<String>, case: &TestCaseResult) {
    lines.push(format!(
        "- {} :: {} ({:.3}s)",
        case.classname, case.name, case.time_s
    ));
    for msg in &case.failures {
        lines.push(format!("  failure: {msg}"));
    }
    for msg in &case.errors {
        lines.push(format!("  error: {msg}"));
    }
    push_captured(lines, "system-err", &case.system_err);
    push_captured(lines, "system-out", &case.system_out);
}

fn push_captured(lines: &mut Vec<String>, label: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    lines.push(format!("  {label}:"));
    for line in split_lines(text).take(MAX_OUTPUT_LINES) {
        lines.push(format!("    {line}"));
    }
}

/// Split on every line boundary Unicode recognises, `\r\n` counting once.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(at) = rest.find(is_line_break) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..at];
        let tail = &rest[at..];
        let sep_len = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[sep_len..];
        Some(line)
    })
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
