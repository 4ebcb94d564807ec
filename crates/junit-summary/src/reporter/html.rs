//! Self-contained HTML report
//!
//! The page carries its own stylesheet and no scripts. Failure details sit
//! inside `<details>` blocks so long stack traces stay collapsed until
//! clicked.

use crate::result::{Report, TestCaseResult};

use super::Renderer;

const STYLE: &str = r#"<style>
  :root {
    color-scheme: light dark;
    --fg: #111;
    --bg: #fff;
    --muted: #666;
    --fail: #b00020;
    --border: rgba(127,127,127,.35);
  }
  body { font: 14px/1.35 ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial; margin: 20px; }
  h1 { margin: 0 0 6px; font-size: 18px; }
  .muted { color: var(--muted); }
  table { border-collapse: collapse; width: 100%; }
  th, td { border: 1px solid var(--border); padding: 6px 8px; vertical-align: top; }
  th { text-align: left; position: sticky; top: 0; backdrop-filter: blur(4px); }
  td.num { text-align: right; font-variant-numeric: tabular-nums; white-space: nowrap; }
  tr.fail td { border-left: 3px solid var(--fail); }
  details > summary { cursor: pointer; user-select: none; }
  pre { white-space: pre-wrap; word-break: break-word; margin: 6px 0 0; }
</style>"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, report: &Report, top_n: usize) -> String {
        let totals = &report.totals;
        let failed = report.failed_cases();
        let slowest = report.slowest(top_n);

        let summary = format!(
            "Suites: {} · Tests: {} · Failures: {} · Errors: {} · Skipped: {} · Time: {:.3}s",
            totals.suites, totals.tests, totals.failures, totals.errors, totals.skipped, totals.time_s
        );

        let failed_rows = if failed.is_empty() {
            r#"<tr><td colspan="4" class="muted">none</td></tr>"#.to_string()
        } else {
            failed.iter().map(|c| failed_row(c)).collect()
        };
        let slowest_rows = if slowest.is_empty() {
            r#"<tr><td colspan="3" class="muted">none</td></tr>"#.to_string()
        } else {
            slowest.iter().map(|c| slow_row(c)).collect()
        };

        let mut html = String::new();
        html.push_str("<!doctype html>\n");
        html.push_str("<meta charset=\"utf-8\" />\n");
        html.push_str("<title>JUnit Report</title>\n");
        html.push_str(STYLE);
        html.push('\n');
        html.push_str("<h1>JUnit Report</h1>\n");
        html.push_str(&format!(
            "<div class=\"muted\">{}</div>\n",
            escape_html(&report.source.display().to_string())
        ));
        html.push_str(&format!("<div class=\"muted\">{}</div>\n\n", escape_html(&summary)));

        html.push_str(&format!("<h2>Failures / Errors ({})</h2>\n", failed.len()));
        html.push_str("<table>\n");
        html.push_str("  <thead><tr><th>Class</th><th>Name</th><th class=\"num\">Time (s)</th><th>Details</th></tr></thead>\n");
        html.push_str(&format!("  <tbody>\n    {failed_rows}\n  </tbody>\n"));
        html.push_str("</table>\n\n");

        html.push_str(&format!("<h2>Slowest Tests (top {})</h2>\n", slowest.len()));
        html.push_str("<table>\n");
        html.push_str("  <thead><tr><th>Class</th><th>Name</th><th class=\"num\">Time (s)</th></tr></thead>\n");
        html.push_str(&format!("  <tbody>\n    {slowest_rows}\n  </tbody>\n"));
        html.push_str("</table>\n");

        html
    }
}

fn failed_row(case: &TestCaseResult) -> String {
    let mut details = String::new();
    for msg in &case.failures {
        details.push_str(&disclosure("failure", msg));
    }
    for msg in &case.errors {
        details.push_str(&disclosure("error", msg));
    }
    if !case.system_err.is_empty() {
        details.push_str(&disclosure("system-err", &case.system_err));
    }
    if !case.system_out.is_empty() {
        details.push_str(&disclosure("system-out", &case.system_out));
    }

    format!(
        "<tr class='fail'><td>{}</td><td>{}</td><td class='num'>{:.3}</td><td>{}</td></tr>",
        escape_html(&case.classname),
        escape_html(&case.name),
        case.time_s,
        details
    )
}

fn slow_row(case: &TestCaseResult) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td class='num'>{:.3}</td></tr>",
        escape_html(&case.classname),
        escape_html(&case.name),
        case.time_s
    )
}

fn disclosure(label: &str, body: &str) -> String {
    format!(
        "<details><summary>{}</summary><pre>{}</pre></details>",
        escape_html(label),
        escape_html(body)
    )
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
