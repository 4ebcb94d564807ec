//! JSON summary for machine consumers

use std::path::Path;

use serde::Serialize;

use crate::result::{Report, TestCaseResult, Totals};

use super::Renderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

/// Serialized shape of the JSON summary
#[derive(Serialize)]
struct JsonSummary<'a> {
    source: &'a Path,
    totals: &'a Totals,
    failed: Vec<&'a TestCaseResult>,
    slowest: Vec<&'a TestCaseResult>,
}

impl Renderer for JsonRenderer {
    fn render(&self, report: &Report, top_n: usize) -> String {
        let summary = JsonSummary {
            source: &report.source,
            totals: &report.totals,
            failed: report.failed_cases(),
            slowest: report.slowest(top_n),
        };
        let mut json = serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "{}".to_string());
        json.push('\n');
        json
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn summary_has_failed_and_slowest() {
        let ok = TestCaseResult {
            classname: "pkg".to_string(),
            name: "ok".to_string(),
            time_s: 2.0,
            status: String::new(),
            failures: Vec::new(),
            errors: Vec::new(),
            system_out: String::new(),
            system_err: String::new(),
        };
        let bad = TestCaseResult {
            name: "bad".to_string(),
            time_s: 1.0,
            failures: vec!["boom".to_string()],
            ..ok.clone()
        };
        let report = Report {
            source: PathBuf::from("junit.xml"),
            totals: Totals {
                tests: 2,
                failures: 1,
                suites: 1,
                time_s: 3.0,
                ..Totals::default()
            },
            cases: vec![ok, bad],
        };

        let out = JsonRenderer.render(&report, 1);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["source"], "junit.xml");
        assert_eq!(value["totals"]["tests"], 2);
        assert_eq!(value["totals"]["failures"], 1);
        assert_eq!(value["failed"][0]["name"], "bad");
        assert_eq!(value["failed"][0]["failures"][0], "boom");
        assert_eq!(value["slowest"].as_array().unwrap().len(), 1);
        assert_eq!(value["slowest"][0]["name"], "ok");
    }
}
