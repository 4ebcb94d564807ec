//! JUnit XML parser
//!
//! Accepts either a single `<testsuite>` root or a wrapper element (usually
//! `<testsuites>`) whose direct `<testsuite>` children are the suites. Any
//! other shape yields an empty report. Attribute values go through the
//! [`lenient`](crate::lenient) helpers, so the only hard failure is a
//! document that is not well-formed XML.
//!
//! Files are decoded by byte-order mark, then by the `encoding` named in
//! the XML declaration, falling back to UTF-8.

use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use tracing::debug;
use xot::{NameId, Node, Xot};

use crate::error::{Error, Result};
use crate::lenient::{attr_or_empty, lenient_count, lenient_seconds};
use crate::result::{Report, TestCaseResult, Totals};

/// Interned element and attribute names used by the JUnit format
struct JunitNames {
    testsuite: NameId,
    testcase: NameId,
    failure: NameId,
    error: NameId,
    system_out: NameId,
    system_err: NameId,
    tests: NameId,
    failures: NameId,
    errors: NameId,
    skipped: NameId,
    time: NameId,
    classname: NameId,
    name: NameId,
    status: NameId,
}

impl JunitNames {
    fn new(xot: &mut Xot) -> Self {
        Self {
            testsuite: xot.add_name("testsuite"),
            testcase: xot.add_name("testcase"),
            failure: xot.add_name("failure"),
            error: xot.add_name("error"),
            system_out: xot.add_name("system-out"),
            system_err: xot.add_name("system-err"),
            tests: xot.add_name("tests"),
            failures: xot.add_name("failures"),
            errors: xot.add_name("errors"),
            skipped: xot.add_name("skipped"),
            time: xot.add_name("time"),
            classname: xot.add_name("classname"),
            name: xot.add_name("name"),
            status: xot.add_name("status"),
        }
    }
}

/// Parse the JUnit report at `path`.
pub fn parse_file(path: &Path) -> Result<Report> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    parse_bytes(path, &bytes)
}

/// Parse a raw JUnit document in whatever encoding it declares.
pub fn parse_bytes(source: &Path, bytes: &[u8]) -> Result<Report> {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| declared_encoding(bytes))
        .unwrap_or(UTF_8);
    let (xml, actual, lossy) = encoding.decode(bytes);
    debug!(encoding = actual.name(), lossy, "decoded JUnit report");

    // The declaration still names the source encoding; the text is UTF-8 now.
    parse_str(source, strip_xml_declaration(&xml))
}

/// Encoding named by `<?xml ... encoding="..."?>`, if recognised.
///
/// A declaration readable as ASCII means the bytes are not UTF-16, so
/// UTF-16 labels resolve to UTF-8.
fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let rest = bytes.strip_prefix(b"<?xml")?;
    let end = rest.windows(2).position(|w| w == b"?>")?;
    let decl = &rest[..end];

    let at = decl.windows(8).position(|w| w == b"encoding")?;
    let value = decl[at + 8..].trim_ascii_start().strip_prefix(b"=")?.trim_ascii_start();
    let (&quote, value) = value.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let label_end = value.iter().position(|&b| b == quote)?;
    Encoding::for_label(&value[..label_end]).map(Encoding::output_encoding)
}

fn strip_xml_declaration(xml: &str) -> &str {
    let is_decl = xml
        .strip_prefix("<?xml")
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_whitespace()));
    match xml.find("?>") {
        Some(end) if is_decl => &xml[end + 2..],
        _ => xml,
    }
}

/// Parse an in-memory JUnit document; `source` is only recorded in the report.
pub fn parse_str(source: &Path, xml: &str) -> Result<Report> {
    let mut xot = Xot::new();
    let names = JunitNames::new(&mut xot);
    let doc = xot
        .parse(xml)
        .map_err(|e| Error::MalformedInput(e.to_string()))?;

    let reader = JunitReader {
        xot: &xot,
        names: &names,
    };

    let mut totals = Totals::default();
    let mut cases = Vec::new();

    for suite in reader.suites(doc) {
        let suite_totals = reader.suite_totals(suite);
        debug!(
            tests = suite_totals.tests,
            failures = suite_totals.failures,
            errors = suite_totals.errors,
            "absorbing test suite"
        );
        totals.absorb_suite(&suite_totals);

        for tc in reader.children_named(suite, names.testcase) {
            cases.push(reader.test_case(tc));
        }
    }

    debug!(
        source = %source.display(),
        suites = totals.suites,
        cases = cases.len(),
        "parsed JUnit report"
    );

    Ok(Report {
        source: source.to_path_buf(),
        totals,
        cases,
    })
}

struct JunitReader<'a> {
    xot: &'a Xot,
    names: &'a JunitNames,
}

impl JunitReader<'_> {
    /// Suite elements of the document, per the accepted root shapes
    fn suites(&self, doc: Node) -> Vec<Node> {
        let Some(root) = self.xot.children(doc).find(|&n| self.xot.is_element(n)) else {
            return Vec::new();
        };
        if self.is_named(root, self.names.testsuite) {
            vec![root]
        } else {
            self.children_named(root, self.names.testsuite).collect()
        }
    }

    fn suite_totals(&self, suite: Node) -> Totals {
        let n = self.names;
        Totals {
            tests: lenient_count(self.attr(suite, n.tests)),
            failures: lenient_count(self.attr(suite, n.failures)),
            errors: lenient_count(self.attr(suite, n.errors)),
            skipped: lenient_count(self.attr(suite, n.skipped)),
            time_s: lenient_seconds(self.attr(suite, n.time)),
            suites: 0,
        }
    }

    fn test_case(&self, tc: Node) -> TestCaseResult {
        let n = self.names;
        TestCaseResult {
            classname: attr_or_empty(self.attr(tc, n.classname)),
            name: attr_or_empty(self.attr(tc, n.name)),
            time_s: lenient_seconds(self.attr(tc, n.time)),
            status: attr_or_empty(self.attr(tc, n.status)),
            failures: self.messages(tc, n.failure),
            errors: self.messages(tc, n.error),
            system_out: self.first_child_text(tc, n.system_out),
            system_err: self.first_child_text(tc, n.system_err),
        }
    }

    /// Trimmed texts of every `name` child, blank ones dropped
    fn messages(&self, node: Node, name: NameId) -> Vec<String> {
        self.children_named(node, name)
            .map(|child| self.trimmed_text(child))
            .filter(|text| !text.is_empty())
            .collect()
    }

    fn first_child_text(&self, node: Node, name: NameId) -> String {
        self.children_named(node, name)
            .next()
            .map(|child| self.trimmed_text(child))
            .unwrap_or_default()
    }

    /// All descendant text nodes concatenated, then trimmed
    fn trimmed_text(&self, node: Node) -> String {
        let text: String = self
            .xot
            .descendants(node)
            .filter_map(|d| self.xot.text_str(d))
            .collect();
        text.trim().to_string()
    }

    fn children_named(&self, node: Node, name: NameId) -> impl Iterator<Item = Node> + '_ {
        self.xot
            .children(node)
            .filter(move |&child| self.is_named(child, name))
    }

    fn is_named(&self, node: Node, name: NameId) -> bool {
        self.xot.is_element(node) && self.xot.node_name(node) == Some(name)
    }

    fn attr(&self, node: Node, name: NameId) -> Option<&str> {
        self.xot.get_attribute(node, name)
    }
}
