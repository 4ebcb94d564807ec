//! junit-summary: digest a JUnit XML report into a readable summary
//!
//! The pipeline is one-way: a report file is parsed into suite-level
//! [`Totals`] plus an ordered list of [`TestCaseResult`]s, and a
//! [`Renderer`] turns that into plain text, HTML or JSON.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use junit_summary::{parser, OutputFormat};
//!
//! let report = parser::parse_file("debug/junit.xml".as_ref())?;
//! let text = OutputFormat::Text.renderer().render(&report, 15);
//! print!("{text}");
//! ```

pub mod error;
pub mod lenient;
pub mod parser;
pub mod reporter;
pub mod result;

// Re-export core types
pub use error::{Error, Result};
pub use result::{Report, TestCaseResult, Totals};

// Re-export rendering API
pub use reporter::{HtmlRenderer, JsonRenderer, OutputFormat, Renderer, TextRenderer};
