//! Report rendering
//!
//! Every output format is a [`Renderer`] over the same input: a parsed
//! [`Report`] and the number of slow tests to list.

mod html;
mod json;
mod text;

pub use html::{escape_html, HtmlRenderer};
pub use json::JsonRenderer;
pub use text::TextRenderer;

use serde::{Deserialize, Serialize};

use crate::result::Report;

/// Turns a parsed report into a document
pub trait Renderer {
    fn render(&self, report: &Report, top_n: usize) -> String;
}

/// Output format selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Html => Box::new(HtmlRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}
