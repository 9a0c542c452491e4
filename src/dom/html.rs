//! HTML string output for the node-builder stream.

use super::builder::NodeBuilder;

/// Writes a [`NodeBuilder`] stream as HTML.
///
/// Text and attribute values are escaped; element names are written as given.
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
    open: Vec<String>,
}

impl HtmlWriter {
    /// A writer with no output yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Close anything still open and return the markup.
    pub fn finish(mut self) -> String {
        while !self.open.is_empty() {
            self.end_element();
        }
        self.out
    }
}

impl NodeBuilder for HtmlWriter {
    fn start_element(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            escape_into(&mut self.out, value, true);
            self.out.push('"');
        }
        self.out.push('>');
        self.open.push(tag.to_string());
    }

    fn text(&mut self, content: &str) {
        escape_into(&mut self.out, content, false);
    }

    fn end_element(&mut self) {
        if let Some(tag) = self.open.pop() {
            self.out.push_str("</");
            self.out.push_str(&tag);
            self.out.push('>');
        }
    }
}

fn escape_into(out: &mut String, value: &str, in_attribute: bool) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
