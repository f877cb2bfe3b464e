//! HTML serialization of the markup tree.

use std::fmt;

use super::{Content, Element};

/// Tags that never carry children or a closing tag.
const VOID_TAGS: &[&str] = &["input", "br", "col", "hr", "img"];

impl Element {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        if self.is_text() {
            if let Content::Text(text) = &self.content {
                out.push_str(&escape(text));
            }
            for child in self.child_elements() {
                child.write_html(out);
            }
            return;
        }

        out.push('<');
        out.push_str(self.tag);
        if let Some(id) = &self.id {
            push_attr(out, "id", id);
        }
        if !self.classes.is_empty() {
            push_attr(out, "class", &self.classes.join(" "));
        }
        for (name, value) in &self.attrs {
            push_attr(out, name, value);
        }
        if !self.style.is_empty() {
            push_attr(out, "style", &self.style.to_css());
        }
        if self.checked {
            out.push_str(" checked");
        }
        if self.indeterminate {
            push_attr(out, "data-indeterminate", "true");
        }
        if self.disabled {
            out.push_str(" disabled");
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        match &self.content {
            Content::None => {}
            Content::Text(text) => out.push_str(&escape(text)),
            Content::Children(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
