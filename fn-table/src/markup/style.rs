use serde::{Deserialize, Serialize};

/// Horizontal text alignment of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    #[serde(alias = "middle")]
    Center,
    Right,
}

impl Alignment {
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Inline style of an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub text_align: Option<Alignment>,
    /// Width in pixels.
    pub width: Option<u16>,
    /// Additional declarations, emitted in insertion order.
    pub properties: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_align(mut self, align: Alignment) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text_align.is_none() && self.width.is_none() && self.properties.is_empty()
    }

    /// Render as a CSS declaration list, e.g. `text-align: left; width: 150px`.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(align) = self.text_align {
            decls.push(format!("text-align: {}", align.as_css()));
        }
        if let Some(width) = self.width {
            decls.push(format!("width: {width}px"));
        }
        for (name, value) in &self.properties {
            decls.push(format!("{name}: {value}"));
        }
        decls.join("; ")
    }
}
