//! Rendering highlight spans as tagged text.

use crate::highlighter::HighlightSpan;
use serde::{Deserialize, Serialize};

/// How bold spans are wrapped when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupStyle {
    /// Inserted before each bold span
    pub open: String,
    /// Inserted after each bold span
    pub close: String,
    /// HTML-escape span text
    pub escape_html: bool,
}

impl Default for MarkupStyle {
    fn default() -> Self {
        Self::html()
    }
}

impl MarkupStyle {
    /// `<b>`/`</b>` with escaping.
    pub fn html() -> Self {
        Self {
            open: "<b>".to_string(),
            close: "</b>".to_string(),
            escape_html: true,
        }
    }

    /// Square brackets around bold spans, no escaping.
    pub fn brackets() -> Self {
        Self {
            open: "[".to_string(),
            close: "]".to_string(),
            escape_html: false,
        }
    }
}

/// Renders `spans` with `style`.
pub fn render(spans: &[HighlightSpan], style: &MarkupStyle) -> String {
    let mut out = String::new();
    for span in spans {
        if span.bold {
            out.push_str(&style.open);
        }
        if style.escape_html {
            escape_html_into(&span.text, &mut out);
        } else {
            out.push_str(&span.text);
        }
        if span.bold {
            out.push_str(&style.close);
        }
    }
    out
}

fn escape_html_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
