//! WASM bindings for highlighting.

use wasm_bindgen::prelude::*;

/// Highlight `description` for `query`.
///
/// # Returns
/// JSON array of `{"text", "bold"}` spans; `"[]"` only if encoding fails
#[wasm_bindgen]
pub fn highlight_json(description: &str, query: &str) -> String {
    let spans = crate::highlight(description, query);
    crate::spans_to_json(&spans).unwrap_or_else(|_| "[]".to_string())
}

/// Highlight `description` for `query` as escaped HTML with `<b>` tags.
#[wasm_bindgen]
pub fn highlight_markup(description: &str, query: &str) -> String {
    let spans = crate::highlight(description, query);
    crate::render(&spans, &crate::MarkupStyle::html())
}
