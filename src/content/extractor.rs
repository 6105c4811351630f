//! HTML to plain text extraction

use scraper::Html;

/// Strip all markup from an HTML document and collapse whitespace
///
/// Every run of whitespace (including newlines) becomes a single space and
/// the result is trimmed at both ends.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let text = document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");
    clean_text(&text)
}

/// Normalize whitespace: runs of spaces/newlines become single spaces
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
