//! Collecting the characters rendered by `<text>` elements.

use std::sync::LazyLock;

use regex::Regex;

static TEXT_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(<text[^>]*>)(.*?)(</text>)").unwrap());

/// One `<text>` element as it appears in the document.
///
/// The content is kept verbatim, including any nested markup such as
/// `<tspan>` elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextSpan<'a> {
    pub open_tag: &'a str,
    pub content: &'a str,
    pub close_tag: &'a str,
}

/// Returns every text span in `document`, in document order.
pub fn extract_text_spans(document: &str) -> Vec<TextSpan<'_>> {
    TEXT_ELEMENT
        .captures_iter(document)
        .map(|caps| TextSpan {
            open_tag: caps.get(1).map_or("", |m| m.as_str()),
            content: caps.get(2).map_or("", |m| m.as_str()),
            close_tag: caps.get(3).map_or("", |m| m.as_str()),
        })
        .collect()
}

/// The text handed to the subsetter: all span contents concatenated in
/// document order.
pub fn character_filter(document: &str) -> String {
    extract_text_spans(document)
        .iter()
        .map(|span| span.content)
        .collect()
}
