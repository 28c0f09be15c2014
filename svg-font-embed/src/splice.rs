//! Locating the root `<svg>` element and inserting content as its first child.

use std::sync::LazyLock;

use regex::Regex;

use crate::EmbedError;

static SVG_ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(<svg[^>]*>)(.*?)(<)").unwrap());

/// The first `<svg ...>` open tag, whatever precedes its first child, and the
/// position of the `<` that starts that child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootMatch<'a> {
    pub open_tag: &'a str,
    pub leading: &'a str,
    /// Byte offset of the `<` following `leading`.
    pub insert_at: usize,
}

pub fn find_root(document: &str) -> Option<RootMatch<'_>> {
    let caps = SVG_ROOT.captures(document)?;
    let open_tag = caps.get(1)?;
    let leading = caps.get(2)?;
    let next = caps.get(3)?;
    Some(RootMatch {
        open_tag: open_tag.as_str(),
        leading: leading.as_str(),
        insert_at: next.start(),
    })
}

/// Inserts `content` directly before the first child of the root element.
///
/// Only the first root match is used. Every other byte of the document is
/// left as it was.
pub fn splice_style(document: &str, content: &str) -> Result<String, EmbedError> {
    let root = find_root(document).ok_or(EmbedError::MissingSvgRoot)?;
    log::debug!(
        "inserting {} bytes after {:?} at offset {}",
        content.len(),
        root.open_tag,
        root.insert_at
    );
    let mut out = String::with_capacity(document.len() + content.len());
    out.push_str(&document[..root.insert_at]);
    out.push_str(content);
    out.push_str(&document[root.insert_at..]);
    Ok(out)
}
