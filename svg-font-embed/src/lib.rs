//! Embed a web font into an SVG document.
//!
//! Only the characters drawn by the document's `<text>` elements are kept:
//! the font is reduced to those characters by a [`Subsetter`], base64 encoded,
//! and inserted as an `@font-face` rule inside a `<style>` element that
//! becomes the first child of the root `<svg>` element. The rest of the
//! document is left byte for byte as it was.
//!
//! The document is treated as text. It is never parsed into a tree and is not
//! checked for well-formedness.
pub mod convert;
mod splice;
mod style;
mod subset;
mod text;
mod tool;

use std::{
    path::{Path, PathBuf},
    process::ExitStatus,
};

use thiserror::Error;

pub use convert::{convert_font, output_format, DEFAULT_CONVERTER};
pub use splice::{find_root, splice_style, RootMatch};
pub use style::FontFace;
pub use subset::{ExternalSubsetter, Subsetter, DEFAULT_SUBSETTER};
pub use text::{character_filter, extract_text_spans, TextSpan};

/// Where font directories are looked up when no other location is given.
pub const DEFAULT_FONTS_ROOT: &str = "../../../vexflow-fonts";

/// The container format of a web font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Flavor {
    Woff,
    #[default]
    Woff2,
}

impl Flavor {
    /// The name used by the subsetter's `--flavor` flag.
    pub fn name(self) -> &'static str {
        match self {
            Flavor::Woff => "woff",
            Flavor::Woff2 => "woff2",
        }
    }

    pub fn extension(self) -> &'static str {
        self.name()
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Flavor::Woff => "font/woff",
            Flavor::Woff2 => "font/woff2",
        }
    }
}

/// Settings for [`embed_font`].
#[derive(Clone, Debug)]
pub struct EmbedOptions {
    /// Directory holding one `<name>/<name>.woff2` entry per font.
    pub fonts_root: PathBuf,
    /// The external subsetting program.
    pub subsetter: PathBuf,
    pub flavor: Flavor,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            fonts_root: PathBuf::from(DEFAULT_FONTS_ROOT),
            subsetter: PathBuf::from(DEFAULT_SUBSETTER),
            flavor: Flavor::default(),
        }
    }
}

/// Settings for [`convert_font`].
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// The external font editor.
    pub converter: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            converter: PathBuf::from(DEFAULT_CONVERTER),
        }
    }
}

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Font file '{}' not found", .0.display())]
    FontNotFound(PathBuf),

    #[error("Failed to run '{}': {source}", .program.display())]
    ToolSpawn {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("'{}' failed ({status}): {}", .program.display(), .stderr.trim())]
    ToolFailed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Expected output file '{}' was not written", .0.display())]
    MissingToolOutput(PathBuf),

    #[error("No <svg> root element with content found")]
    MissingSvgRoot,

    #[error("Unsupported output format for '{0}'")]
    UnsupportedFormat(String),
}

/// The source font for `font_name`: `<fonts_root>/<font_name>/<font_name>.woff2`.
pub fn font_path(fonts_root: &Path, font_name: &str) -> PathBuf {
    fonts_root
        .join(font_name)
        .join(format!("{font_name}.woff2"))
}

/// Embeds a subset of `font` into `document` and returns the new document.
///
/// `font_name` becomes the `font-family` of the generated rule.
pub fn embed_into_document(
    document: &str,
    font_name: &str,
    font: &Path,
    flavor: Flavor,
    subsetter: &impl Subsetter,
) -> Result<String, EmbedError> {
    let filter = character_filter(document);
    if filter.is_empty() {
        log::warn!("no <text> content found, subsetting '{font_name}' to an empty set");
    } else {
        log::debug!("character filter has {} chars", filter.chars().count());
    }

    let data = subsetter.subset(font, &filter, flavor)?;
    let style = FontFace::new(font_name, flavor, &data).to_style_element();
    log::debug!(
        "{} byte subset encoded to {} byte style element",
        data.len(),
        style.len()
    );
    splice_style(document, &style)
}

/// Embeds `font_name` into the SVG file at `svg_path`, subsetting with the
/// external program named in `options`.
///
/// The file is rewritten in place. Nothing is written unless every earlier
/// step succeeds.
pub fn embed_font(
    svg_path: &Path,
    font_name: &str,
    options: &EmbedOptions,
) -> Result<(), EmbedError> {
    let subsetter = ExternalSubsetter::new(&options.subsetter);
    embed_font_with(svg_path, font_name, options, &subsetter)
}

/// As [`embed_font`], with a caller provided [`Subsetter`].
pub fn embed_font_with(
    svg_path: &Path,
    font_name: &str,
    options: &EmbedOptions,
    subsetter: &impl Subsetter,
) -> Result<(), EmbedError> {
    let document = std::fs::read_to_string(svg_path).map_err(|source| EmbedError::Io {
        path: svg_path.to_owned(),
        source,
    })?;

    let font = font_path(&options.fonts_root, font_name);
    if !font.is_file() {
        return Err(EmbedError::FontNotFound(font));
    }

    let embedded = embed_into_document(&document, font_name, &font, options.flavor, subsetter)?;
    std::fs::write(svg_path, embedded).map_err(|source| EmbedError::Io {
        path: svg_path.to_owned(),
        source,
    })?;
    log::info!("embedded '{font_name}' into {}", svg_path.display());
    Ok(())
}
