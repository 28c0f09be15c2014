//! Converting fonts between formats with an external font editor.
//!
//! The output format is chosen from the destination file's extension, the
//! same way the editor's own `generate` call chooses it.

use std::{ffi::OsStr, io::Write, path::Path};

use crate::{tool, ConvertOptions, EmbedError};

/// The program used when no other converter is configured.
pub const DEFAULT_CONVERTER: &str = "fontforge";

/// Destination extensions fontforge's `generate` knows how to write.
pub static SUPPORTED_EXTENSIONS: &[&str] = &[
    // postscript
    "pfa", "pfb", "pt3", "t42", "ps", "cid", "cff", "cef",
    // sfnt
    "otf", "ttf", "ttc", "otb", "woff", "woff2",
    // mac
    "bin", "dfont",
    // other
    "svg", "ufo", "ufo2", "ufo3", "bdf", "sfd",
];

const GENERATE_SCRIPT: &str = "\
import sys
import fontforge
fontforge.open(sys.argv[1]).generate(sys.argv[2])
";

/// Returns the lower-cased extension of `dest` if it names a supported format.
pub fn output_format(dest: &Path) -> Result<String, EmbedError> {
    let ext = dest
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(EmbedError::UnsupportedFormat(dest.display().to_string()))
    }
}

/// Converts the font at `source` and writes it to `dest`.
pub fn convert_font(
    source: &Path,
    dest: &Path,
    options: &ConvertOptions,
) -> Result<(), EmbedError> {
    let format = output_format(dest)?;
    if !source.is_file() {
        return Err(EmbedError::FontNotFound(source.to_owned()));
    }

    let mut script = tempfile::Builder::new()
        .prefix("convert")
        .suffix(".py")
        .tempfile()
        .map_err(|source| EmbedError::Io {
            path: std::env::temp_dir(),
            source,
        })?;
    if let Err(source) = script
        .write_all(GENERATE_SCRIPT.as_bytes())
        .and_then(|_| script.flush())
    {
        return Err(EmbedError::Io {
            path: script.path().to_owned(),
            source,
        });
    }

    tool::run(
        &options.converter,
        [
            OsStr::new("-lang=py"),
            OsStr::new("-script"),
            script.path().as_os_str(),
            source.as_os_str(),
            dest.as_os_str(),
        ],
    )?;
    log::info!(
        "converted {} to {} ({format})",
        source.display(),
        dest.display()
    );
    Ok(())
}
