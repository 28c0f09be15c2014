//! Producing a font subset that covers a given text.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{tool, EmbedError, Flavor};

/// The program used when no other subsetter is configured.
pub const DEFAULT_SUBSETTER: &str = "pyftsubset";

/// Something that can reduce a font to the glyphs needed for `text`.
pub trait Subsetter {
    /// Returns the bytes of a subset of `font` covering `text`, encoded as
    /// `flavor`.
    fn subset(&self, font: &Path, text: &str, flavor: Flavor) -> Result<Vec<u8>, EmbedError>;
}

/// Subsetting by way of an external, fonttools compatible, command line tool.
///
/// The tool is invoked as
/// `<program> <font> --text=<text> --flavor=<flavor> --output-file=<file>`.
/// The output file lives in a temporary directory private to each call, which
/// is removed once the call returns.
#[derive(Clone, Debug)]
pub struct ExternalSubsetter {
    program: PathBuf,
}

impl ExternalSubsetter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn args(font: &Path, text: &str, flavor: Flavor, output: &Path) -> Vec<OsString> {
        let mut text_arg = OsString::from("--text=");
        text_arg.push(text);
        let mut output_arg = OsString::from("--output-file=");
        output_arg.push(output);
        vec![
            font.as_os_str().to_owned(),
            text_arg,
            format!("--flavor={}", flavor.name()).into(),
            output_arg,
        ]
    }
}

impl Default for ExternalSubsetter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBSETTER)
    }
}

impl Subsetter for ExternalSubsetter {
    fn subset(&self, font: &Path, text: &str, flavor: Flavor) -> Result<Vec<u8>, EmbedError> {
        let scratch = tempfile::Builder::new()
            .prefix("svg-font-embed")
            .tempdir()
            .map_err(|source| EmbedError::Io {
                path: std::env::temp_dir(),
                source,
            })?;
        let output = scratch
            .path()
            .join(format!("subset.{}", flavor.extension()));

        tool::run(&self.program, Self::args(font, text, flavor, &output))?;

        if !output.is_file() {
            return Err(EmbedError::MissingToolOutput(output));
        }
        let bytes = std::fs::read(&output).map_err(|source| EmbedError::Io {
            path: output.clone(),
            source,
        })?;
        log::debug!(
            "{} produced {} bytes for {}",
            self.program.display(),
            bytes.len(),
            font.display()
        );
        Ok(bytes)
    }
}
