//! The generated `@font-face` style block.

use base64::{engine::general_purpose, Engine as _};

use crate::Flavor;

/// A font face whose data is carried inline as a `data:` URI.
#[derive(Clone, Debug)]
pub struct FontFace<'a> {
    pub family: &'a str,
    pub flavor: Flavor,
    pub data: &'a [u8],
}

impl<'a> FontFace<'a> {
    pub fn new(family: &'a str, flavor: Flavor, data: &'a [u8]) -> Self {
        Self {
            family,
            flavor,
            data,
        }
    }

    /// `data:<mime>;base64,<payload>`
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.flavor.mime_type(),
            general_purpose::STANDARD.encode(self.data)
        )
    }

    /// A complete `<style>` element holding a single `@font-face` rule.
    pub fn to_style_element(&self) -> String {
        format!(
            "<style>@font-face{{font-family:\"{}\";font-style:normal;font-weight:normal;src:url(\"{}\");}}</style>",
            self.family,
            self.data_uri()
        )
    }
}
