//! binary embedding tool
//!
//! Embeds a subset of a web font, limited to the characters the document's
//! `<text>` elements use, into an SVG file. Also converts fonts between
//! formats by file extension.

use std::path::PathBuf;

use clap::Parser;
use svg_font_embed::{
    convert_font, embed_font, ConvertOptions, EmbedOptions, Flavor, DEFAULT_CONVERTER,
    DEFAULT_FONTS_ROOT, DEFAULT_SUBSETTER,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

/// The web font format of the embedded subset.
#[derive(clap::ValueEnum, Copy, Clone, Default, Debug)]
enum FlavorArg {
    Woff,
    #[default]
    Woff2,
}

impl From<FlavorArg> for Flavor {
    fn from(arg: FlavorArg) -> Self {
        match arg {
            FlavorArg::Woff => Flavor::Woff,
            FlavorArg::Woff2 => Flavor::Woff2,
        }
    }
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Embed a subset of a font into an SVG file, in place
    Embed {
        /// The SVG file to modify
        svg: PathBuf,
        /// Name of the font, used to find `<fonts-root>/<name>/<name>.woff2`
        font_name: String,
        /// Directory containing the font directories
        #[arg(long, default_value = DEFAULT_FONTS_ROOT)]
        fonts_root: PathBuf,
        /// The subsetting program
        #[arg(long, default_value = DEFAULT_SUBSETTER)]
        subsetter: PathBuf,
        /// Format of the embedded subset
        #[arg(long, value_enum, default_value_t)]
        flavor: FlavorArg,
    },
    /// Convert a font to the format named by the destination's extension
    Convert {
        /// The input font file
        source: PathBuf,
        /// The output font file
        dest: PathBuf,
        /// The font editor used for conversion
        #[arg(long, default_value = DEFAULT_CONVERTER)]
        converter: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = match args.command {
        Command::Embed {
            svg,
            font_name,
            fonts_root,
            subsetter,
            flavor,
        } => {
            let options = EmbedOptions {
                fonts_root,
                subsetter,
                flavor: flavor.into(),
            };
            embed_font(&svg, &font_name, &options)
        }
        Command::Convert {
            source,
            dest,
            converter,
        } => convert_font(&source, &dest, &ConvertOptions { converter }),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
