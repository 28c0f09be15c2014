//! End to end embedding against a font directory on disk.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use base64::{engine::general_purpose, Engine as _};
use pretty_assertions::assert_eq;
use svg_font_embed::{
    embed_font, embed_font_with, EmbedError, EmbedOptions, Flavor, Subsetter,
};
use tempfile::TempDir;

static SUBSET_BYTES: &[u8] = b"wOF2\x00\x01\x00\x00subset";

/// Returns fixed bytes and remembers every request it saw.
#[derive(Default)]
struct FakeSubsetter {
    calls: RefCell<Vec<(PathBuf, String, Flavor)>>,
}

impl Subsetter for FakeSubsetter {
    fn subset(&self, font: &Path, text: &str, flavor: Flavor) -> Result<Vec<u8>, EmbedError> {
        self.calls
            .borrow_mut()
            .push((font.to_owned(), text.to_owned(), flavor));
        Ok(SUBSET_BYTES.to_vec())
    }
}

struct Workspace {
    dir: TempDir,
    options: EmbedOptions,
}

impl Workspace {
    /// A scratch directory with `fonts/<name>/<name>.woff2` for each name.
    fn new(fonts: &[&str]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let fonts_root = dir.path().join("fonts");
        for name in fonts {
            let font_dir = fonts_root.join(name);
            fs::create_dir_all(&font_dir).unwrap();
            fs::write(font_dir.join(format!("{name}.woff2")), b"wOF2 full font").unwrap();
        }
        let options = EmbedOptions {
            fonts_root,
            ..Default::default()
        };
        Workspace { dir, options }
    }

    fn svg(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("score.svg");
        fs::write(&path, contents).unwrap();
        path
    }
}

fn style_for(family: &str) -> String {
    format!(
        "<style>@font-face{{font-family:\"{family}\";font-style:normal;font-weight:normal;\
         src:url(\"data:font/woff2;base64,{}\");}}</style>",
        general_purpose::STANDARD.encode(SUBSET_BYTES)
    )
}

#[test]
fn embeds_after_root_open_tag() {
    let ws = Workspace::new(&["Bravura"]);
    let svg = ws.svg("<svg><text>AB</text></svg>");
    let subsetter = FakeSubsetter::default();

    embed_font_with(&svg, "Bravura", &ws.options, &subsetter).unwrap();

    let calls = subsetter.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].0,
        ws.options.fonts_root.join("Bravura").join("Bravura.woff2")
    );
    assert_eq!(calls[0].1, "AB");
    assert_eq!(calls[0].2, Flavor::Woff2);

    let expected = format!("<svg>{}<text>AB</text></svg>", style_for("Bravura"));
    assert_eq!(fs::read_to_string(&svg).unwrap(), expected);
}

#[test]
fn filter_joins_text_in_document_order() {
    let ws = Workspace::new(&["Bravura"]);
    let svg = ws.svg(
        "<svg width=\"100\" height=\"40\">\n  <g>\n    <text x=\"0\">Do</text>\n    <text x=\"20\">Re</text>\n  </g>\n</svg>\n",
    );
    let subsetter = FakeSubsetter::default();

    embed_font_with(&svg, "Bravura", &ws.options, &subsetter).unwrap();

    assert_eq!(subsetter.calls.borrow()[0].1, "DoRe");
    let expected = format!(
        "<svg width=\"100\" height=\"40\">\n  {}<g>\n    <text x=\"0\">Do</text>\n    <text x=\"20\">Re</text>\n  </g>\n</svg>\n",
        style_for("Bravura")
    );
    assert_eq!(fs::read_to_string(&svg).unwrap(), expected);
}

#[test]
fn nested_markup_reaches_subsetter() {
    let ws = Workspace::new(&["Petaluma"]);
    let svg = ws.svg("<svg><text><tspan>\u{E0A4}</tspan>x</text></svg>");
    let subsetter = FakeSubsetter::default();

    embed_font_with(&svg, "Petaluma", &ws.options, &subsetter).unwrap();

    assert_eq!(subsetter.calls.borrow()[0].1, "<tspan>\u{E0A4}</tspan>x");
}

#[test]
fn no_text_still_embeds() {
    let ws = Workspace::new(&["Gonville"]);
    let svg = ws.svg("<svg><path d=\"M0 0L1 1\"/></svg>");
    let subsetter = FakeSubsetter::default();

    embed_font_with(&svg, "Gonville", &ws.options, &subsetter).unwrap();

    assert_eq!(subsetter.calls.borrow()[0].1, "");
    let expected = format!("<svg>{}<path d=\"M0 0L1 1\"/></svg>", style_for("Gonville"));
    assert_eq!(fs::read_to_string(&svg).unwrap(), expected);
}

#[test]
fn second_run_adds_second_style() {
    let ws = Workspace::new(&["Bravura"]);
    let svg = ws.svg("<svg><text>AB</text></svg>");
    let subsetter = FakeSubsetter::default();

    embed_font_with(&svg, "Bravura", &ws.options, &subsetter).unwrap();
    embed_font_with(&svg, "Bravura", &ws.options, &subsetter).unwrap();

    let style = style_for("Bravura");
    let out = fs::read_to_string(&svg).unwrap();
    assert_eq!(out.matches("<style>").count(), 2);
    assert_eq!(out, format!("<svg>{style}{style}<text>AB</text></svg>"));
}

#[test]
fn payload_round_trips() {
    let ws = Workspace::new(&["Bravura"]);
    let svg = ws.svg("<svg><text>\u{E050}</text></svg>");

    embed_font_with(&svg, "Bravura", &ws.options, &FakeSubsetter::default()).unwrap();

    let out = fs::read_to_string(&svg).unwrap();
    let payload = out
        .split_once(";base64,")
        .and_then(|(_, rest)| rest.split_once('"'))
        .map(|(payload, _)| payload)
        .unwrap();
    assert_eq!(
        general_purpose::STANDARD.decode(payload).unwrap(),
        SUBSET_BYTES
    );
}

#[test]
fn missing_font_leaves_svg_untouched() {
    let ws = Workspace::new(&["Bravura"]);
    let original = "<svg><text>AB</text></svg>";
    let svg = ws.svg(original);
    let subsetter = FakeSubsetter::default();

    let err = embed_font_with(&svg, "Leland", &ws.options, &subsetter).unwrap_err();

    match err {
        EmbedError::FontNotFound(path) => {
            assert_eq!(
                path,
                ws.options.fonts_root.join("Leland").join("Leland.woff2")
            )
        }
        other => panic!("unexpected error {other}"),
    }
    assert!(subsetter.calls.borrow().is_empty());
    assert_eq!(fs::read_to_string(&svg).unwrap(), original);
}

#[test]
fn missing_font_checked_before_running_tool() {
    let ws = Workspace::new(&[]);
    let svg = ws.svg("<svg><text>AB</text></svg>");
    let options = EmbedOptions {
        subsetter: PathBuf::from("/nonexistent/pyftsubset"),
        ..ws.options.clone()
    };

    let err = embed_font(&svg, "Bravura", &options).unwrap_err();
    assert!(matches!(err, EmbedError::FontNotFound(_)), "{err}");
}

#[test]
fn missing_svg() {
    let ws = Workspace::new(&["Bravura"]);
    let svg = ws.dir.path().join("absent.svg");

    let err = embed_font_with(&svg, "Bravura", &ws.options, &FakeSubsetter::default())
        .unwrap_err();

    assert!(matches!(err, EmbedError::Io { .. }), "{err}");
    assert!(!svg.exists());
}

#[test]
fn missing_root_leaves_file_untouched() {
    let ws = Workspace::new(&["Bravura"]);
    let original = "<html><text>AB</text></html>";
    let svg = ws.svg(original);

    let err = embed_font_with(&svg, "Bravura", &ws.options, &FakeSubsetter::default())
        .unwrap_err();

    assert!(matches!(err, EmbedError::MissingSvgRoot), "{err}");
    assert_eq!(fs::read_to_string(&svg).unwrap(), original);
}
