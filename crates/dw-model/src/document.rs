//! Parsed word-processing document model.
//!
//! These types form the input boundary of the conversion core: an external
//! parser is responsible for producing a [`DocumentModel`] from a source
//! file. The model is a plain in-memory tree — paragraphs holding inline
//! nodes, with document-wide relationship maps for hyperlink targets and
//! embedded image parts.

use std::collections::HashMap;
use std::path::PathBuf;

/// Reference to a source document discovered by the external scanner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceDocument {
    /// Absolute path to the source file.
    pub path: PathBuf,
    /// Path relative to the scan root. Drives output naming and hierarchy
    /// placement.
    pub relative_path: PathBuf,
}

/// Paragraph alignment as declared in the source document.
///
/// Paragraphs carry `Option<Alignment>`; a missing value falls back to
/// justified rendering downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
    Justify,
}

/// Numbering descriptor identifying a paragraph's logical list membership.
///
/// Two paragraphs belong to the same list run iff both `num_id` and `level`
/// are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberingRef {
    /// Numbering definition id.
    pub num_id: u32,
    /// Indent level within the definition (0-based).
    pub level: u32,
}

/// Formatting flags on a text run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunProps {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
}

/// A drawing anchored in a run: either a click-through embed or an inline
/// image, addressed through the document's relationship maps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Drawing {
    /// Relationship id of a click target, if the drawing is wrapped in a
    /// hyperlink (used for video embeds).
    pub click_rel_id: Option<String>,
    /// Relationship id of an embedded image part.
    pub image_rel_id: Option<String>,
    /// Native width in EMU (1 pt = 12700 EMU), when the source declares an
    /// extent.
    pub width_emu: Option<u64>,
    /// Native height in EMU, when the source declares an extent.
    pub height_emu: Option<u64>,
}

/// Content item inside a text run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunContent {
    /// Literal text.
    Text(String),
    /// Horizontal tab.
    Tab,
    /// Explicit line break.
    Break,
    /// Anchored drawing.
    Drawing(Drawing),
}

/// A formatted text run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextRun {
    pub props: RunProps,
    pub content: Vec<RunContent>,
}

/// A hyperlink wrapping one or more runs.
///
/// The target is resolved in order: `rel_id` through the document's
/// relationship map, then `anchor` as an internal bookmark, then empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hyperlink {
    pub rel_id: Option<String>,
    pub anchor: Option<String>,
    pub runs: Vec<TextRun>,
}

/// Paragraph-level inline node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InlineNode {
    Run(TextRun),
    Break,
    Hyperlink(Hyperlink),
}

/// One paragraph of the document body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Style name as declared in the source (e.g. "Heading 2", "Title").
    pub style: Option<String>,
    pub alignment: Option<Alignment>,
    /// List membership, if the paragraph is numbered.
    pub numbering: Option<NumberingRef>,
    pub content: Vec<InlineNode>,
}

impl Paragraph {
    /// Plain text of the paragraph, for heading/title extraction.
    ///
    /// Concatenates run text (hyperlink runs included), mapping tabs to `\t`
    /// and breaks to `\n`. Drawings contribute nothing.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.content {
            match node {
                InlineNode::Run(run) => push_run_text(run, &mut out),
                InlineNode::Break => out.push('\n'),
                InlineNode::Hyperlink(link) => {
                    for run in &link.runs {
                        push_run_text(run, &mut out);
                    }
                }
            }
        }
        out
    }

    /// Normalized lowercase style name, empty when no style is set.
    pub fn style_name(&self) -> String {
        self.style.as_deref().unwrap_or("").to_lowercase()
    }
}

fn push_run_text(run: &TextRun, out: &mut String) {
    for item in &run.content {
        match item {
            RunContent::Text(text) => out.push_str(text),
            RunContent::Tab => out.push('\t'),
            RunContent::Break => out.push('\n'),
            RunContent::Drawing(_) => {}
        }
    }
}

/// An embedded binary image part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePart {
    pub bytes: Vec<u8>,
    /// MIME content type (e.g. "image/png").
    pub content_type: String,
    /// Source file extension, with or without leading dot; may be empty.
    pub extension: String,
}

/// Parsed document: ordered paragraphs plus document-wide relationship maps.
#[derive(Clone, Debug, Default)]
pub struct DocumentModel {
    pub paragraphs: Vec<Paragraph>,
    /// Relationship id → external target URL (hyperlinks, click targets).
    pub relationships: HashMap<String, String>,
    /// Relationship id → embedded image part.
    pub images: HashMap<String, ImagePart>,
}
