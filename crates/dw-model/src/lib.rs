//! Document model and conversion artifacts for docweave.
//!
//! This crate defines the two boundaries of the conversion core:
//! - [`DocumentModel`] and friends: the parsed word-processing document as
//!   supplied by an external parser (paragraphs, runs, drawings, hyperlinks,
//!   relationship maps).
//! - [`ConvertedDocument`], [`CssBundle`], [`AssetUpload`]: the immutable
//!   conversion results consumed by external sync/storage collaborators.
//!
//! All inline-element kinds are closed enums with exhaustive matching; there
//! is no open-ended runtime type inspection anywhere in the pipeline.

pub(crate) mod artifacts;
pub(crate) mod document;

pub use artifacts::{AssetUpload, ConvertedDocument, CssBundle};
pub use document::{
    Alignment, DocumentModel, Drawing, Hyperlink, ImagePart, InlineNode, NumberingRef, Paragraph,
    RunContent, RunProps, SourceDocument, TextRun,
};
