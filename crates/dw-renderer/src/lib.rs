//! Word-processing document to semantic HTML conversion.
//!
//! This crate walks a parsed [`DocumentModel`](dw_model::DocumentModel) and
//! produces one [`ConvertedDocument`](dw_model::ConvertedDocument) per
//! source: shell-wrapped HTML, title/subtitle metadata, a per-document CSS
//! bundle, and content-addressed binary assets.
//!
//! # Architecture
//!
//! - [`StyleRegistry`]: static table of the shell class and the four
//!   alignment classes. No runtime registration.
//! - [`AssetExtractor`]: per-conversion dedup of binary payloads by
//!   content-addressed key.
//! - `list`: groups a contiguous run of same-numbered paragraphs into a
//!   single `<ul>`.
//! - [`DocxConverter`]: the paragraph-by-paragraph walker tying it together.
//!
//! The whole pipeline is synchronous and pure: no I/O, no shared mutable
//! state. Converting a batch is an order-preserving parallel map
//! ([`DocxConverter::convert_all`]).
//!
//! # Example
//!
//! ```
//! use dw_model::{DocumentModel, SourceDocument};
//! use dw_renderer::{ConverterConfig, DocxConverter};
//!
//! let converter = DocxConverter::new(ConverterConfig::default());
//! let source = SourceDocument {
//!     path: "/docs/guide.docx".into(),
//!     relative_path: "guide.docx".into(),
//! };
//! let result = converter.convert(&DocumentModel::default(), &source);
//! assert!(result.html.contains("dw-shell"));
//! ```

mod assets;
mod converter;
mod inline;
mod list;
mod styles;
mod util;

pub use assets::AssetExtractor;
pub use converter::{ConverterConfig, DocxConverter};
pub use styles::StyleRegistry;
pub use util::escape_html;
