//! Immutable conversion artifacts.
//!
//! Everything here is created once per `convert` call and handed to external
//! sync/storage collaborators; nothing is mutated after construction.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Named CSS rule set attached to a converted document.
///
/// Rules are keyed by class name; `BTreeMap` keeps serialization
/// class-sorted, which downstream diffing/caching relies on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssBundle {
    /// Bundle name, shared with the document's stylesheet link.
    pub name: String,
    /// Class name → declaration block.
    pub rules: BTreeMap<String, String>,
}

impl CssBundle {
    /// Canonical text form: newline-joined `.<class> {<declaration>}` lines,
    /// classes lexicographically sorted.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.rules
            .iter()
            .map(|(class, decl)| format!(".{class} {{{decl}}}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One deduplicated binary asset discovered during conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetUpload {
    /// Content-addressed storage key (identical bytes ⇒ identical key).
    pub key: String,
    /// Raw payload.
    pub body: Vec<u8>,
    /// MIME content type.
    pub content_type: String,
}

/// Result of converting one source document.
#[derive(Clone, Debug)]
pub struct ConvertedDocument {
    /// Absolute path of the source file.
    pub source: PathBuf,
    /// Path relative to the scan root.
    pub relative_path: PathBuf,
    /// Full document HTML (stylesheet link + shell-wrapped body).
    pub html: String,
    /// Title from the first heading/title paragraph, empty if none.
    pub title: String,
    /// Subtitle from the first subtitle paragraph, empty if none.
    pub subtitle: String,
    /// CSS bundle for the document, when one was produced.
    pub css_bundle: Option<CssBundle>,
    /// Deduplicated assets in first-reference order.
    pub assets: Vec<AssetUpload>,
}
