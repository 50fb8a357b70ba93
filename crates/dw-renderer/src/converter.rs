//! Document model walker.
//!
//! Walks a parsed document paragraph by paragraph with an explicit cursor —
//! list grouping consumes a variable number of paragraphs as one unit, so a
//! plain fold is not enough. Heading, title and subtitle styles feed the
//! document metadata; everything else renders through the inline renderer.

use std::path::{Component, Path};

use rayon::prelude::*;

use dw_model::{ConvertedDocument, CssBundle, DocumentModel, SourceDocument};

use crate::assets::AssetExtractor;
use crate::inline::InlineRenderer;
use crate::list::build_list;
use crate::styles::StyleRegistry;
use crate::util::escape_html;

/// Key prefix for per-document stylesheet assets.
const STYLES_PREFIX: &str = "docs/styles";

/// Converter configuration.
#[derive(Clone, Debug, Default)]
pub struct ConverterConfig {
    /// Base URL prepended to asset and stylesheet references. Empty means
    /// site-root-relative URLs (`/docs/images/…`).
    pub cdn_base: String,
}

/// Converts parsed document models to [`ConvertedDocument`] artifacts.
///
/// Holds only immutable state (the static style registry and config), so a
/// single converter can serve a whole batch, in parallel if desired.
#[derive(Clone, Debug)]
pub struct DocxConverter {
    registry: StyleRegistry,
    config: ConverterConfig,
}

impl DocxConverter {
    #[must_use]
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            registry: StyleRegistry::new(),
            config,
        }
    }

    /// Convert one document model.
    ///
    /// Pure and synchronous: depends only on `model`, `source` and the
    /// static registry. Malformed-but-well-typed input degrades gracefully
    /// (missing alignment, unresolved targets, unparsable heading levels all
    /// have fallbacks) rather than failing.
    #[must_use]
    pub fn convert(&self, model: &DocumentModel, source: &SourceDocument) -> ConvertedDocument {
        let mut body_fragments: Vec<String> = Vec::new();
        let mut title = String::new();
        let mut subtitle = String::new();
        let mut assets = AssetExtractor::new();
        let mut renderer = InlineRenderer::new(model, &self.config.cdn_base, &mut assets);

        let paragraphs = &model.paragraphs;
        let mut index = 0;
        while index < paragraphs.len() {
            let paragraph = &paragraphs[index];
            let style = paragraph.style_name();

            if style.starts_with("heading") {
                let level = heading_level(&style);
                let text = paragraph.text();
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    body_fragments.push(format!("<h{level}>{}</h{level}>", escape_html(trimmed)));
                }
                if title.is_empty() {
                    title = trimmed.to_owned();
                }
                index += 1;
                continue;
            }

            // Title/subtitle paragraphs set metadata once and never render.
            if style == "title" {
                if title.is_empty() {
                    title = paragraph.text().trim().to_owned();
                }
                index += 1;
                continue;
            }
            if style == "subtitle" {
                if subtitle.is_empty() {
                    subtitle = paragraph.text().trim().to_owned();
                }
                index += 1;
                continue;
            }

            if let Some(seed) = paragraph.numbering {
                let (list_html, consumed) = build_list(paragraphs, index, seed, &mut renderer);
                body_fragments.push(list_html);
                index += consumed;
                continue;
            }

            let content = renderer.paragraph_content(paragraph);
            let class = self.registry.alignment_class(paragraph.alignment);
            body_fragments.push(format!(r#"<p class="{class}">{content}</p>"#));
            index += 1;
        }

        let html_body = body_fragments
            .iter()
            .filter(|fragment| !fragment.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");
        let shell_class = self.registry.shell_class();
        let body_html = format!("<div class=\"{shell_class}\">\n{html_body}\n</div>");

        let css_bundle = CssBundle {
            name: css_name(&source.relative_path),
            rules: self.registry.rules(),
        };
        let css_href = format!(
            "{}/{STYLES_PREFIX}/{}.css",
            self.config.cdn_base, css_bundle.name
        );
        let head_fragment = format!(r#"<link rel="stylesheet" href="{css_href}"/>"#);
        let html = format!("{head_fragment}\n{body_html}");

        let uploads = assets.into_uploads();
        tracing::debug!(
            source = %source.relative_path.display(),
            paragraphs = paragraphs.len(),
            assets = uploads.len(),
            "document converted"
        );

        ConvertedDocument {
            source: source.path.clone(),
            relative_path: source.relative_path.clone(),
            html,
            title,
            subtitle,
            css_bundle: Some(css_bundle),
            assets: uploads,
        }
    }

    /// Convert a batch in parallel, preserving input order in the result.
    ///
    /// Each conversion is independent (per-document asset dedup, read-only
    /// registry), so this is a plain parallel map.
    #[must_use]
    pub fn convert_all(
        &self,
        inputs: &[(SourceDocument, DocumentModel)],
    ) -> Vec<ConvertedDocument> {
        inputs
            .par_iter()
            .map(|(source, model)| self.convert(model, source))
            .collect()
    }
}

/// Heading level from a lowercase style name, clamped to 1..=6.
///
/// An unparsable suffix (including none at all) defaults to 1. A numeric
/// suffix too large to parse still clamps to 6.
fn heading_level(style: &str) -> u8 {
    let suffix = style.strip_prefix("heading").map(str::trim).unwrap_or("");
    match suffix.parse::<u128>() {
        Ok(level) => u8::try_from(level.clamp(1, 6)).unwrap_or(1),
        // Overflowed all-digit suffixes are huge positive levels.
        Err(_) if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) => 6,
        Err(_) => 1,
    }
}

/// Stylesheet bundle name: extension-stripped relative path segments,
/// hyphen-joined.
fn css_name(relative_path: &Path) -> String {
    relative_path
        .with_extension("")
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("-")
}
