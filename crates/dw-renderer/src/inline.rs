//! Inline-content rendering.
//!
//! Renders a paragraph's inline nodes (runs, breaks, hyperlinks, drawings)
//! to HTML fragments. Holds mutable access to the per-conversion
//! [`AssetExtractor`] so image drawings can register their payloads as they
//! are encountered.

use std::fmt::Write;

use sha2::{Digest, Sha256};

use dw_model::{DocumentModel, Drawing, Hyperlink, InlineNode, Paragraph, RunContent, TextRun};

use crate::assets::AssetExtractor;
use crate::util::escape_html;

/// Key prefix for content-addressed image assets.
const IMAGES_PREFIX: &str = "docs/images";

/// EMU per point.
const EMU_PER_PT: f64 = 12700.0;

/// Formatting wrapper tags in fixed nesting order, outermost first.
const FORMAT_TAGS: [(fn(&dw_model::RunProps) -> bool, &str); 4] = [
    (|p| p.bold, "strong"),
    (|p| p.italic, "em"),
    (|p| p.underline, "u"),
    (|p| p.strike, "s"),
];

pub(crate) struct InlineRenderer<'a> {
    model: &'a DocumentModel,
    cdn_base: &'a str,
    assets: &'a mut AssetExtractor,
}

impl<'a> InlineRenderer<'a> {
    pub(crate) fn new(
        model: &'a DocumentModel,
        cdn_base: &'a str,
        assets: &'a mut AssetExtractor,
    ) -> Self {
        Self {
            model,
            cdn_base,
            assets,
        }
    }

    /// Render all inline content of a paragraph, trimmed of surrounding
    /// whitespace. May be empty.
    pub(crate) fn paragraph_content(&mut self, paragraph: &Paragraph) -> String {
        let mut out = String::new();
        for node in &paragraph.content {
            match node {
                InlineNode::Run(run) => out.push_str(&self.render_run(run)),
                InlineNode::Break => out.push_str("<br/>"),
                InlineNode::Hyperlink(link) => out.push_str(&self.render_hyperlink(link)),
            }
        }
        out.trim().to_owned()
    }

    /// Render one run, wrapping non-empty output in its formatting tags.
    ///
    /// Nesting order outer→inner is strong, em, u, s.
    fn render_run(&mut self, run: &TextRun) -> String {
        let mut text = String::new();
        for item in &run.content {
            match item {
                RunContent::Text(t) => text.push_str(&escape_html(t)),
                RunContent::Tab => text.push_str("&emsp;"),
                RunContent::Break => text.push_str("<br/>"),
                RunContent::Drawing(drawing) => text.push_str(&self.render_drawing(drawing)),
            }
        }
        if text.is_empty() {
            return text;
        }

        let mut open = String::new();
        let mut close = String::new();
        for (enabled, tag) in FORMAT_TAGS {
            if enabled(&run.props) {
                let _ = write!(open, "<{tag}>");
                close.insert_str(0, &format!("</{tag}>"));
            }
        }
        format!("{open}{text}{close}")
    }

    /// Render a hyperlink. The target resolves relationship-id first, then
    /// bookmark anchor, then empty; the href attribute is always present.
    fn render_hyperlink(&mut self, link: &Hyperlink) -> String {
        let href = link
            .rel_id
            .as_ref()
            .and_then(|id| self.model.relationships.get(id))
            .cloned()
            .or_else(|| link.anchor.as_ref().map(|anchor| format!("#{anchor}")))
            .unwrap_or_default();
        let text: String = link.runs.iter().map(|run| self.render_run(run)).collect();
        format!(r#"<a href="{}">{text}</a>"#, escape_html(&href))
    }

    /// Render a drawing: a video embed when it carries a resolvable click
    /// target, an `<img>` when it embeds a resolvable image, otherwise
    /// nothing.
    fn render_drawing(&mut self, drawing: &Drawing) -> String {
        if let Some(rel_id) = &drawing.click_rel_id
            && let Some(url) = self.model.relationships.get(rel_id)
        {
            return format!(
                r#"<div class="video-container"><iframe src="{}" frameborder="0" allowfullscreen></iframe></div>"#,
                escape_html(url)
            );
        }

        let Some(rel_id) = &drawing.image_rel_id else {
            return String::new();
        };
        let Some(part) = self.model.images.get(rel_id) else {
            tracing::warn!(rel_id = %rel_id, "image relationship not found, skipping drawing");
            return String::new();
        };

        let digest = hex::encode(Sha256::digest(&part.bytes));
        let key = format!("{IMAGES_PREFIX}/{digest}{}", normalize_extension(&part.extension));
        self.assets.register(&key, &part.bytes, &part.content_type);

        // Zero extents count as absent, same as a missing extent element.
        let mut style = String::new();
        if let Some(width) = drawing.width_emu.filter(|&emu| emu > 0) {
            let _ = write!(style, "width:{:.2}pt;", emu_to_pt(width));
        }
        if let Some(height) = drawing.height_emu.filter(|&emu| emu > 0) {
            let _ = write!(style, "height:{:.2}pt;", emu_to_pt(height));
        }
        let style_attr = if style.is_empty() {
            String::new()
        } else {
            format!(r#" style="{style}""#)
        };
        format!(r#"<img src="{}/{key}"{style_attr} alt=""/>"#, self.cdn_base)
    }
}

#[allow(clippy::cast_precision_loss)]
fn emu_to_pt(emu: u64) -> f64 {
    emu as f64 / EMU_PER_PT
}

/// Ensure a non-empty extension carries its leading dot; empty stays empty.
fn normalize_extension(extension: &str) -> String {
    if extension.is_empty() || extension.starts_with('.') {
        extension.to_owned()
    } else {
        format!(".{extension}")
    }
}
