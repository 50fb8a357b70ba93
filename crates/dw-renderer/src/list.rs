//! List-run grouping.
//!
//! A contiguous run of paragraphs sharing one numbering identity (same
//! numbering id and indent level) collapses into a single `<ul>`. The walker
//! hands over its cursor; the builder reports how many paragraphs it
//! consumed so the cursor can skip past the whole run.
//!
//! Lists always render unordered. The numbering descriptor does not carry a
//! list-type flag, so ordered lists are not distinguished here.

use dw_model::{NumberingRef, Paragraph};

use crate::inline::InlineRenderer;

/// Build a `<ul>` from the maximal run of paragraphs starting at `start`
/// whose numbering equals `seed` exactly.
///
/// Returns the list markup and the number of paragraphs consumed. The
/// paragraph at `start` is expected to match `seed`, so the count is at
/// least 1 in practice.
pub(crate) fn build_list(
    paragraphs: &[Paragraph],
    start: usize,
    seed: NumberingRef,
    renderer: &mut InlineRenderer<'_>,
) -> (String, usize) {
    let mut lines = vec!["<ul>".to_owned()];
    let mut index = start;
    while let Some(paragraph) = paragraphs.get(index) {
        if paragraph.numbering != Some(seed) {
            break;
        }
        let content = renderer.paragraph_content(paragraph);
        lines.push(format!("<li>{content}</li>"));
        index += 1;
    }
    lines.push("</ul>".to_owned());
    (lines.join("\n"), index - start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dw_model::{DocumentModel, InlineNode, RunContent, RunProps, TextRun};
    use pretty_assertions::assert_eq;

    use crate::assets::AssetExtractor;

    fn item(text: &str, num_id: u32, level: u32) -> Paragraph {
        Paragraph {
            numbering: Some(NumberingRef { num_id, level }),
            content: vec![InlineNode::Run(TextRun {
                props: RunProps::default(),
                content: vec![RunContent::Text(text.to_owned())],
            })],
            ..Paragraph::default()
        }
    }

    fn plain(text: &str) -> Paragraph {
        Paragraph {
            content: vec![InlineNode::Run(TextRun {
                props: RunProps::default(),
                content: vec![RunContent::Text(text.to_owned())],
            })],
            ..Paragraph::default()
        }
    }

    fn build(paragraphs: &[Paragraph], start: usize, seed: NumberingRef) -> (String, usize) {
        let model = DocumentModel::default();
        let mut assets = AssetExtractor::new();
        let mut renderer = InlineRenderer::new(&model, "", &mut assets);
        build_list(paragraphs, start, seed, &mut renderer)
    }

    #[test]
    fn consumes_maximal_matching_run() {
        let mut paragraphs = vec![plain("intro"), plain("more"), plain("text")];
        for i in 0..5 {
            paragraphs.push(item(&format!("item {i}"), 7, 0));
        }
        paragraphs.push(plain("after"));

        let (html, consumed) = build(&paragraphs, 3, NumberingRef { num_id: 7, level: 0 });
        assert_eq!(consumed, 5);
        assert_eq!(html.matches("<li>").count(), 5);
        assert!(html.starts_with("<ul>\n<li>item 0</li>"));
        assert!(html.ends_with("<li>item 4</li>\n</ul>"));
    }

    #[test]
    fn stops_at_level_change() {
        let paragraphs = vec![item("a", 3, 0), item("b", 3, 0), item("nested", 3, 1)];
        let (html, consumed) = build(&paragraphs, 0, NumberingRef { num_id: 3, level: 0 });
        assert_eq!(consumed, 2);
        assert_eq!(html, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
    }

    #[test]
    fn stops_at_numbering_id_change() {
        let paragraphs = vec![item("a", 3, 0), item("b", 4, 0)];
        let (_, consumed) = build(&paragraphs, 0, NumberingRef { num_id: 3, level: 0 });
        assert_eq!(consumed, 1);
    }

    #[test]
    fn run_may_end_at_input_end() {
        let paragraphs = vec![item("only", 1, 0)];
        let (html, consumed) = build(&paragraphs, 0, NumberingRef { num_id: 1, level: 0 });
        assert_eq!(consumed, 1);
        assert_eq!(html, "<ul>\n<li>only</li>\n</ul>");
    }
}
