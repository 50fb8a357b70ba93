//! Hierarchy construction and serialization.
//!
//! Nodes are stored in a flat vector with parent/child relationships tracked
//! by indices; a `HashMap` gives O(1) page-URL lookups. Index 0 is the
//! implicit root: it anchors top-level pages, is excluded from the URL index
//! and never receives title or description.

use std::collections::HashMap;

use serde::Serialize;

use dw_model::ConvertedDocument;

/// URL prefix for all hierarchy pages.
const PREFIX: &str = "docs/";

/// Error raised when hierarchy records cannot be serialized.
#[derive(Debug, thiserror::Error)]
pub enum HierarchyError {
    #[error("failed to serialize hierarchy records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One site-map path segment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HierarchyNode {
    /// Unique page URL (`docs/` + joined path segments).
    pub page_url: String,
    /// Title of the document at this exact path, empty otherwise.
    pub page_title: String,
    /// Subtitle of the document at this exact path, empty otherwise.
    pub page_description: String,
}

/// JSON-shaped node record matching the external metadata schema.
///
/// Field names and optional-field omission are bit-exact requirements for
/// the downstream consumer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    #[serde(rename = "pageUrl")]
    pub page_url: String,
    #[serde(rename = "pageTitle", skip_serializing_if = "String::is_empty")]
    pub page_title: String,
    #[serde(rename = "pageDescription", skip_serializing_if = "String::is_empty")]
    pub page_description: String,
    #[serde(rename = "childPages", skip_serializing_if = "Vec::is_empty")]
    pub child_pages: Vec<PageRecord>,
}

/// Site map folded from the converted-document set.
#[derive(Debug)]
pub struct Hierarchy {
    /// Flat node storage; index 0 is the implicit root.
    nodes: Vec<HierarchyNode>,
    /// Child indices per node, in first-discovery order.
    children: Vec<Vec<usize>>,
    /// Page URL → node index. The root has no URL and no entry.
    index: HashMap<String, usize>,
}

impl Default for Hierarchy {
    /// An empty hierarchy: just the implicit root, no pages.
    fn default() -> Self {
        Self {
            nodes: vec![HierarchyNode::default()],
            children: vec![Vec::new()],
            index: HashMap::new(),
        }
    }
}

impl Hierarchy {
    /// Fold a document set into a hierarchy.
    ///
    /// Per document: strip the extension from the relative path, split into
    /// segments, and reject the whole document if any segment contains a
    /// character outside letters, digits, `_`, `-` and `.` — a rejected
    /// document contributes no nodes at all. Accepted documents create or
    /// reuse one node per accumulated URL prefix; the full-path node
    /// receives the document's title and subtitle.
    #[must_use]
    pub fn build(documents: &[ConvertedDocument]) -> Self {
        let mut hierarchy = Self::default();

        for document in documents {
            let stripped = document.relative_path.with_extension("");
            let segments: Vec<String> = stripped
                .components()
                .filter_map(|component| match component {
                    std::path::Component::Normal(segment) => {
                        Some(segment.to_string_lossy().into_owned())
                    }
                    _ => None,
                })
                .collect();
            if segments.is_empty() {
                continue;
            }
            if !segments.iter().all(|segment| is_safe_segment(segment)) {
                tracing::warn!(
                    path = %document.relative_path.display(),
                    "unsafe path segment, document excluded from hierarchy"
                );
                continue;
            }

            let mut parent = 0;
            let mut accumulated = String::new();
            for segment in &segments {
                if !accumulated.is_empty() {
                    accumulated.push('/');
                }
                accumulated.push_str(segment);
                let url = format!("{PREFIX}{accumulated}");
                parent = hierarchy.node_for(url, parent);
            }

            // `parent` is now the full-path node; it cannot be the root
            // since at least one segment was consumed.
            hierarchy.nodes[parent].page_title = document.title.clone();
            hierarchy.nodes[parent].page_description = document.subtitle.clone();
        }

        hierarchy
    }

    /// Look up or create the node for `url`, attaching new nodes under
    /// `parent` in discovery order.
    fn node_for(&mut self, url: String, parent: usize) -> usize {
        if let Some(&existing) = self.index.get(&url) {
            return existing;
        }
        let idx = self.nodes.len();
        self.nodes.push(HierarchyNode {
            page_url: url.clone(),
            ..HierarchyNode::default()
        });
        self.children.push(Vec::new());
        self.index.insert(url, idx);
        self.children[parent].push(idx);
        idx
    }

    /// Number of pages (the implicit root is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.index.contains_key(url)
    }

    #[must_use]
    pub fn node(&self, url: &str) -> Option<&HierarchyNode> {
        self.index.get(url).map(|&idx| &self.nodes[idx])
    }

    /// All pages in first-discovery order, root excluded.
    pub fn pages(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes.iter().skip(1)
    }

    /// Page URLs in first-discovery order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.pages().map(|node| node.page_url.as_str())
    }

    /// Deep JSON-shaped record for one page.
    #[must_use]
    pub fn record(&self, url: &str) -> Option<PageRecord> {
        self.index.get(url).map(|&idx| self.record_at(idx))
    }

    fn record_at(&self, idx: usize) -> PageRecord {
        let node = &self.nodes[idx];
        PageRecord {
            page_url: node.page_url.clone(),
            page_title: node.page_title.clone(),
            page_description: node.page_description.clone(),
            child_pages: self.children[idx]
                .iter()
                .map(|&child| self.record_at(child))
                .collect(),
        }
    }

    fn child_records(&self, idx: usize) -> Vec<PageRecord> {
        self.children[idx]
            .iter()
            .map(|&child| self.record_at(child))
            .collect()
    }

    /// JSON array of a page's children, in the external metadata schema.
    pub fn child_pages_json(&self, url: &str) -> Result<String, HierarchyError> {
        let records = self
            .index
            .get(url)
            .map(|&idx| self.child_records(idx))
            .unwrap_or_default();
        Ok(serde_json::to_string(&records)?)
    }

    /// JSON array of the top-level pages.
    pub fn root_children_json(&self) -> Result<String, HierarchyError> {
        Ok(serde_json::to_string(&self.child_records(0))?)
    }
}

/// A segment is safe iff non-empty and made of letters, digits, `_`, `-`
/// and `.` only.
fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document(relative: &str, title: &str, subtitle: &str) -> ConvertedDocument {
        ConvertedDocument {
            source: format!("/scan/{relative}").into(),
            relative_path: relative.into(),
            html: String::new(),
            title: title.to_owned(),
            subtitle: subtitle.to_owned(),
            css_bundle: None,
            assets: Vec::new(),
        }
    }

    #[test]
    fn nested_paths_chain_parent_to_child() {
        let documents = vec![
            document("a.docx", "A", ""),
            document("a/b.docx", "B", ""),
            document("a/b/c.docx", "C", ""),
        ];
        let hierarchy = Hierarchy::build(&documents);

        assert_eq!(hierarchy.len(), 3);
        for (url, title) in [("docs/a", "A"), ("docs/a/b", "B"), ("docs/a/b/c", "C")] {
            let node = hierarchy.node(url).expect(url);
            assert_eq!(node.page_title, title);
        }

        let root = hierarchy.root_children_json().expect("json");
        assert_eq!(
            root,
            r#"[{"pageUrl":"docs/a","pageTitle":"A","childPages":[{"pageUrl":"docs/a/b","pageTitle":"B","childPages":[{"pageUrl":"docs/a/b/c","pageTitle":"C"}]}]}]"#
        );
    }

    #[test]
    fn intermediate_nodes_are_created_without_titles() {
        let documents = vec![document("guides/setup/install.docx", "Install", "")];
        let hierarchy = Hierarchy::build(&documents);

        assert_eq!(hierarchy.len(), 3);
        assert_eq!(hierarchy.node("docs/guides").expect("node").page_title, "");
        assert_eq!(
            hierarchy
                .node("docs/guides/setup/install")
                .expect("node")
                .page_title,
            "Install"
        );
    }

    #[test]
    fn unsafe_segment_excludes_whole_document() {
        let documents = vec![document("a b/c.docx", "Bad", "")];
        let hierarchy = Hierarchy::build(&documents);
        assert!(hierarchy.is_empty());
        // No partial node for the leading safe segment either.
        assert!(!hierarchy.contains("docs/a b"));
    }

    #[test]
    fn unsafe_document_does_not_disturb_others() {
        let documents = vec![
            document("ok.docx", "Ok", ""),
            document("bad name.docx", "Bad", ""),
        ];
        let hierarchy = Hierarchy::build(&documents);
        assert_eq!(hierarchy.len(), 1);
        assert!(hierarchy.contains("docs/ok"));
    }

    #[test]
    fn children_keep_first_discovery_order() {
        let documents = vec![
            document("zebra.docx", "Z", ""),
            document("alpha.docx", "A", ""),
            document("mid.docx", "M", ""),
        ];
        let hierarchy = Hierarchy::build(&documents);
        let urls: Vec<_> = hierarchy.urls().collect();
        assert_eq!(urls, vec!["docs/zebra", "docs/alpha", "docs/mid"]);

        let json = hierarchy.root_children_json().expect("json");
        let zebra = json.find("docs/zebra").expect("zebra");
        let alpha = json.find("docs/alpha").expect("alpha");
        assert!(zebra < alpha);
    }

    #[test]
    fn record_omits_empty_optional_fields() {
        let documents = vec![document("a/b.docx", "B", "About b")];
        let hierarchy = Hierarchy::build(&documents);

        let parent = hierarchy.record("docs/a").expect("record");
        let json = serde_json::to_string(&parent).expect("json");
        assert_eq!(
            json,
            r#"{"pageUrl":"docs/a","childPages":[{"pageUrl":"docs/a/b","pageTitle":"B","pageDescription":"About b"}]}"#
        );
    }

    #[test]
    fn child_pages_json_for_leaf_is_empty_array() {
        let documents = vec![document("a.docx", "A", "")];
        let hierarchy = Hierarchy::build(&documents);
        assert_eq!(hierarchy.child_pages_json("docs/a").expect("json"), "[]");
        assert_eq!(hierarchy.child_pages_json("docs/missing").expect("json"), "[]");
    }

    #[test]
    fn later_document_at_same_path_updates_metadata() {
        let documents = vec![
            document("a.docx", "First", ""),
            document("a.docx", "Second", "desc"),
        ];
        let hierarchy = Hierarchy::build(&documents);
        assert_eq!(hierarchy.len(), 1);
        let node = hierarchy.node("docs/a").expect("node");
        assert_eq!(node.page_title, "Second");
        assert_eq!(node.page_description, "desc");
    }

    #[test]
    fn default_hierarchy_carries_the_implicit_root() {
        let hierarchy = Hierarchy::default();
        assert_eq!(hierarchy.len(), 0);
        assert!(hierarchy.is_empty());
        assert_eq!(hierarchy.urls().count(), 0);
        assert_eq!(hierarchy.root_children_json().expect("json"), "[]");
    }

    #[test]
    fn empty_document_set_builds_empty_hierarchy() {
        let hierarchy = Hierarchy::build(&[]);
        assert!(hierarchy.is_empty());
        assert_eq!(hierarchy.root_children_json().expect("json"), "[]");
    }
}
