//! Site hierarchy built from converted documents.
//!
//! Folds the full set of [`ConvertedDocument`](dw_model::ConvertedDocument)
//! results into a forest of site-map nodes keyed by page URL, and serializes
//! them into the fixed external metadata schema
//! (`{pageUrl, pageTitle?, pageDescription?, childPages?}`).
//!
//! The fold is order-dependent: children are appended in first-discovery
//! order over the document iteration, so callers converting in parallel must
//! re-sequence results into input order before building (which
//! `dw_renderer::DocxConverter::convert_all` already guarantees).

pub(crate) mod hierarchy;

pub use hierarchy::{Hierarchy, HierarchyError, HierarchyNode, PageRecord};
