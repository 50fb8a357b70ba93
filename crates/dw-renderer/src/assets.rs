//! Content-addressed asset deduplication.
//!
//! One extractor lives for the duration of a single document conversion;
//! dedup does not span documents. Keys are derived by the walker from a
//! content hash, so identical bytes always land on the same key and are
//! registered at most once.

use std::collections::HashSet;

use dw_model::AssetUpload;

/// Deduplicating collector for binary assets discovered during one
/// conversion.
#[derive(Debug, Default)]
pub struct AssetExtractor {
    keys: HashSet<String>,
    uploads: Vec<AssetUpload>,
}

impl AssetExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset under a content-addressed key.
    ///
    /// Returns `true` iff this call was the first for the key. Repeat
    /// registrations are no-ops; the caller keeps its renderable reference
    /// either way.
    pub fn register(&mut self, key: &str, body: &[u8], content_type: &str) -> bool {
        if !self.keys.insert(key.to_owned()) {
            return false;
        }
        self.uploads.push(AssetUpload {
            key: key.to_owned(),
            body: body.to_vec(),
            content_type: content_type.to_owned(),
        });
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.uploads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uploads.is_empty()
    }

    /// Consume the extractor, yielding uploads in first-registration order.
    #[must_use]
    pub fn into_uploads(self) -> Vec<AssetUpload> {
        self.uploads
    }
}
