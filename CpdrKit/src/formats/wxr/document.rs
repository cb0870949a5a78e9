//! WXR document structures
//!
//! These hold the raw text of the handful of elements the extractor cares
//! about. Nothing here is filtered or normalised yet.

use serde::{Deserialize, Serialize};

/// The `<item>` elements of a WordPress export, in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WxrDocument {
    pub items: Vec<RawItem>,
}

/// One `<item>` (post, page, attachment or custom post type entry).
///
/// `None` means the element was absent; an empty element is `Some("")`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawItem {
    /// Text of the first `<title>` child.
    pub title: Option<String>,
    /// Text of the first `wp:post_type` child.
    pub post_type: Option<String>,
    /// Text of the first `wp:status` child.
    pub status: Option<String>,
    /// Every `<category>` child, in order.
    pub categories: Vec<RawCategory>,
    /// Every `wp:postmeta` child, in order.
    pub postmeta: Vec<RawMeta>,
}

/// A `<category domain="...">` element.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawCategory {
    /// The `domain` attribute (taxonomy name).
    pub domain: Option<String>,
    /// Term name.
    pub value: String,
}

/// A `wp:postmeta` element with its `wp:meta_key` / `wp:meta_value` children.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawMeta {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl WxrDocument {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl RawCategory {
    pub fn new(domain: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            value: value.into(),
        }
    }
}

impl RawMeta {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}
