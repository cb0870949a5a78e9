//! File format handlers
//!
//! Only the WordPress eXtended RSS (WXR) export is read here; CSV output is
//! written by [`crate::converter`].

pub mod wxr;

// Re-export main document types
pub use wxr::{RawCategory, RawItem, RawMeta, WxrDocument, parse_wxr, read_wxr};
