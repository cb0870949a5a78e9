//! WXR (WordPress eXtended RSS) export module

mod document;
mod reader;

pub use document::{RawCategory, RawItem, RawMeta, WxrDocument};
pub use reader::{parse_wxr, parse_wxr_with_namespace, read_wxr, read_wxr_with_namespace};
