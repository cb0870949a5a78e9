//! WXR file reading
//!
//! Streams the export with a namespace-aware reader and keeps only the
//! direct children of each `<item>` that extraction needs. `wp:` elements
//! are matched by namespace URI, so the prefix an export happens to use does
//! not matter.

use super::document::{RawCategory, RawItem, RawMeta, WxrDocument};
use crate::config::WP_EXPORT_NAMESPACE;
use crate::error::{Error, Result};
use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use std::fs;
use std::path::Path;

/// Read a WXR file from disk
///
/// # Errors
/// Returns [`Error::FileNotFound`] if the file does not exist, or a parse
/// error if it is not well-formed XML.
pub fn read_wxr<P: AsRef<Path>>(path: P) -> Result<WxrDocument> {
    read_wxr_with_namespace(path, WP_EXPORT_NAMESPACE)
}

/// Read a WXR file whose `wp:` elements live in `wp_namespace`
///
/// # Errors
/// Same as [`read_wxr`].
pub fn read_wxr_with_namespace<P: AsRef<Path>>(path: P, wp_namespace: &str) -> Result<WxrDocument> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::from_read(path, e))?;
    parse_wxr_with_namespace(&content, wp_namespace)
}

/// Parse WXR from an XML string
///
/// # Errors
/// Returns an error if the XML is malformed.
pub fn parse_wxr(content: &str) -> Result<WxrDocument> {
    parse_wxr_with_namespace(content, WP_EXPORT_NAMESPACE)
}

/// Parse WXR from an XML string with a custom `wp:` namespace URI
///
/// # Errors
/// Returns an error if the XML is malformed.
pub fn parse_wxr_with_namespace(content: &str, wp_namespace: &str) -> Result<WxrDocument> {
    let mut reader = NsReader::from_str(content);
    let wp = wp_namespace.as_bytes();

    let mut buf = Vec::new();
    let mut state = ItemCollector::default();

    loop {
        let (ns, event) = reader.read_resolved_event_into(&mut buf)?;
        let scope = Scope::of(&ns, wp);

        match event {
            Event::Start(e) => {
                let position = reader.buffer_position();
                state.check_single_root(position)?;
                let scope = scope.declared(&e, position)?;
                let tag = Tag::classify(scope, e.local_name().as_ref());
                state.depth += 1;
                state.open(tag, &e)?;
            }
            Event::Empty(e) => {
                let position = reader.buffer_position();
                state.check_single_root(position)?;
                let scope = scope.declared(&e, position)?;
                let tag = Tag::classify(scope, e.local_name().as_ref());
                state.depth += 1;
                state.open(tag, &e)?;
                state.close();
                state.depth -= 1;
            }
            Event::End(_) => {
                if state.depth == 0 {
                    return Err(Error::MalformedXml {
                        position: reader.buffer_position(),
                        message: "closing tag without a matching opening tag".to_string(),
                    });
                }
                state.close();
                state.depth -= 1;
            }
            Event::Text(e) if state.depth == 0 => {
                if !e.unescape()?.trim().is_empty() {
                    return Err(Error::MalformedXml {
                        position: reader.buffer_position(),
                        message: "text outside the root element".to_string(),
                    });
                }
            }
            Event::Text(e) if state.wants_text() => {
                let text = e.unescape()?;
                state.push_text(&text);
            }
            Event::CData(_) if state.depth == 0 => {
                return Err(Error::MalformedXml {
                    position: reader.buffer_position(),
                    message: "CDATA outside the root element".to_string(),
                });
            }
            Event::CData(e) if state.wants_text() => {
                state.push_text(&String::from_utf8_lossy(&e));
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if state.depth > 0 {
        return Err(Error::MalformedXml {
            position: reader.buffer_position(),
            message: format!(
                "unexpected end of document with {} element(s) left open",
                state.depth
            ),
        });
    }
    if !state.saw_root {
        return Err(Error::MalformedXml {
            position: reader.buffer_position(),
            message: "no root element found".to_string(),
        });
    }

    tracing::debug!("Parsed {} items from WXR", state.items.len());
    Ok(WxrDocument { items: state.items })
}

/// Which namespace an element name resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// No prefix and no default namespace (RSS elements).
    Plain,
    /// The WordPress export namespace.
    Wp,
    Other,
    /// A prefix with no `xmlns:` declaration in scope.
    Undeclared,
}

impl Scope {
    fn of(ns: &ResolveResult, wp: &[u8]) -> Self {
        match ns {
            ResolveResult::Unbound => Scope::Plain,
            ResolveResult::Bound(Namespace(uri)) if *uri == wp => Scope::Wp,
            ResolveResult::Bound(_) => Scope::Other,
            ResolveResult::Unknown(_) => Scope::Undeclared,
        }
    }

    /// Reject elements whose prefix was never declared.
    fn declared(self, e: &BytesStart, position: usize) -> Result<Self> {
        if self == Scope::Undeclared {
            return Err(Error::MalformedXml {
                position,
                message: format!(
                    "unbound prefix on <{}>",
                    String::from_utf8_lossy(e.name().as_ref())
                ),
            });
        }
        Ok(self)
    }
}

/// Elements the collector reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Item,
    Title,
    Category,
    PostType,
    Status,
    PostMeta,
    MetaKey,
    MetaValue,
    Other,
}

impl Tag {
    fn classify(scope: Scope, local: &[u8]) -> Self {
        match (scope, local) {
            (Scope::Plain, b"item") => Tag::Item,
            (Scope::Plain, b"title") => Tag::Title,
            (Scope::Plain, b"category") => Tag::Category,
            (Scope::Wp, b"post_type") => Tag::PostType,
            (Scope::Wp, b"status") => Tag::Status,
            (Scope::Wp, b"postmeta") => Tag::PostMeta,
            (Scope::Wp, b"meta_key") => Tag::MetaKey,
            (Scope::Wp, b"meta_value") => Tag::MetaValue,
            _ => Tag::Other,
        }
    }
}

/// Where captured text goes once its element closes.
#[derive(Debug)]
enum Field {
    Title,
    PostType,
    Status,
    Category { domain: Option<String> },
    MetaKey,
    MetaValue,
}

#[derive(Debug)]
struct Capture {
    field: Field,
    depth: usize,
    text: String,
}

/// An `<item>` currently open, by index into the collected items.
#[derive(Debug)]
struct ItemFrame {
    index: usize,
    depth: usize,
}

/// A `wp:postmeta` currently open.
#[derive(Debug)]
struct MetaFrame {
    depth: usize,
    meta: RawMeta,
}

#[derive(Debug, Default)]
struct ItemCollector {
    items: Vec<RawItem>,
    item_stack: Vec<ItemFrame>,
    meta: Option<MetaFrame>,
    capture: Option<Capture>,
    depth: usize,
    saw_root: bool,
}

impl ItemCollector {
    /// Record the root element, rejecting a second one.
    fn check_single_root(&mut self, position: usize) -> Result<()> {
        if self.depth == 0 {
            if self.saw_root {
                return Err(Error::MalformedXml {
                    position,
                    message: "content after the root element".to_string(),
                });
            }
            self.saw_root = true;
        }
        Ok(())
    }

    /// Handle an element opening at `self.depth`.
    fn open(&mut self, tag: Tag, e: &BytesStart) -> Result<()> {
        let depth = self.depth;

        if tag == Tag::Item {
            // Slot reserved now so nested items keep document order
            self.items.push(RawItem::default());
            self.item_stack.push(ItemFrame {
                index: self.items.len() - 1,
                depth,
            });
            return Ok(());
        }

        if self.capture.is_some() {
            return Ok(());
        }

        let Some(item_depth) = self.item_stack.last().map(|frame| frame.depth) else {
            return Ok(());
        };

        if depth == item_depth + 1 {
            let field = match tag {
                Tag::Title => Some(Field::Title),
                Tag::PostType => Some(Field::PostType),
                Tag::Status => Some(Field::Status),
                Tag::Category => Some(Field::Category {
                    domain: domain_attribute(e)?,
                }),
                Tag::PostMeta => {
                    if self.meta.is_none() {
                        self.meta = Some(MetaFrame {
                            depth,
                            meta: RawMeta::default(),
                        });
                    }
                    None
                }
                _ => None,
            };
            self.begin_capture(field);
        } else if self.meta.as_ref().is_some_and(|m| depth == m.depth + 1) {
            let field = match tag {
                Tag::MetaKey => Some(Field::MetaKey),
                Tag::MetaValue => Some(Field::MetaValue),
                _ => None,
            };
            self.begin_capture(field);
        }

        Ok(())
    }

    /// Handle the element at `self.depth` closing.
    fn close(&mut self) {
        let depth = self.depth;

        if self.capture.as_ref().is_some_and(|c| c.depth == depth) {
            if let Some(capture) = self.capture.take() {
                self.commit(capture);
            }
            return;
        }

        if self.meta.as_ref().is_some_and(|m| m.depth == depth) {
            if let Some(frame) = self.meta.take() {
                if let Some(item) = self.current_item() {
                    item.postmeta.push(frame.meta);
                }
            }
            return;
        }

        if self.item_stack.last().is_some_and(|frame| frame.depth == depth) {
            self.item_stack.pop();
        }
    }

    fn wants_text(&self) -> bool {
        self.capture.as_ref().is_some_and(|c| c.depth == self.depth)
    }

    fn push_text(&mut self, text: &str) {
        if let Some(capture) = self.capture.as_mut() {
            capture.text.push_str(text);
        }
    }

    fn begin_capture(&mut self, field: Option<Field>) {
        if let Some(field) = field {
            self.capture = Some(Capture {
                field,
                depth: self.depth,
                text: String::new(),
            });
        }
    }

    fn current_item(&mut self) -> Option<&mut RawItem> {
        let index = self.item_stack.last()?.index;
        self.items.get_mut(index)
    }

    fn commit(&mut self, capture: Capture) {
        let Capture { field, text, .. } = capture;

        match field {
            Field::MetaKey => {
                if let Some(frame) = self.meta.as_mut() {
                    frame.meta.key.get_or_insert(text);
                }
            }
            Field::MetaValue => {
                if let Some(frame) = self.meta.as_mut() {
                    frame.meta.value.get_or_insert(text);
                }
            }
            Field::Title => {
                if let Some(item) = self.current_item() {
                    item.title.get_or_insert(text);
                }
            }
            Field::PostType => {
                if let Some(item) = self.current_item() {
                    item.post_type.get_or_insert(text);
                }
            }
            Field::Status => {
                if let Some(item) = self.current_item() {
                    item.status.get_or_insert(text);
                }
            }
            Field::Category { domain } => {
                if let Some(item) = self.current_item() {
                    item.categories.push(RawCategory {
                        domain,
                        value: text,
                    });
                }
            }
        }
    }
}

fn domain_attribute(e: &BytesStart) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"domain" {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
