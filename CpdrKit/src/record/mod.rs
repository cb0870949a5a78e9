//! Item filtering and flattening
//!
//! Turns a [`RawItem`] into a single-level [`Row`]. Everything here is pure
//! and works on the plain document structures, so it can be exercised
//! without any XML.

use indexmap::IndexMap;

use crate::config::ExtractOptions;
use crate::formats::wxr::{RawCategory, RawItem, RawMeta};

/// Field holding the item title.
pub const TITLE_FIELD: &str = "Item";

/// Separator between category values sharing a domain.
pub const VALUE_SEPARATOR: &str = ", ";

/// A flattened item: field name → value, in the order fields were first set.
pub type Row = IndexMap<String, String>;

/// Why an item was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// `wp:post_type` missing or not the requested type.
    PostType,
    /// `wp:status` missing or not the requested status.
    Status,
}

/// Check the post type, then the status.
pub fn check(item: &RawItem, options: &ExtractOptions) -> Result<(), Rejection> {
    if item.post_type.as_deref() != Some(options.post_type.as_str()) {
        return Err(Rejection::PostType);
    }
    if item.status.as_deref() != Some(options.status.as_str()) {
        return Err(Rejection::Status);
    }
    Ok(())
}

/// Whether an item passes both filters.
pub fn accepts(item: &RawItem, options: &ExtractOptions) -> bool {
    check(item, options).is_ok()
}

/// Flatten an item into a row.
///
/// Layers, later ones overwriting earlier ones on a name clash:
/// 1. the title under [`TITLE_FIELD`]
/// 2. one field per category domain, values joined with [`VALUE_SEPARATOR`]
/// 3. one field per metadata key, last value winning
pub fn flatten_item(item: &RawItem, options: &ExtractOptions) -> Row {
    let mut row = Row::new();
    row.insert(
        TITLE_FIELD.to_string(),
        item.title.clone().unwrap_or_default(),
    );
    row.extend(group_categories(&item.categories, options));
    row.extend(meta_fields(&item.postmeta, options));
    row
}

/// Group category values by cleaned domain, keeping first-seen order.
pub fn group_categories(categories: &[RawCategory], options: &ExtractOptions) -> Row {
    let mut grouped: IndexMap<String, Vec<&str>> = IndexMap::new();
    for category in categories {
        let domain = category
            .domain
            .as_deref()
            .unwrap_or(&options.default_domain);
        grouped
            .entry(clean_name(domain, &options.key_prefix))
            .or_default()
            .push(&category.value);
    }

    grouped
        .into_iter()
        .map(|(domain, values)| (domain, values.join(VALUE_SEPARATOR)))
        .collect()
}

/// Metadata entries as cleaned key → value. Entries missing a key or value
/// element are skipped.
pub fn meta_fields(postmeta: &[RawMeta], options: &ExtractOptions) -> Row {
    let mut fields = Row::new();
    for meta in postmeta {
        let (Some(key), Some(value)) = (&meta.key, &meta.value) else {
            tracing::debug!("Skipping postmeta without key/value: {meta:?}");
            continue;
        };
        fields.insert(clean_name(key, &options.key_prefix), value.clone());
    }
    fields
}

/// Remove every occurrence of `prefix` from a domain or key name.
pub fn clean_name(name: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        name.replace(prefix, "")
    }
}
