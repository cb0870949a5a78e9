//! Export summaries
//!
//! Counts items by post type and status so an empty extraction can be
//! traced back to the filter that dropped everything.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::config::ExtractOptions;
use crate::error::Result;
use crate::formats::wxr::{WxrDocument, read_wxr_with_namespace};
use crate::record;

/// Shown for a missing `wp:post_type` or `wp:status`.
pub const MISSING_TAG: &str = "<none>";

/// Item counts for one export.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ExportSummary {
    pub total_items: usize,
    /// Items the given filter accepts.
    pub accepted: usize,
    pub post_type_filter: String,
    pub status_filter: String,
    /// Most common first, then by name.
    pub groups: Vec<GroupCount>,
}

/// Number of items sharing a post type and status.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GroupCount {
    pub post_type: String,
    pub status: String,
    pub count: usize,
}

/// Summarise a parsed export.
pub fn summarize(doc: &WxrDocument, options: &ExtractOptions) -> ExportSummary {
    let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
    let mut accepted = 0;

    for item in &doc.items {
        let post_type = item.post_type.as_deref().unwrap_or(MISSING_TAG);
        let status = item.status.as_deref().unwrap_or(MISSING_TAG);
        *counts.entry((post_type, status)).or_default() += 1;
        if record::accepts(item, options) {
            accepted += 1;
        }
    }

    let mut groups: Vec<GroupCount> = counts
        .into_iter()
        .map(|((post_type, status), count)| GroupCount {
            post_type: post_type.to_string(),
            status: status.to_string(),
            count,
        })
        .collect();
    groups.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.post_type.cmp(&b.post_type))
            .then_with(|| a.status.cmp(&b.status))
    });

    ExportSummary {
        total_items: doc.len(),
        accepted,
        post_type_filter: options.post_type.clone(),
        status_filter: options.status.clone(),
        groups,
    }
}

/// Read and summarise an export file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn summarize_file<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<ExportSummary> {
    let doc = read_wxr_with_namespace(path, &options.wp_namespace)?;
    Ok(summarize(&doc, options))
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_width = self
            .groups
            .iter()
            .map(|g| g.post_type.len())
            .chain(std::iter::once("POST TYPE".len()))
            .max()
            .unwrap_or_default();
        let status_width = self
            .groups
            .iter()
            .map(|g| g.status.len())
            .chain(std::iter::once("STATUS".len()))
            .max()
            .unwrap_or_default();

        writeln!(
            f,
            "{:<type_width$}  {:<status_width$}  COUNT",
            "POST TYPE", "STATUS"
        )?;
        for group in &self.groups {
            writeln!(
                f,
                "{:<type_width$}  {:<status_width$}  {}",
                group.post_type, group.status, group.count
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total items: {}", self.total_items)?;
        write!(
            f,
            "Matching post type '{}' and status '{}': {}",
            self.post_type_filter, self.status_filter, self.accepted
        )
    }
}
