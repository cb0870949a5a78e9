//! WXR to CSV conversion

use crate::config::ExtractOptions;
use crate::error::{Error, Result};
use crate::formats::wxr::{WxrDocument, parse_wxr_with_namespace};
use crate::record::{self, Rejection, Row};
use crate::schema::Schema;

use super::{ConvertPhase, ConvertProgress, ConvertProgressCallback};

use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of a successful extraction.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ExtractReport {
    /// The CSV that was written.
    pub destination: PathBuf,
    /// Every `<item>` in the export.
    pub items_scanned: usize,
    /// Items that passed both filters (one CSV row each).
    pub rows_written: usize,
    /// Items dropped for their post type.
    pub rejected_post_type: usize,
    /// Items of the right type dropped for their status.
    pub rejected_status: usize,
}

/// Convert a WXR export to the published-cases CSV with default options
///
/// # Errors
/// See [`convert_wxr_to_csv_with_progress`].
pub fn convert_wxr_to_csv<P: AsRef<Path>>(source: P, dest: P) -> Result<ExtractReport> {
    convert_wxr_to_csv_with_options(source, dest, &ExtractOptions::default())
}

/// Convert a WXR export to CSV
///
/// # Errors
/// See [`convert_wxr_to_csv_with_progress`].
pub fn convert_wxr_to_csv_with_options<P: AsRef<Path>>(
    source: P,
    dest: P,
    options: &ExtractOptions,
) -> Result<ExtractReport> {
    convert_wxr_to_csv_with_progress(source, dest, options, &|_| {})
}

/// Convert a WXR export to CSV with progress callback
///
/// Nothing is written unless at least one item passes the filters.
///
/// # Errors
/// - [`Error::FileNotFound`] if `source` does not exist
/// - a parse error if `source` is not well-formed XML
/// - [`Error::NoMatchingItems`] if no item passes the filters
/// - [`Error::WriteFailed`] / [`Error::CsvError`] if `dest` cannot be written
pub fn convert_wxr_to_csv_with_progress<P: AsRef<Path>>(
    source: P,
    dest: P,
    options: &ExtractOptions,
    progress: ConvertProgressCallback,
) -> Result<ExtractReport> {
    let source = source.as_ref();
    let dest = dest.as_ref();
    tracing::info!("Converting WXR→CSV: {source:?} → {dest:?}");

    progress(&ConvertProgress::with_message(
        ConvertPhase::ReadingSource,
        1,
        4,
        "Reading XML export...",
    ));
    let content = fs::read_to_string(source).map_err(|e| Error::from_read(source, e))?;

    progress(&ConvertProgress::with_message(
        ConvertPhase::Parsing,
        2,
        4,
        "Parsing XML content...",
    ));
    let doc = parse_wxr_with_namespace(&content, &options.wp_namespace)?;

    progress(&ConvertProgress::with_message(
        ConvertPhase::Filtering,
        3,
        4,
        format!("Filtering {} items...", doc.len()),
    ));
    let (rows, mut report) = collect_rows(&doc, options);

    if rows.is_empty() {
        tracing::warn!(
            "No items with post type '{}' and status '{}' in {source:?}",
            options.post_type,
            options.status
        );
        return Err(Error::NoMatchingItems {
            post_type: options.post_type.clone(),
            status: options.status.clone(),
        });
    }

    progress(&ConvertProgress::with_message(
        ConvertPhase::WritingOutput,
        4,
        4,
        format!("Writing {} rows to CSV...", rows.len()),
    ));
    let schema = Schema::new(options.columns.iter().cloned());
    let file = File::create(dest).map_err(|source| Error::WriteFailed {
        path: dest.to_path_buf(),
        source,
    })?;
    write_rows_csv(file, &schema, &rows)?;

    report.destination = dest.to_path_buf();
    progress(&ConvertProgress::new(ConvertPhase::Complete, 4, 4));
    tracing::info!("Conversion complete: {} rows", report.rows_written);
    Ok(report)
}

/// Filter and flatten the items of an XML string
///
/// # Errors
/// Returns an error if the XML is malformed.
pub fn rows_from_wxr(content: &str, options: &ExtractOptions) -> Result<Vec<Row>> {
    let doc = parse_wxr_with_namespace(content, &options.wp_namespace)?;
    Ok(collect_rows(&doc, options).0)
}

/// Write a header line plus one projected line per row.
///
/// Uses `\n` line endings and quotes only fields containing a comma, quote
/// or line break.
///
/// # Errors
/// Returns an error if the writer fails.
pub fn write_rows_csv<W: Write>(writer: W, schema: &Schema, rows: &[Row]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer.write_record(schema.columns())?;
    for row in rows {
        csv_writer.write_record(schema.project(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn collect_rows(doc: &WxrDocument, options: &ExtractOptions) -> (Vec<Row>, ExtractReport) {
    let mut report = ExtractReport {
        items_scanned: doc.len(),
        ..ExtractReport::default()
    };

    let rows: Vec<Row> = doc
        .items
        .iter()
        .filter(|item| match record::check(item, options) {
            Ok(()) => true,
            Err(reason) => {
                match reason {
                    Rejection::PostType => report.rejected_post_type += 1,
                    Rejection::Status => report.rejected_status += 1,
                }
                tracing::debug!(
                    "Skipping item {:?} ({:?}: type={:?}, status={:?})",
                    item.title,
                    reason,
                    item.post_type,
                    item.status
                );
                false
            }
        })
        .map(|item| record::flatten_item(item, options))
        .collect();

    report.rows_written = rows.len();
    (rows, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EXPORT: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0" xmlns:wp="http://wordpress.org/export/1.2/">
<channel>
    <item>
        <title>Benin Bronzes</title>
        <category domain="cpdr_respondent_nation">United Kingdom</category>
        <category domain="cpdr_respondent_nation">Germany</category>
        <wp:post_type>cpdr</wp:post_type>
        <wp:status>publish</wp:status>
        <wp:postmeta>
            <wp:meta_key>cpdr_year_claim_initiated</wp:meta_key>
            <wp:meta_value>1936</wp:meta_value>
        </wp:postmeta>
    </item>
    <item>
        <title>Draft case</title>
        <wp:post_type>cpdr</wp:post_type>
        <wp:status>draft</wp:status>
    </item>
    <item>
        <title>About</title>
        <wp:post_type>page</wp:post_type>
        <wp:status>publish</wp:status>
    </item>
</channel>
</rss>"#;

    #[test]
    fn test_rows_from_wxr_filters_and_flattens() {
        let rows = rows_from_wxr(EXPORT, &ExtractOptions::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Item"], "Benin Bronzes");
        assert_eq!(rows[0]["respondent_nation"], "United Kingdom, Germany");
        assert_eq!(rows[0]["year_claim_initiated"], "1936");
    }

    #[test]
    fn test_collect_rows_counts_rejections() {
        let doc = crate::formats::wxr::parse_wxr(EXPORT).unwrap();
        let (rows, report) = collect_rows(&doc, &ExtractOptions::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(report.items_scanned, 3);
        assert_eq!(report.rows_written, 1);
        assert_eq!(report.rejected_post_type, 1);
        assert_eq!(report.rejected_status, 1);
    }

    #[test]
    fn test_write_rows_csv_quotes_when_needed() {
        let schema = Schema::new(["Item", "respondent_nation", "case_status"]);
        let mut row = Row::new();
        row.insert("Item".to_string(), "Say \"no\"".to_string());
        row.insert(
            "respondent_nation".to_string(),
            "France, Germany".to_string(),
        );

        let mut out = Vec::new();
        write_rows_csv(&mut out, &schema, &[row]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Item,respondent_nation,case_status\n\"Say \"\"no\"\"\",\"France, Germany\",\n"
        );
    }

    #[test]
    fn test_header_only_for_no_rows() {
        let mut out = Vec::new();
        write_rows_csv(&mut out, &Schema::new(["a", "b"]), &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a,b\n");
    }
}
