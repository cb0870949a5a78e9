//! CLI command for WXR → CSV extraction

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{
    print_convert_progress, print_done, print_error, print_success, print_warning,
};
use crate::config::ExtractOptions;
use crate::converter::{ExtractReport, convert_wxr_to_csv_with_progress};
use crate::error::Error;

/// Extract matching items to CSV and print the outcome
///
/// Returns the report when a CSV was written; warnings and errors are
/// printed and yield `None`.
pub fn extract(
    source: &Path,
    dest: &Path,
    options: &ExtractOptions,
    quiet: bool,
) -> Option<ExtractReport> {
    let start = Instant::now();
    let result = convert_wxr_to_csv_with_progress(source, dest, options, &|update| {
        if !quiet {
            print_convert_progress(update);
        }
    });

    match result {
        Ok(report) => {
            print_success(&format!(
                "Success! Created '{}' with {} published cases.",
                report.destination.display(),
                report.rows_written
            ));
            if !quiet {
                println!(
                    "  {} items scanned, {} skipped for post type, {} skipped for status",
                    report.items_scanned, report.rejected_post_type, report.rejected_status
                );
                print_done(start.elapsed());
            }
            Some(report)
        }
        Err(e) => {
            report_failure(&e, source, dest, options);
            None
        }
    }
}

fn report_failure(error: &Error, source: &Path, dest: &Path, options: &ExtractOptions) {
    match error {
        Error::NoMatchingItems { .. } => print_warning(&format!(
            "No {} '{}' items were found in the XML file.",
            status_adjective(&options.status),
            options.post_type
        )),
        Error::WriteFailed { .. } | Error::CsvError(_) => print_error(&format!(
            "Could not write to CSV file at {}. {error}",
            dest.display()
        )),
        _ => print_error(&format!(
            "Could not read or parse the XML file at {}. {error}",
            source.display()
        )),
    }
}

/// "publish" reads as "published" in messages.
fn status_adjective(status: &str) -> String {
    match status {
        "publish" => "published".to_string(),
        other => other.to_string(),
    }
}
