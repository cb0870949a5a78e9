//! CLI command for summarising an export

use std::path::Path;

use crate::cli::progress::simple_spinner;
use crate::config::ExtractOptions;
use crate::inspect::summarize_file;

/// Print post type / status counts for an export
pub fn inspect(source: &Path, options: &ExtractOptions, json: bool) -> anyhow::Result<()> {
    if json {
        let summary = summarize_file(source, options)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let pb = simple_spinner(&format!("Reading {}...", source.display()));
    let summary = summarize_file(source, options);
    pb.finish_and_clear();
    let summary = summary?;

    println!("Export: {}", source.display());
    println!();
    println!("{summary}");
    Ok(())
}
