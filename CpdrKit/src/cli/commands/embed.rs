//! CLI command for CSV → JS embedding

use std::path::Path;

use crate::config::EmbedOptions;
use crate::converter::embed_csv_file;

/// Print the snippet for a CSV file, or a message saying why it could not be read
pub fn embed(source: &Path, options: &EmbedOptions) {
    match embed_csv_file(source, options) {
        Ok(snippet) => print!("{snippet}"),
        Err(e) if e.is_not_found() => println!(
            "Error: The file '{}' was not found. Make sure the path is correct.",
            source.display()
        ),
        Err(e) => println!("An error occurred: {e}"),
    }
}
