//! # `CpdrKit`
//!
//! Tools for turning a WordPress export of the Cultural Property Disputes
//! Resource into data a static page can chart.
//!
//! ## Supported Conversions
//!
//! - **WXR → CSV** - Filter published case entries, flatten their categories
//!   and custom fields, and write a fixed-column CSV
//! - **CSV → JS** - Wrap a CSV file in a JavaScript template-literal snippet
//! - **Inspect** - Summarise the post types and statuses in an export
//!
//! ## Quick Start
//!
//! ### Extracting Cases
//!
//! ```no_run
//! use cpdrkit::converter::convert_wxr_to_csv;
//!
//! let report = convert_wxr_to_csv("site.WordPress.xml", "cpdr_published_cases.csv")?;
//! println!("Wrote {} cases", report.rows_written);
//! # Ok::<(), cpdrkit::Error>(())
//! ```
//!
//! ### Embedding the CSV
//!
//! ```no_run
//! use cpdrkit::config::EmbedOptions;
//! use cpdrkit::converter::embed_csv_file;
//!
//! let snippet = embed_csv_file("cpdr_published_cases.csv", &EmbedOptions::default())?;
//! print!("{snippet}");
//! # Ok::<(), cpdrkit::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! ```
//! use cpdrkit::prelude::*;
//!
//! let schema = Schema::cpdr();
//! assert_eq!(schema.columns()[0], "Item");
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `cpdrkit` command-line binary

pub mod config;
pub mod converter;
pub mod error;
pub mod formats;
pub mod inspect;
pub mod record;
pub mod schema;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::{Config, EmbedOptions, ExtractOptions, PathConfig};
    pub use crate::error::{Error, Result};
    pub use crate::formats::wxr::{RawCategory, RawItem, RawMeta, WxrDocument};
    pub use crate::record::{Row, accepts, flatten_item};
    pub use crate::schema::Schema;

    pub use crate::converter;
    pub use crate::converter::{
        ExtractReport, convert_wxr_to_csv, convert_wxr_to_csv_with_options,
        embed_csv_file, render_js_snippet,
    };
    pub use crate::inspect::{ExportSummary, summarize, summarize_file};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
