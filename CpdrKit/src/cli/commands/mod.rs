use clap::Subcommand;
use std::path::PathBuf;

pub mod embed;
pub mod execute;
pub mod extract;
pub mod inspect;

#[derive(Subcommand)]
pub enum Commands {
    /// Extract published cases from a WordPress export into CSV
    Extract {
        /// WordPress XML export (defaults to paths.source in the config)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output CSV file (defaults to paths.csv in the config)
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// Required post type (default: cpdr)
        #[arg(long)]
        post_type: Option<String>,

        /// Required post status (default: publish)
        #[arg(long)]
        status: Option<String>,

        /// Suppress step output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print a CSV file as a JavaScript snippet for pasting into a page
    Embed {
        /// CSV file (defaults to paths.csv in the config)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Name of the JavaScript constant (default: csvData)
        #[arg(long)]
        var_name: Option<String>,

        /// Escape backticks, backslashes and `${` in the CSV text
        #[arg(long)]
        escape_backticks: bool,
    },

    /// Extract to CSV, then print the snippet for the new file
    Pipeline {
        /// WordPress XML export (defaults to paths.source in the config)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Intermediate CSV file (defaults to paths.csv in the config)
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// Required post type (default: cpdr)
        #[arg(long)]
        post_type: Option<String>,

        /// Required post status (default: publish)
        #[arg(long)]
        status: Option<String>,

        /// Name of the JavaScript constant (default: csvData)
        #[arg(long)]
        var_name: Option<String>,

        /// Escape backticks, backslashes and `${` in the CSV text
        #[arg(long)]
        escape_backticks: bool,

        /// Suppress step output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Count the items in an export by post type and status
    Inspect {
        /// WordPress XML export (defaults to paths.source in the config)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Required post type for the match count (default: cpdr)
        #[arg(long)]
        post_type: Option<String>,

        /// Required post status for the match count (default: publish)
        #[arg(long)]
        status: Option<String>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
