//! Command execution implementations

use super::Commands;
use super::{embed, extract, inspect};
use crate::config::{Config, EmbedOptions, ExtractOptions, resolve_path};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error for problems the command does not report itself,
    /// such as a missing path argument.
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        match self {
            Commands::Extract {
                source,
                destination,
                post_type,
                status,
                quiet,
            } => {
                let source = resolve_path(
                    source.as_deref(),
                    config.paths.source_path(),
                    "source",
                )?;
                let dest =
                    resolve_path(destination.as_deref(), config.paths.csv_path(), "CSV")?;
                let options = extract_options(config, post_type.as_deref(), status.as_deref());
                extract::extract(&source, &dest, &options, *quiet);
                Ok(())
            }
            Commands::Embed {
                source,
                var_name,
                escape_backticks,
            } => {
                let source = resolve_path(source.as_deref(), config.paths.csv_path(), "CSV")?;
                let options = embed_options(config, var_name.as_deref(), *escape_backticks);
                embed::embed(&source, &options);
                Ok(())
            }
            Commands::Pipeline {
                source,
                destination,
                post_type,
                status,
                var_name,
                escape_backticks,
                quiet,
            } => {
                let source = resolve_path(
                    source.as_deref(),
                    config.paths.source_path(),
                    "source",
                )?;
                let dest =
                    resolve_path(destination.as_deref(), config.paths.csv_path(), "CSV")?;
                let extract_opts =
                    extract_options(config, post_type.as_deref(), status.as_deref());
                let embed_opts = embed_options(config, var_name.as_deref(), *escape_backticks);

                if let Some(report) = extract::extract(&source, &dest, &extract_opts, *quiet) {
                    embed::embed(&report.destination, &embed_opts);
                }
                Ok(())
            }
            Commands::Inspect {
                source,
                post_type,
                status,
                json,
            } => {
                let source = resolve_path(
                    source.as_deref(),
                    config.paths.source_path(),
                    "source",
                )?;
                let options = extract_options(config, post_type.as_deref(), status.as_deref());
                inspect::inspect(&source, &options, *json)
            }
        }
    }
}

/// Config extract settings with command-line overrides applied.
fn extract_options(
    config: &Config,
    post_type: Option<&str>,
    status: Option<&str>,
) -> ExtractOptions {
    let mut options = config.extract.clone();
    if let Some(post_type) = post_type {
        options.post_type = post_type.to_string();
    }
    if let Some(status) = status {
        options.status = status.to_string();
    }
    options
}

/// Config embed settings with command-line overrides applied.
fn embed_options(config: &Config, var_name: Option<&str>, escape_backticks: bool) -> EmbedOptions {
    let mut options = config.embed.clone();
    if let Some(name) = var_name {
        options.variable_name = name.to_string();
    }
    options.escape_backticks |= escape_backticks;
    options
}
