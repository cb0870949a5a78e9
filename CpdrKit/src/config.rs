//! Configuration for extraction and embedding
//!
//! Every setting has a built-in default matching the CPDR site export, so a
//! config file is only needed to change paths or to point the tools at a
//! different post type.
//!
//! ```toml
//! [paths]
//! source = "~/exports/culturalpropertydisputesresource.WordPress.xml"
//! csv = "cpdr_published_cases.csv"
//!
//! [extract]
//! post_type = "cpdr"
//! status = "publish"
//!
//! [embed]
//! variable_name = "csvData"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::schema::CPDR_COLUMNS;

/// WordPress export namespace used for `wp:` elements.
pub const WP_EXPORT_NAMESPACE: &str = "http://wordpress.org/export/1.2/";

/// Post type of case entries.
pub const DEFAULT_POST_TYPE: &str = "cpdr";

/// Status of live entries.
pub const DEFAULT_STATUS: &str = "publish";

/// Prefix the site puts on its taxonomy and custom field names.
pub const DEFAULT_KEY_PREFIX: &str = "cpdr_";

/// Domain used for categories without a `domain` attribute.
pub const DEFAULT_DOMAIN: &str = "uncategorized";

/// Variable the snippet assigns the CSV text to.
pub const DEFAULT_VARIABLE_NAME: &str = "csvData";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub paths: PathConfig,
    pub extract: ExtractOptions,
    pub embed: EmbedOptions,
}

/// Default file locations, used when a command is run without path arguments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathConfig {
    /// WordPress XML export.
    pub source: Option<String>,
    /// CSV written by extraction and read by embedding.
    pub csv: Option<String>,
}

/// Settings for WXR → CSV extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExtractOptions {
    /// Required `wp:post_type` text.
    pub post_type: String,
    /// Required `wp:status` text.
    pub status: String,
    /// Literal removed from category domains and meta keys.
    pub key_prefix: String,
    /// Field name for categories with no `domain` attribute.
    pub default_domain: String,
    /// Namespace URI the `wp:` elements must resolve to.
    pub wp_namespace: String,
    /// Output columns, in order.
    pub columns: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            post_type: DEFAULT_POST_TYPE.to_string(),
            status: DEFAULT_STATUS.to_string(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            default_domain: DEFAULT_DOMAIN.to_string(),
            wp_namespace: WP_EXPORT_NAMESPACE.to_string(),
            columns: CPDR_COLUMNS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Settings for CSV → JS embedding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmbedOptions {
    /// Name of the `const` the CSV text is assigned to.
    pub variable_name: String,
    /// Escape `` ` ``, `\` and `${` so the literal cannot be cut short.
    ///
    /// Off by default: the snippet then contains the file's exact bytes.
    pub escape_backticks: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            variable_name: DEFAULT_VARIABLE_NAME.to_string(),
            escape_backticks: false,
        }
    }
}

impl Config {
    /// Load a config file.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] if the file is missing, or
    /// [`Error::ConfigError`] if it is not valid TOML for this schema.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::from_read(path, e))?;
        let config = Self::from_toml(&content).map_err(|message| Error::ConfigError {
            path: path.to_path_buf(),
            message,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config TOML, returning the parser's message on failure.
    pub fn from_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load `path` if given, otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

impl PathConfig {
    /// Configured XML export path, tilde-expanded.
    pub fn source_path(&self) -> Option<PathBuf> {
        self.source.as_deref().map(expand)
    }

    /// Configured CSV path, tilde-expanded.
    pub fn csv_path(&self) -> Option<PathBuf> {
        self.csv.as_deref().map(expand)
    }
}

/// Pick the explicit path, else the configured one.
///
/// # Errors
/// Returns [`Error::MissingPath`] when neither is available.
pub fn resolve_path(
    explicit: Option<&Path>,
    configured: Option<PathBuf>,
    what: &'static str,
) -> Result<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or(configured)
        .ok_or(Error::MissingPath { what })
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.extract.post_type, "cpdr");
        assert_eq!(config.extract.status, "publish");
        assert_eq!(config.extract.columns.len(), 12);
        assert_eq!(config.embed.variable_name, "csvData");
        assert!(!config.embed.escape_backticks);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [paths]
            csv = "out/cases.csv"

            [extract]
            status = "draft"
            "#,
        )
        .unwrap();

        assert_eq!(config.paths.csv.as_deref(), Some("out/cases.csv"));
        assert_eq!(config.paths.source, None);
        assert_eq!(config.extract.status, "draft");
        assert_eq!(config.extract.post_type, "cpdr");
        assert_eq!(config.extract.key_prefix, "cpdr_");
    }

    #[test]
    fn test_unknown_value_type_is_rejected() {
        let err = Config::from_toml("[embed]\nescape_backticks = \"yes\"").unwrap_err();
        assert!(err.contains("escape_backticks") || err.contains("bool"));
    }

    #[test]
    fn test_resolve_path_prefers_explicit() {
        let chosen = resolve_path(
            Some(Path::new("a.xml")),
            Some(PathBuf::from("b.xml")),
            "source",
        )
        .unwrap();
        assert_eq!(chosen, PathBuf::from("a.xml"));

        let fallback = resolve_path(None, Some(PathBuf::from("b.xml")), "source").unwrap();
        assert_eq!(fallback, PathBuf::from("b.xml"));

        let missing = resolve_path(None, None, "source").unwrap_err();
        assert!(matches!(missing, Error::MissingPath { what: "source" }));
    }

    #[test]
    fn test_configured_paths_expand_tilde() {
        let paths = PathConfig {
            source: Some("~/export.xml".to_string()),
            csv: Some("relative.csv".to_string()),
        };
        let source = paths.source_path().unwrap();
        assert!(source.ends_with("export.xml"));
        assert_eq!(paths.csv_path().unwrap(), PathBuf::from("relative.csv"));
    }
}
