//! Index configuration management for `lunr.toml`.
//!
//! # Sections
//!
//! | Key           | Purpose                                         |
//! |---------------|-------------------------------------------------|
//! | `content`     | Content root directory (default: `content`)     |
//! | `output`      | JSON index output path                          |
//! | `[index]`     | Extraction policy (href mode, drafts, prefix)   |
//!
//! All values have defaults; a missing `lunr.toml` is not an error.
//! CLI options override file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::{cli::Cli, logger};

// ============================================================================
// Errors
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),
}

// ============================================================================
// Href mode
// ============================================================================

/// How the `href` of a Markdown record is derived.
///
/// Both behaviors exist in the wild; neither is canonical, so the choice
/// is explicit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HrefMode {
    /// Derive from the file's location under the content root.
    #[default]
    Path,
    /// Take the front-matter `slug` field verbatim.
    Slug,
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing lunr.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Content root directory, relative to the project root
    pub content: PathBuf,

    /// Output path for the JSON index, relative to the project root
    pub output: PathBuf,

    /// Extraction policy settings
    pub index: IndexSection,
}

/// `[index]` section: extraction policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexSection {
    /// Markdown href derivation mode
    pub href_mode: HrefMode,

    /// Skip Markdown files whose front-matter marks them as drafts
    pub skip_drafts: bool,

    /// Path segment stripped from path-derived Markdown hrefs
    pub post_prefix: String,

    /// Pretty-print the JSON output
    pub pretty: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            content: PathBuf::from("content"),
            output: PathBuf::from("static/js/lunr/PagesIndex.json"),
            index: IndexSection::default(),
        }
    }
}

impl Default for IndexSection {
    fn default() -> Self {
        Self {
            href_mode: HrefMode::Path,
            skip_drafts: false,
            post_prefix: "/post".to_string(),
            pretty: false,
        }
    }
}

impl IndexConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Reads the config file when it exists, falls back to defaults
    /// otherwise, then applies CLI overrides. The project root is the
    /// config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = if cli.config.is_absolute() {
            cli.config.clone()
        } else {
            cwd.join(&cli.config)
        };

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.root = config_path.parent().map_or(cwd, Path::to_path_buf);
        config.config_path = config_path;
        config.finalize(cli);
        Ok(config)
    }

    /// Parse a config file.
    fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config = toml::from_str(&raw).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Apply CLI overrides after loading.
    fn finalize(&mut self, cli: &Cli) {
        let args = cli.build_args();

        if let Some(content) = &cli.content {
            self.content = content.clone();
        }
        if let Some(output) = &cli.output {
            self.output = output.clone();
        }
        if let Some(mode) = args.href_mode {
            self.index.href_mode = mode;
        }
        if args.skip_drafts {
            self.index.skip_drafts = true;
        }
        if args.pretty {
            self.index.pretty = true;
        }

        logger::set_verbose(args.verbose);
    }

    /// Absolute path of the content root.
    pub fn content_dir(&self) -> PathBuf {
        self.root.join(&self.content)
    }

    /// Absolute path of the output artifact.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = IndexConfig::default();
        assert_eq!(config.content, PathBuf::from("content"));
        assert_eq!(
            config.output,
            PathBuf::from("static/js/lunr/PagesIndex.json")
        );
        assert_eq!(config.index.href_mode, HrefMode::Path);
        assert_eq!(config.index.post_prefix, "/post");
        assert!(!config.index.skip_drafts);
        assert!(!config.index.pretty);
    }

    #[test]
    fn test_parse_full_file() {
        let raw = r#"
content = "site/content"
output = "public/PagesIndex.json"

[index]
href_mode = "slug"
skip_drafts = true
post_prefix = "/blog"
"#;
        let config: IndexConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.content, PathBuf::from("site/content"));
        assert_eq!(config.output, PathBuf::from("public/PagesIndex.json"));
        assert_eq!(config.index.href_mode, HrefMode::Slug);
        assert!(config.index.skip_drafts);
        assert_eq!(config.index.post_prefix, "/blog");
    }

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let config: IndexConfig = toml::from_str("[index]\nskip_drafts = true\n").unwrap();
        assert_eq!(config.content, PathBuf::from("content"));
        assert!(config.index.skip_drafts);
        assert_eq!(config.index.href_mode, HrefMode::Path);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "lunr-index",
            "--content",
            "docs",
            "build",
            "--href-mode",
            "slug",
            "-E",
            "--pretty",
        ]);
        let mut config = IndexConfig::default();
        config.finalize(&cli);

        assert_eq!(config.content, PathBuf::from("docs"));
        assert_eq!(config.index.href_mode, HrefMode::Slug);
        assert!(config.index.skip_drafts);
        assert!(config.index.pretty);
    }

    #[test]
    fn test_paths_resolve_from_root() {
        let config = IndexConfig {
            root: PathBuf::from("/srv/site"),
            ..Default::default()
        };
        assert_eq!(config.content_dir(), PathBuf::from("/srv/site/content"));
        assert_eq!(
            config.output_path(),
            PathBuf::from("/srv/site/static/js/lunr/PagesIndex.json")
        );
    }
}
