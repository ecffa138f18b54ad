//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the resolved pieces
//! (catalog options, marker).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by [`AppConfig::with_overrides`])
//! 2. Environment variables: `PROGEN_<SECTION>__<KEY>`, e.g.
//!    `PROGEN_TOOLCHAIN__ENABLED=false`
//! 3. Config file (`--config FILE`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use progen_core::domain::{CatalogOptions, DEFAULT_MARKER, EntryPoint};

use crate::cli::GenerateArgs;

/// Prefix of environment overrides.
const ENV_PREFIX: &str = "PROGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Which layout and entry point to generate.
    pub catalog: CatalogOptions,
    /// How the project identity is derived.
    pub identity: IdentityConfig,
    /// External toolchain settings.
    pub toolchain: ToolchainConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub marker: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    pub enabled: bool,
    pub program: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.into(),
        }
    }
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "go".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to serialise default configuration")?;

        config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Apply command-line flags on top of the loaded values.
    pub fn with_overrides(mut self, args: &GenerateArgs) -> Self {
        if let Some(layout) = args.layout {
            self.catalog.layout = layout.into();
        }
        if args.minimal {
            self.catalog.entry_point = EntryPoint::Minimal;
        }
        if args.skip_toolchain {
            self.toolchain.enabled = false;
        }
        if let Some(marker) = &args.marker {
            self.identity.marker = marker.clone();
        }
        self
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.progen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "progen", "progen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".progen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, LayoutArg};
    use clap::Parser;
    use progen_core::domain::Layout;

    fn args(argv: &[&str]) -> GenerateArgs {
        Cli::try_parse_from(argv).unwrap().generate
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.identity.marker, "github.com");
        assert!(cfg.toolchain.enabled);
        assert_eq!(cfg.toolchain.program, "go");
        assert_eq!(cfg.catalog, CatalogOptions::default());
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.toolchain.program, "go");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("progen.toml");
        std::fs::write(
            &path,
            "[catalog]\nlayout = \"service\"\nentry_point = \"minimal\"\n\n\
             [toolchain]\nprogram = \"go1.22\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.catalog.layout, Layout::Service);
        assert_eq!(cfg.catalog.entry_point, EntryPoint::Minimal);
        assert_eq!(cfg.toolchain.program, "go1.22");
        assert!(cfg.toolchain.enabled);
        assert_eq!(cfg.identity.marker, "github.com");
    }

    #[test]
    fn flags_override_config() {
        let cfg = AppConfig::default().with_overrides(&args(&[
            "progen",
            "--layout",
            "service",
            "--minimal",
            "--skip-toolchain",
            "--marker",
            "gitlab.com",
        ]));

        assert_eq!(cfg.catalog.layout, Layout::from(LayoutArg::Service));
        assert_eq!(cfg.catalog.entry_point, EntryPoint::Minimal);
        assert!(!cfg.toolchain.enabled);
        assert_eq!(cfg.identity.marker, "gitlab.com");
    }

    #[test]
    fn absent_flags_keep_config() {
        let cfg = AppConfig::default().with_overrides(&args(&["progen"]));
        assert!(cfg.toolchain.enabled);
        assert_eq!(cfg.catalog.layout, Layout::Flat);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
