//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use progen_core::domain::Layout;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// There are no subcommands: running `progen` scaffolds the current
/// directory.
#[derive(Debug, Parser)]
#[command(
    name    = "progen",
    bin_name = "progen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a Go service in the current directory",
    long_about = "progen lays down a standard Go service skeleton (README, configs, \
                  entry point, Dockerfile, compose manifest) in the working directory. \
                  Files that already exist are never touched, so it is safe to re-run.",
    after_help = "EXAMPLES:\n\
        \x20 cd ~/src/github.com/acme/widget && progen\n\
        \x20 progen --layout service\n\
        \x20 progen -C ../other --minimal --skip-toolchain",
)]
pub struct Cli {
    /// Logging and output flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to generate and where.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Generation flags. Each one overrides the matching config value.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory to scaffold instead of the current one.
    #[arg(
        short = 'C',
        long = "directory",
        value_name = "DIR",
        help = "Directory to scaffold (default: current directory)"
    )]
    pub directory: Option<PathBuf>,

    /// Project layout.
    #[arg(long = "layout", value_enum, help = "Project layout")]
    pub layout: Option<LayoutArg>,

    /// Generate an empty `main()` without the config reader.
    #[arg(long = "minimal", help = "Generate a minimal entry point")]
    pub minimal: bool,

    /// Do not run `go mod init` / `go mod tidy`.
    #[arg(long = "skip-toolchain", help = "Skip go mod init/tidy")]
    pub skip_toolchain: bool,

    /// Substring marking the code-hosting root in the directory path.
    #[arg(
        long = "marker",
        value_name = "STRING",
        help = "Module path marker (default: github.com)"
    )]
    pub marker: Option<String>,
}

/// Project layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// `main.go` at the root.
    Flat,
    /// `cmd/api/main.go`.
    #[value(alias = "api")]
    Service,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Flat => Layout::Flat,
            LayoutArg::Service => Layout::Service,
        }
    }
}
