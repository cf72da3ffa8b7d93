//! Flags accepted by every fastforge invocation, flattened into [`super::Cli`].

use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Flags shared by generation, `completions` and `config`.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level: warn by default, one step louder per `-v`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More diagnostics on stderr (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,

    /// Only errors and the final result are printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors and the result"
    )]
    pub quiet: bool,

    /// Plain glyphs, no ANSI escapes. Also set by `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file read instead of the platform config location; the file
    /// `config init` writes to.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Use this fastforge.toml instead of the default"
    )]
    pub config: Option<PathBuf>,

    /// `json` prints the generation report as a single document.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "auto, human, plain or json"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured summary with glyphs.
    Human,
    Plain,
    /// Report as JSON; progress lines are suppressed.
    Json,
}
