//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand the CLI generates a project from `--input`.
#[derive(Debug, Parser)]
#[command(
    name    = "fastforge",
    bin_name = "fastforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} FastAPI projects from a schema",
    long_about = "fastforge reads a project schema (tree .txt, .json or .yaml) \
                  and generates a FastAPI project in the layered, clean or \
                  modular architecture.",
    after_help = "EXAMPLES:\n\
        \x20 fastforge --input schema.txt\n\
        \x20 fastforge -i blog.yaml -o blog_api --with-tests\n\
        \x20 fastforge -i shop.json --zip-only\n\
        \x20 fastforge completions bash > /usr/share/bash-completion/completions/fastforge",
    arg_required_else_help = true,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Generation flags, used when no subcommand is given.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Generation ────────────────────────────────────────────────────────────────

/// Arguments for project generation.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Schema file. The extension selects the parser.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        required = true,
        help = "Schema file: .txt, .json, .yaml or .yml"
    )]
    pub input: Option<PathBuf>,

    /// Output directory name. Defaults to `generation.output` from config.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "NAME",
        help = "Output project directory [default: fastapi_project]"
    )]
    pub output: Option<String>,

    /// Skip `__init__.py` package markers.
    #[arg(long = "no-init", help = "Do not create __init__.py files")]
    pub no_init: bool,

    /// Package the generated tree as `<output>.zip`.
    #[arg(long = "zip", help = "Create a zip archive of the project")]
    pub zip: bool,

    /// Zip, then remove the generated tree.
    #[arg(long = "zip-only", help = "Keep only the zip archive")]
    pub zip_only: bool,

    /// Generate pytest stubs under `tests/`.
    #[arg(long = "with-tests", help = "Generate test stubs for project files")]
    pub with_tests: bool,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 fastforge completions bash > ~/.local/share/bash-completion/completions/fastforge\n\
            \x20 fastforge completions zsh  > ~/.zfunc/_fastforge\n\
            \x20 fastforge completions fish > ~/.config/fish/completions/fastforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the fastforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 fastforge config show\n\
            \x20 fastforge config path\n\
            \x20 fastforge config init --force"
    )]
    Config(ConfigCommands),
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `fastforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `fastforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path to the active configuration file.
    Path,
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generation_flags() {
        let cli = Cli::parse_from([
            "fastforge",
            "--input",
            "schema.yaml",
            "-o",
            "blog",
            "--no-init",
            "--zip-only",
            "--with-tests",
        ]);

        assert!(cli.command.is_none());
        let args = cli.generate;
        assert_eq!(args.input, Some(PathBuf::from("schema.yaml")));
        assert_eq!(args.output.as_deref(), Some("blog"));
        assert!(args.no_init && args.zip_only && args.with_tests);
        assert!(!args.zip);
    }

    #[test]
    fn input_is_required_without_subcommand() {
        let result = Cli::try_parse_from(["fastforge", "--with-tests"]);
        assert!(result.is_err());
    }

    #[test]
    fn subcommand_does_not_need_input() {
        let cli = Cli::parse_from(["fastforge", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigCommands::Init { force: true }))
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["fastforge", "--quiet", "--verbose", "-i", "s.txt"]);
        assert!(result.is_err());
    }
}
