//! `fastforge config` — inspect and initialise configuration.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` flag; it replaces the platform default
/// for both `path` and `init`.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let serialised = config
                .to_toml()
                .with_cli_context(|| "Showing configuration")?;
            // The document itself is the result; only the header is chatter.
            output.header("Effective configuration:")?;
            println!("{serialised}");
        }

        ConfigCommands::Path => {
            println!("{}", AppConfig::active_path(config_file).display());
        }

        ConfigCommands::Init { force } => {
            let path = AppConfig::active_path(config_file);
            write_defaults(&path, force)?;
            info!(path = %path.display(), "Configuration initialised");
            output.success(&format!("Wrote default configuration to {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn write_defaults(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let body = AppConfig::default()
        .to_toml()
        .with_cli_context(|| "Writing default configuration")?;
    fs::write(path, body).with_cli_context(|| format!("Failed to write {}", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────
