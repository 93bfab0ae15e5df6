//! Config command - show or create the configuration file

use crate::{MenufindError, cli::ConfigCommands, config::MenufindConfig, ui::OutputWriter};
use std::path::Path;

type Result<T> = std::result::Result<T, MenufindError>;

/// Execute a config subcommand
///
/// `path_override` is the `--config` argument, which replaces the default
/// location for every subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be determined, the file cannot
/// be written, or `init` would overwrite an existing file without `--force`.
pub fn execute(
    command: &ConfigCommands,
    config: &MenufindConfig,
    path_override: Option<&Path>,
    output: &impl OutputWriter,
) -> Result<()> {
    let path = match path_override {
        Some(path) => path.to_path_buf(),
        None => MenufindConfig::config_path()?,
    };

    match command {
        ConfigCommands::Show => output.write(&config.to_toml()?),
        ConfigCommands::Path => output.write(&path.display().to_string()),
        ConfigCommands::Init { force } => init(&path, *force, output)?,
    }
    Ok(())
}

fn init(path: &Path, force: bool, output: &impl OutputWriter) -> Result<()> {
    if path.exists() && !force {
        return Err(MenufindError::InvalidInput(format!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    MenufindConfig::default().save_to(path)?;
    log::info!("wrote default config to {}", path.display());
    output.success(&format!("Created config file at {}", path.display()));
    Ok(())
}
