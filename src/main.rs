use env_logger::Env;
use menufind::{
    MenufindError,
    cli::{Cli, Commands},
    commands,
    config::MenufindConfig,
    ui::StdoutWriter,
};

type Result<T> = std::result::Result<T, MenufindError>;

/// Main entry point for the menufind CLI
///
/// Installs the logger, loads configuration, parses command-line arguments,
/// and dispatches to the appropriate command handler.
///
/// # Errors
///
/// Returns `MenufindError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => MenufindConfig::load_from(path)?,
        None => MenufindConfig::load()?,
    };
    log::debug!("effective config: {config:?}");

    let output = StdoutWriter::quiet(cli.quiet);

    match &cli.command {
        Commands::Browse { catalog } => commands::browse::execute(catalog, &config)?,
        Commands::Query {
            catalog,
            text,
            category,
            json,
        } => commands::query::execute(catalog, text, category.as_deref(), *json, &config, &output)?,
        Commands::Categories { catalog } => commands::categories::execute(catalog, &output)?,
        Commands::Contact {
            name,
            email,
            message,
        } => commands::contact::execute(name, email, message, &config, &output)?,
        Commands::Config { command } => {
            commands::config::execute(command, &config, cli.config.as_deref(), &output)?;
        }
    }

    Ok(())
}
