use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info};
use std::fs;
use std::path::PathBuf;

use toolshed::catalog::load_catalog;
use toolshed::{ToolLibrary, ToolshedError};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolshed")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolshed.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // Filter stays open so the configured level can be applied later via set_max_level
    let env = env_logger::Env::default().default_filter_or("trace");
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(target))
        .init();

    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(LevelFilter::Info);
    }

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Level from the config's `log_level`, `info` when unset or unparseable
fn configured_level(log_level: Option<&str>) -> LevelFilter {
    match log_level {
        None => LevelFilter::Info,
        Some(level) => level.trim().parse().unwrap_or_else(|_| {
            log::warn!("Unknown log_level '{}', using info", level);
            LevelFilter::Info
        }),
    }
}

/// Apply the configured level unless RUST_LOG is set
fn apply_log_level(log_level: Option<&str>) {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    let level = configured_level(log_level);
    log::set_max_level(level);
    info!("Log level set to {}", level);
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if !config.display.color {
        colored::control::set_override(false);
    }

    let catalog_path = config.catalog_path(cli.catalog.as_ref()).ok_or_else(|| {
        eyre::eyre!("No catalog configured: pass --catalog <file> or set `catalog` in the config file")
    })?;

    if cli.is_verbose() {
        println!("{} {}", "Catalog:".yellow(), catalog_path.display());
    }

    let library = load_catalog(&catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", catalog_path.display()))?;

    match &cli.command {
        None | Some(Commands::Summary) => handle_summary_command(&library),
        Some(Commands::List) => handle_list_command(&library),
        Some(Commands::Reservations { tool }) => handle_reservations_command(&library, tool),
        Some(Commands::Available { tool }) => handle_available_command(&library, tool),
    }
}

fn handle_summary_command(library: &ToolLibrary) -> Result<()> {
    info!("Summarizing {} tools", library.len());
    println!("{}", library.summarize_library());
    Ok(())
}

fn handle_list_command(library: &ToolLibrary) -> Result<()> {
    info!("Listing {} tools", library.len());
    println!("{}", library.list_tools());
    Ok(())
}

fn handle_reservations_command(library: &ToolLibrary, name: &str) -> Result<()> {
    info!("Showing reservations for: {}", name);
    let tool = library
        .find(name)
        .ok_or_else(|| ToolshedError::ToolNotFound(name.to_string()))?;
    println!("{}", tool.format_reservations());
    Ok(())
}

fn handle_available_command(library: &ToolLibrary, name: &str) -> Result<()> {
    info!("Checking availability for: {}", name);
    let tool = library
        .find(name)
        .ok_or_else(|| ToolshedError::ToolNotFound(name.to_string()))?;

    let available = tool.available_quantity();
    let count = if available > 0 {
        available.to_string().green()
    } else {
        available.to_string().red()
    };
    println!("{} {} of {}", tool.name().cyan(), count, tool.total_quantity());
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_log_level(config.log_level.as_deref());

    info!("Starting with config from: {:?}", cli.config);

    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CATALOG: &str = "\
tools:
  - name: Band Saw
    totalQuantity: 35
    reservations:
      - username: Hoppleypawz
        returnDate: June 01
  - name: Bow
    totalQuantity: 18
";

    fn write_catalog(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("tools.yml");
        fs::write(&path, CATALOG).unwrap();
        path
    }

    fn parse_cli(catalog: &std::path::Path, args: &[&str]) -> Cli {
        let mut argv = vec!["toolshed", "-f", catalog.to_str().unwrap()];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn is_tool_not_found(err: &eyre::Report, name: &str) -> bool {
        matches!(err.downcast_ref::<ToolshedError>(), Some(ToolshedError::ToolNotFound(n)) if n == name)
    }

    #[test]
    fn test_run_without_catalog_fails() {
        let cli = Cli::try_parse_from(["toolshed", "list"]).unwrap();
        let err = run_application(&cli, &Config::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("--catalog"));
        assert!(message.contains("`catalog`"));
    }

    #[test]
    fn test_run_uses_catalog_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            catalog: Some(write_catalog(&temp_dir)),
            ..Config::default()
        };
        let cli = Cli::try_parse_from(["toolshed", "summary"]).unwrap();
        assert!(run_application(&cli, &config).is_ok());
    }

    #[test]
    fn test_run_default_and_list_commands() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = write_catalog(&temp_dir);
        assert!(run_application(&parse_cli(&catalog, &[]), &Config::default()).is_ok());
        assert!(run_application(&parse_cli(&catalog, &["list"]), &Config::default()).is_ok());
    }

    #[test]
    fn test_reservations_unknown_tool() {
        let temp_dir = TempDir::new().unwrap();
        let cli = parse_cli(&write_catalog(&temp_dir), &["reservations", "Table Saw"]);
        let err = run_application(&cli, &Config::default()).unwrap_err();
        assert!(is_tool_not_found(&err, "Table Saw"));
    }

    #[test]
    fn test_available_unknown_tool() {
        let temp_dir = TempDir::new().unwrap();
        let cli = parse_cli(&write_catalog(&temp_dir), &["available", "Table Saw"]);
        let err = run_application(&cli, &Config::default()).unwrap_err();
        assert!(is_tool_not_found(&err, "Table Saw"));
    }

    #[test]
    fn test_known_tool_commands_succeed() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = write_catalog(&temp_dir);
        assert!(run_application(&parse_cli(&catalog, &["available", "Bow"]), &Config::default()).is_ok());
        assert!(run_application(&parse_cli(&catalog, &["reservations", "Band Saw"]), &Config::default()).is_ok());
    }

    #[test]
    fn test_handle_available_unknown_tool() {
        let library = ToolLibrary::new(vec![toolshed::Tool::new("Axe", 2)]);
        let err = handle_available_command(&library, "axe").unwrap_err();
        assert!(is_tool_not_found(&err, "axe"));
        assert!(handle_available_command(&library, "Axe").is_ok());
    }

    #[test]
    fn test_configured_level() {
        assert_eq!(configured_level(None), LevelFilter::Info);
        assert_eq!(configured_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(configured_level(Some("WARN")), LevelFilter::Warn);
        assert_eq!(configured_level(Some("off")), LevelFilter::Off);
        assert_eq!(configured_level(Some("chatty")), LevelFilter::Info);
    }
}
