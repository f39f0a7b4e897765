use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod logging;
mod output;

use cli::Cli;
use commands::config::{load_config, Config};
use commands::{CommandContext, CommandError};
use cpf_catalog::store::DatasetSource;
use cpf_catalog::{CatalogStore, CatalogStoreError, UpcomingPolicy};
use dispatch::{CatalogCommand, CatalogDispatch, StandaloneCommand, StandaloneDispatch};
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(json) => eprintln!("{json}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    // Standalone commands (config, completions, help) work with a broken config file
    if let Some(dispatch) = StandaloneDispatch::try_from_cli(cli) {
        let ctx = match load_config() {
            Ok(config) => CommandContext::from_cli(cli).with_config(&config),
            Err(_) => CommandContext::from_cli(cli),
        };
        // Special case: config edit runs the editor asynchronously
        if matches!(
            &cli.command,
            Some(cli::Commands::Config {
                command: Some(cli::ConfigCommands::Edit)
            })
        ) {
            return commands::config::execute_edit(&ctx).await;
        }
        return dispatch.execute(&ctx);
    }

    let config = load_config()?;
    let ctx = CommandContext::from_cli(cli).with_config(&config);

    let Some(dispatch) = CatalogDispatch::from_cli(cli) else {
        return Ok(());
    };

    let store = CatalogStore::with_dir(resolve_content_dir(cli, &config)?);
    let policy = resolve_policy(cli, &config);
    let overrides = store
        .sources()
        .iter()
        .filter(|(_, source)| *source == DatasetSource::File)
        .count();
    debug!(dir = %store.dir().display(), %policy, overrides, "loading catalog");
    let catalog = store.load_catalog_async(policy, ctx.dates.today()).await?;

    dispatch.execute(&ctx, &catalog).await
}

/// Resolves the content directory with priority: flag/env > config > XDG default.
///
/// A directory that does not exist simply means every dataset is bundled.
fn resolve_content_dir(cli: &Cli, config: &Config) -> Result<PathBuf, CatalogStoreError> {
    if let Some(dir) = &cli.content_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = &config.content_dir {
        return Ok(dir.clone());
    }
    CatalogStore::default_dir()
}

/// Resolves the upcoming policy with priority: flag > config > stored.
fn resolve_policy(cli: &Cli, config: &Config) -> UpcomingPolicy {
    cli.upcoming_policy
        .map(UpcomingPolicy::from)
        .or(config.upcoming_policy)
        .unwrap_or_default()
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Store(_) => "CONTENT_ERROR",
        CommandError::Catalog(_) => "INVALID_CONTENT",
        CommandError::Lookup(_) => "NOT_FOUND",
        CommandError::Contact(e) if e.is_validation() => "VALIDATION_ERROR",
        CommandError::Contact(_) => "DELIVERY_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::NotInteractive(_) => "NOT_INTERACTIVE",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::NotInteractive(_) => ExitCode::from(1),
        CommandError::Store(_) => ExitCode::from(5),
        CommandError::Catalog(_) => ExitCode::from(5),
        CommandError::Lookup(_) => ExitCode::from(1),
        CommandError::Contact(e) if e.is_validation() => ExitCode::from(1),
        CommandError::Contact(_) => ExitCode::from(2),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpf_catalog::LookupError;
    use cpf_content::error::ContactError;
    use serial_test::serial;
    use std::env;

    fn same(a: ExitCode, b: ExitCode) -> bool {
        format!("{a:?}") == format!("{b:?}")
    }

    fn parse(args: &[&str]) -> Cli {
        env::remove_var("CPF_CONTENT_DIR");
        Cli::parse_from(args)
    }

    #[test]
    #[serial]
    fn test_content_dir_flag_wins() {
        let cli = parse(&["cpf", "--content-dir", "/flag", "events"]);
        let config = Config {
            content_dir: Some(PathBuf::from("/config")),
            ..Default::default()
        };
        assert_eq!(
            resolve_content_dir(&cli, &config).unwrap(),
            PathBuf::from("/flag")
        );
    }

    #[test]
    #[serial]
    fn test_content_dir_from_config() {
        let cli = parse(&["cpf", "events"]);
        let config = Config {
            content_dir: Some(PathBuf::from("/config")),
            ..Default::default()
        };
        assert_eq!(
            resolve_content_dir(&cli, &config).unwrap(),
            PathBuf::from("/config")
        );
    }

    #[test]
    #[serial]
    fn test_content_dir_from_env() {
        env::set_var("CPF_CONTENT_DIR", "/env");
        let cli = Cli::parse_from(["cpf", "events"]);
        env::remove_var("CPF_CONTENT_DIR");

        let config = Config {
            content_dir: Some(PathBuf::from("/config")),
            ..Default::default()
        };
        assert_eq!(
            resolve_content_dir(&cli, &config).unwrap(),
            PathBuf::from("/env")
        );
    }

    #[test]
    #[serial]
    fn test_policy_resolution_order() {
        let mut config = Config::default();
        let cli = parse(&["cpf", "events"]);
        assert_eq!(resolve_policy(&cli, &config), UpcomingPolicy::Stored);

        config.upcoming_policy = Some(UpcomingPolicy::FromDate);
        assert_eq!(resolve_policy(&cli, &config), UpcomingPolicy::FromDate);

        let cli = parse(&["cpf", "--upcoming-policy", "stored", "events"]);
        assert_eq!(resolve_policy(&cli, &config), UpcomingPolicy::Stored);
    }

    #[test]
    fn test_error_codes() {
        let not_found = CommandError::Lookup(LookupError::NotFound {
            resource_type: "project",
            identifier: "x".to_string(),
            suggestion: None,
        });
        assert_eq!(error_code(&not_found), "NOT_FOUND");
        assert!(same(error_exit_code(&not_found), ExitCode::from(1)));

        let invalid = CommandError::Contact(ContactError::InvalidEmail("a".to_string()));
        assert_eq!(error_code(&invalid), "VALIDATION_ERROR");
        assert!(same(error_exit_code(&invalid), ExitCode::from(1)));

        let delivery = CommandError::Contact(ContactError::Delivery("down".to_string()));
        assert_eq!(error_code(&delivery), "DELIVERY_ERROR");
        assert!(same(error_exit_code(&delivery), ExitCode::from(2)));

        let config = CommandError::Config("bad".to_string());
        assert_eq!(error_code(&config), "CONFIG_ERROR");
        assert!(same(error_exit_code(&config), ExitCode::from(5)));
    }

    #[test]
    fn test_missing_terminal_is_not_a_config_error() {
        let err = CommandError::NotInteractive("browse");
        assert_eq!(error_code(&err), "NOT_INTERACTIVE");
        assert!(same(error_exit_code(&err), ExitCode::from(1)));
        assert!(err.to_string().starts_with("browse needs an interactive terminal"));
    }

    #[test]
    fn test_store_errors_exit_five() {
        let err = CommandError::Store(CatalogStoreError::NoDataDir);
        assert_eq!(error_code(&err), "CONTENT_ERROR");
        assert!(same(error_exit_code(&err), ExitCode::from(5)));
    }
}
