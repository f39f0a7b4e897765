//! Command implementations for the cpf CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod blog;
pub mod browse;
pub mod club;
pub mod completions;
pub mod config;
pub mod contact;
pub mod courses;
pub mod events;
pub mod export;
pub mod projects;
pub mod show;

use std::env;
use std::time::Duration;

use chrono::Local;
use cpf_catalog::{find_similar_name, CatalogError, CatalogStoreError, LookupError};
use cpf_content::contact::DEFAULT_DELAY_MS;
use cpf_content::error::ContactError;
use owo_colors::OwoColorize;
use tracing::warn;

use crate::cli::Cli;
use crate::output::helpers::{DateDisplay, DateFormat};
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Content directory could not be read or written.
    #[error("content error: {0}")]
    Store(#[from] CatalogStoreError),

    /// Content failed validation.
    #[error("invalid content: {0}")]
    Catalog(#[from] CatalogError),

    /// Slug, id or name not found.
    #[error("{0}")]
    Lookup(#[from] LookupError),

    /// Contact form rejected or not delivered.
    #[error("contact error: {0}")]
    Contact(#[from] ContactError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// An interactive command was run without a terminal.
    #[error("{0} needs an interactive terminal; use the listing commands with flags instead")]
    NotInteractive(&'static str),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// How dates are rendered in tables.
    pub dates: DateDisplay,
    /// Contact recipient from config; the site address when unset.
    pub contact_recipient: Option<String>,
    /// Simulated contact delivery delay.
    pub contact_delay: Duration,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && env::var_os("NO_COLOR").is_none(),
            quiet: cli.quiet,
            verbose: cli.verbose,
            dates: DateDisplay::new(DateFormat::default(), Local::now().date_naive()),
            contact_recipient: None,
            contact_delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    /// Applies `[output]` and `[contact]` settings from the config file.
    ///
    /// `--no-color` and `NO_COLOR` always win over `color = true`.
    pub fn with_config(mut self, config: &Config) -> Self {
        if config.output.color == Some(false) {
            self.use_colors = false;
        }
        if let Some(ref format) = config.output.date_format {
            match format.parse::<DateFormat>() {
                Ok(format) => self.dates = DateDisplay::new(format, self.dates.today()),
                Err(e) => warn!("ignoring output.date_format: {}", e),
            }
        }
        self.contact_recipient = config.contact.recipient.clone();
        self.contact_delay = Duration::from_millis(config.contact.delay_ms());
        self
    }

    /// Prints a warning to stderr unless quiet.
    pub fn warn(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_colors {
            eprintln!("{} {}", "Warning:".yellow().bold(), message);
        } else {
            eprintln!("Warning: {}", message);
        }
    }

    /// Warns when a selected category is not one of `known`.
    ///
    /// The filter still runs and simply shows nothing.
    pub fn warn_unknown_category<'a>(
        &self,
        noun: &str,
        category: Option<&str>,
        known: impl Iterator<Item = &'a str> + Clone,
    ) {
        let Some(category) = category else {
            return;
        };
        if category.eq_ignore_ascii_case("all") || known.clone().any(|k| k == category) {
            return;
        }
        let mut message = format!("unknown {} '{}'.", noun, category);
        if let Some(suggestion) = find_similar_name(category, known) {
            message.push_str(&format!(" Did you mean '{}'?", suggestion));
        }
        self.warn(&message);
    }
}
