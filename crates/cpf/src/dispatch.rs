//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands split by whether they need the content catalog: configuration and
//! completions run before anything is loaded, everything else receives the
//! validated [`Catalog`].

use std::path::PathBuf;

use cpf_catalog::Catalog;

use crate::cli::{BrowseListing, Cli, Commands, ConfigCommands, GroupArg, Shell, ShowKind};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that run without loading the catalog.
pub trait StandaloneCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that read the catalog.
#[allow(async_fn_in_trait)]
pub trait CatalogCommand {
    /// Execute the command against the loaded catalog.
    async fn execute(&self, ctx: &CommandContext, catalog: &Catalog) -> Result<()>;
}

/// Commands that don't need the catalog.
pub enum StandaloneDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(Shell),
    Help,
}

impl<'a> StandaloneDispatch<'a> {
    /// Try to create a standalone dispatch from the CLI command.
    /// Returns None if the command needs the catalog.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(*shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl StandaloneCommand for StandaloneDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(*shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("cpf - FIUNA programming club catalog");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
        // Edit spawns the editor asynchronously and is run from main.
        Some(ConfigCommands::Edit) => Err(CommandError::Config(
            "edit requires async context".into(),
        )),
    }
}

/// Commands that read the catalog.
pub enum CatalogDispatch<'a> {
    Events {
        category: &'a Option<String>,
        upcoming: bool,
        search: &'a Option<String>,
    },
    Projects {
        category: &'a Option<String>,
        featured: bool,
        search: &'a Option<String>,
    },
    Blog {
        tag: &'a Option<String>,
        search: &'a Option<String>,
        tags: bool,
    },
    Courses {
        level: &'a Option<String>,
        search: &'a Option<String>,
    },
    Show {
        kind: ShowKind,
        key: &'a str,
    },
    Team {
        group: Option<GroupArg>,
    },
    Timeline,
    News,
    Instructors,
    Community,
    MediaKit,
    Privacy {
        section: &'a Option<String>,
    },
    Browse {
        listing: BrowseListing,
    },
    Contact {
        name: &'a Option<String>,
        email: &'a Option<String>,
        message: &'a Option<String>,
    },
    Export {
        dir: &'a PathBuf,
        force: bool,
    },
}

impl<'a> CatalogDispatch<'a> {
    /// Create a catalog dispatch from the CLI command.
    /// Returns None if the command runs without the catalog.
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Events {
                category,
                upcoming,
                search,
            }) => Some(Self::Events {
                category,
                upcoming: *upcoming,
                search,
            }),
            Some(Commands::Projects {
                category,
                featured,
                search,
            }) => Some(Self::Projects {
                category,
                featured: *featured,
                search,
            }),
            Some(Commands::Blog { tag, search, tags }) => Some(Self::Blog {
                tag,
                search,
                tags: *tags,
            }),
            Some(Commands::Courses { level, search }) => Some(Self::Courses { level, search }),
            Some(Commands::Show { kind, key }) => Some(Self::Show { kind: *kind, key }),
            Some(Commands::Team { group }) => Some(Self::Team { group: *group }),
            Some(Commands::Timeline) => Some(Self::Timeline),
            Some(Commands::News) => Some(Self::News),
            Some(Commands::Instructors) => Some(Self::Instructors),
            Some(Commands::Community) => Some(Self::Community),
            Some(Commands::MediaKit) => Some(Self::MediaKit),
            Some(Commands::Privacy { section }) => Some(Self::Privacy { section }),
            Some(Commands::Browse { listing }) => Some(Self::Browse { listing: *listing }),
            Some(Commands::Contact {
                name,
                email,
                message,
            }) => Some(Self::Contact {
                name,
                email,
                message,
            }),
            Some(Commands::Export { dir, force }) => Some(Self::Export {
                dir,
                force: *force,
            }),
            Some(Commands::Config { .. }) | Some(Commands::Completions { .. }) | None => None,
        }
    }
}

impl CatalogCommand for CatalogDispatch<'_> {
    async fn execute(&self, ctx: &CommandContext, catalog: &Catalog) -> Result<()> {
        match self {
            Self::Events {
                category,
                upcoming,
                search,
            } => {
                let opts = commands::events::EventsOptions {
                    category: (*category).clone(),
                    upcoming: *upcoming,
                    search: (*search).clone(),
                };
                commands::events::execute(ctx, &opts, catalog).await
            }

            Self::Projects {
                category,
                featured,
                search,
            } => {
                let opts = commands::projects::ProjectsOptions {
                    category: (*category).clone(),
                    featured: *featured,
                    search: (*search).clone(),
                };
                commands::projects::execute(ctx, &opts, catalog).await
            }

            Self::Blog { tag, search, tags } => {
                let opts = commands::blog::BlogOptions {
                    tag: (*tag).clone(),
                    search: (*search).clone(),
                    tags: *tags,
                };
                commands::blog::execute(ctx, &opts, catalog).await
            }

            Self::Courses { level, search } => {
                let opts = commands::courses::CoursesOptions {
                    level: (*level).clone(),
                    search: (*search).clone(),
                };
                commands::courses::execute(ctx, &opts, catalog).await
            }

            Self::Show { kind, key } => {
                let opts = commands::show::ShowOptions {
                    kind: *kind,
                    key: key.to_string(),
                };
                commands::show::execute(ctx, &opts, catalog).await
            }

            Self::Team { group } => {
                commands::club::execute_team(ctx, group.map(Into::into), catalog).await
            }
            Self::Timeline => commands::club::execute_timeline(ctx, catalog).await,
            Self::News => commands::club::execute_news(ctx, catalog).await,
            Self::Instructors => commands::club::execute_instructors(ctx, catalog).await,
            Self::Community => commands::club::execute_community(ctx, catalog).await,
            Self::MediaKit => commands::club::execute_media_kit(ctx, catalog).await,
            Self::Privacy { section } => {
                commands::club::execute_privacy(ctx, section.as_deref(), catalog).await
            }

            Self::Browse { listing } => commands::browse::execute(ctx, *listing, catalog).await,

            Self::Contact {
                name,
                email,
                message,
            } => {
                let recipient = ctx
                    .contact_recipient
                    .clone()
                    .unwrap_or_else(|| catalog.site().email.clone());
                let opts = commands::contact::ContactOptions {
                    name: (*name).clone(),
                    email: (*email).clone(),
                    message: (*message).clone(),
                    recipient,
                    delay: ctx.contact_delay,
                };
                commands::contact::execute(ctx, &opts).await
            }

            Self::Export { dir, force } => {
                let opts = commands::export::ExportOptions {
                    dir: (*dir).clone(),
                    force: *force,
                };
                commands::export::execute(ctx, &opts, catalog).await
            }
        }
    }
}
