//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the cpf CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use cpf_catalog::UpcomingPolicy;
use cpf_content::models::TeamGroup;

/// cpf - Browse the FIUNA programming club catalog
#[derive(Parser, Debug)]
#[command(name = "cpf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Content directory (default: from config, then the XDG data dir)
    #[arg(long, global = true, env = "CPF_CONTENT_DIR")]
    pub content_dir: Option<PathBuf>,

    /// How events are marked upcoming (default: from config, then stored)
    #[arg(long, global = true, value_enum)]
    pub upcoming_policy: Option<PolicyArg>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List events
    #[command(alias = "e")]
    Events {
        /// Event type (hackathon, workshop, meetup, challenge)
        #[arg(short, long)]
        category: Option<String>,

        /// Show only upcoming events
        #[arg(short, long)]
        upcoming: bool,

        /// Search title and description
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List projects
    #[command(alias = "p")]
    Projects {
        /// Project category (web, mobile, data, ml, tools, game)
        #[arg(short, long)]
        category: Option<String>,

        /// Show only featured projects
        #[arg(short, long)]
        featured: bool,

        /// Search title, description and tags
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List blog posts
    #[command(alias = "b")]
    Blog {
        /// Only posts with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Search title and excerpt
        #[arg(short, long)]
        search: Option<String>,

        /// List every tag instead of posts
        #[arg(long, conflicts_with_all = ["tag", "search"])]
        tags: bool,
    },

    /// List courses
    #[command(alias = "c")]
    Courses {
        /// Course level (beginner, intermediate, advanced)
        #[arg(short, long)]
        level: Option<String>,

        /// Search title, description and tags
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one event, project, post or course
    #[command(alias = "s")]
    Show {
        /// What to show
        #[arg(value_enum)]
        kind: ShowKind,

        /// Slug or numeric id
        key: String,
    },

    /// List the team
    Team {
        /// Only one group
        #[arg(short, long, value_enum)]
        group: Option<GroupArg>,
    },

    /// Show the club history
    Timeline,

    /// Show recent news
    News,

    /// List course instructors
    Instructors,

    /// List the community channels
    Community,

    /// Show brand colors, typography and logo usage rules
    MediaKit,

    /// Show the privacy policy
    Privacy {
        /// Only the section whose heading contains this text
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Browse a listing interactively
    Browse {
        /// Listing to browse
        #[arg(value_enum)]
        listing: BrowseListing,
    },

    /// Send a message to the club
    Contact {
        /// Your name
        #[arg(long)]
        name: Option<String>,

        /// Your email address
        #[arg(long)]
        email: Option<String>,

        /// Message body
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Write the catalog as a content directory
    Export {
        /// Target directory
        dir: PathBuf,

        /// Overwrite existing dataset files
        #[arg(short, long)]
        force: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Upcoming policy choices
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyArg {
    /// Trust the curated flag
    Stored,
    /// Compare the event date with today
    Date,
}

impl From<PolicyArg> for UpcomingPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Stored => UpcomingPolicy::Stored,
            PolicyArg::Date => UpcomingPolicy::FromDate,
        }
    }
}

/// Item kinds for `show`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowKind {
    Event,
    Project,
    Post,
    Course,
}

/// Listings for `browse`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowseListing {
    Events,
    Projects,
    Blog,
    Courses,
}

/// Team groups for `team --group`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupArg {
    Board,
    Secretariat,
}

impl From<GroupArg> for TeamGroup {
    fn from(arg: GroupArg) -> Self {
        match arg {
            GroupArg::Board => TeamGroup::Board,
            GroupArg::Secretariat => TeamGroup::Secretariat,
        }
    }
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open config in $EDITOR
    Edit,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
