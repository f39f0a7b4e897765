//! Events command implementation.
//!
//! Lists club events narrowed by type, upcoming flag and search term.

use cpf_catalog::{Catalog, Selection, SelectionState};
use cpf_content::models::EventKind;
use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_events_json, format_events_table};

/// Options for the events command.
#[derive(Debug, Default)]
pub struct EventsOptions {
    /// Event type (hackathon, workshop, meetup, challenge) or "all".
    pub category: Option<String>,
    /// Only upcoming events.
    pub upcoming: bool,
    /// Search term matched against title and description.
    pub search: Option<String>,
}

impl EventsOptions {
    /// The selection these options describe.
    pub fn selection(&self) -> Selection {
        Selection::new(
            self.category.as_deref(),
            self.upcoming,
            self.search.clone().unwrap_or_default(),
        )
    }
}

/// Executes the events command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub async fn execute(ctx: &CommandContext, opts: &EventsOptions, catalog: &Catalog) -> Result<()> {
    ctx.warn_unknown_category(
        "event type",
        opts.category.as_deref(),
        EventKind::ALL.iter().map(|k| k.as_str()),
    );

    let state = SelectionState::with_selection(catalog.events(), opts.selection());
    let events = state.filtered_items();
    debug!(
        selection = %state.selection(),
        shown = state.len(),
        total = catalog.events().len(),
        "events filtered"
    );

    if ctx.json_output {
        let output = format_events_json(events, state.selection(), catalog.events().len())?;
        println!("{output}");
    } else if !ctx.quiet {
        let output =
            format_events_table(events, catalog.events().len(), &ctx.dates, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}
