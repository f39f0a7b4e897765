//! Interactive browsing of one listing.
//!
//! Drives a [`SelectionState`] from a dialoguer menu: every choice replaces
//! the selection and the table is redrawn from the recomputed items.

use std::io::{self, IsTerminal};

use cpf_catalog::filter::{known_categories, Listing};
use cpf_catalog::{Catalog, SelectionState};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use super::{CommandContext, CommandError, Result};
use crate::cli::BrowseListing;
use crate::output::{
    format_courses_table, format_events_table, format_posts_table, format_projects_table,
};

/// One change to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    Category(String),
    ToggleFlag,
    Search(String),
    Reset,
}

/// Applies `action` to `state`.
pub fn apply<T: Listing>(state: &mut SelectionState<'_, T>, action: BrowseAction) {
    match action {
        BrowseAction::Category(category) => state.set_category(category),
        BrowseAction::ToggleFlag => state.toggle_flag_only(),
        BrowseAction::Search(term) => state.set_search_term(term),
        BrowseAction::Reset => state.reset(),
    }
}

/// Executes the browse command.
///
/// # Errors
///
/// Fails when stdin is not a terminal or a prompt cannot be shown.
pub async fn execute(
    ctx: &CommandContext,
    listing: BrowseListing,
    catalog: &Catalog,
) -> Result<()> {
    if !io::stdin().is_terminal() {
        return Err(CommandError::NotInteractive("browse"));
    }

    match listing {
        BrowseListing::Events => {
            let total = catalog.events().len();
            browse(ctx, catalog.events(), Some("upcoming only"), |items| {
                format_events_table(items, total, &ctx.dates, ctx.use_colors)
            })
        }
        BrowseListing::Projects => {
            let total = catalog.projects().len();
            browse(ctx, catalog.projects(), Some("featured only"), |items| {
                format_projects_table(items, total, ctx.use_colors)
            })
        }
        BrowseListing::Blog => {
            let total = catalog.posts().len();
            browse(ctx, catalog.posts(), None, |items| {
                format_posts_table(items, total, &ctx.dates, ctx.use_colors)
            })
        }
        BrowseListing::Courses => {
            let total = catalog.courses().len();
            browse(ctx, catalog.courses(), None, |items| {
                format_courses_table(items, total, ctx.use_colors)
            })
        }
    }
}

fn browse<T: Listing>(
    ctx: &CommandContext,
    items: &[T],
    flag_label: Option<&str>,
    render: impl Fn(&[&T]) -> String,
) -> Result<()> {
    let categories = known_categories(items);
    let mut state = SelectionState::new(items);

    loop {
        println!();
        print!("{}", render(state.filtered_items()));
        println!();

        let selection = state.selection();
        let mut menu = vec![format!("Category ({})", selection.category())];
        if let Some(label) = flag_label {
            let on = if selection.only_flagged() { "on" } else { "off" };
            menu.push(format!("Toggle {} ({})", label, on));
        }
        menu.push(format!("Search ('{}')", selection.search_term()));
        menu.push("Reset filters".to_string());
        menu.push("Quit".to_string());

        let choice = Select::new()
            .with_prompt(format!("Browse {}", T::PLURAL))
            .items(&menu)
            .default(0)
            .interact()
            .map_err(|e| CommandError::Io(io::Error::other(e.to_string())))?;

        // Without a flag the menu has no toggle entry.
        let choice = match (flag_label.is_some(), choice) {
            (false, c) if c >= 1 => c + 1,
            (_, c) => c,
        };

        let action = match choice {
            0 => BrowseAction::Category(prompt_category(&categories)?),
            1 => BrowseAction::ToggleFlag,
            2 => BrowseAction::Search(prompt_search(state.selection().search_term())?),
            3 => BrowseAction::Reset,
            _ => break,
        };
        apply(&mut state, action);
    }

    if ctx.json_output {
        let output = serde_json::json!({
            "selection": state.selection(),
            "shown": state.len(),
            "total": items.len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        let summary = format!("{} of {} {} shown", state.len(), items.len(), T::PLURAL);
        if ctx.use_colors {
            println!("{}", summary.dimmed());
        } else {
            println!("{}", summary);
        }
    }
    Ok(())
}

fn prompt_category(categories: &[&str]) -> Result<String> {
    let mut options = vec!["all"];
    options.extend_from_slice(categories);

    let index = Select::new()
        .with_prompt("Category")
        .items(&options)
        .default(0)
        .interact()
        .map_err(|e| CommandError::Io(io::Error::other(e.to_string())))?;
    Ok(options[index].to_string())
}

fn prompt_search(current: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt("Search (empty clears)")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| CommandError::Io(io::Error::other(e.to_string())))
}
