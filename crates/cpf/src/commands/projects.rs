//! Projects command implementation.
//!
//! Lists club projects narrowed by category, featured flag and search term.

use cpf_catalog::{Catalog, Selection, SelectionState};
use cpf_content::models::ProjectCategory;
use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_projects_json, format_projects_table};

/// Options for the projects command.
#[derive(Debug, Default)]
pub struct ProjectsOptions {
    /// Project category (web, mobile, data, ml, tools, game) or "all".
    pub category: Option<String>,
    /// Only featured projects.
    pub featured: bool,
    /// Search term matched against title, description and tags.
    pub search: Option<String>,
}

impl ProjectsOptions {
    pub fn selection(&self) -> Selection {
        Selection::new(
            self.category.as_deref(),
            self.featured,
            self.search.clone().unwrap_or_default(),
        )
    }
}

/// Executes the projects command.
pub async fn execute(ctx: &CommandContext, opts: &ProjectsOptions, catalog: &Catalog) -> Result<()> {
    ctx.warn_unknown_category(
        "project category",
        opts.category.as_deref(),
        ProjectCategory::ALL.iter().map(|c| c.as_str()),
    );

    let state = SelectionState::with_selection(catalog.projects(), opts.selection());
    let projects = state.filtered_items();
    debug!(selection = %state.selection(), shown = state.len(), "projects filtered");

    if ctx.json_output {
        let output = format_projects_json(projects, state.selection(), catalog.projects().len())?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_projects_table(projects, catalog.projects().len(), ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_web_projects() {
        let catalog = Catalog::bundled().unwrap();
        let opts = ProjectsOptions {
            category: Some("web".to_string()),
            featured: true,
            search: None,
        };
        let state = SelectionState::with_selection(catalog.projects(), opts.selection());
        let ids: Vec<u32> = state.filtered_items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn test_all_category_is_identity() {
        let opts = ProjectsOptions {
            category: Some("all".to_string()),
            ..Default::default()
        };
        assert!(opts.selection().is_identity());
    }

    #[test]
    fn test_search_narrows_within_category() {
        let catalog = Catalog::bundled().unwrap();
        let opts = ProjectsOptions {
            category: Some("web".to_string()),
            featured: false,
            search: Some("inventario".to_string()),
        };
        let state = SelectionState::with_selection(catalog.projects(), opts.selection());
        assert_eq!(state.len(), 1);
        assert_eq!(state.filtered_items()[0].title, "Sistema de Control de Inventario");
    }
}
