//! Blog command implementation.
//!
//! Lists posts narrowed by tag and search term, or the tag list itself.

use cpf_catalog::{Catalog, Selection, SelectionState};
use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{
    format_posts_json, format_posts_table, format_tags_json, format_tags_table, tag_counts,
};

/// Options for the blog command.
#[derive(Debug, Default)]
pub struct BlogOptions {
    /// Tag to narrow by (exact match) or "all".
    pub tag: Option<String>,
    /// Search term matched against title and excerpt.
    pub search: Option<String>,
    /// List tags with post counts instead of posts.
    pub tags: bool,
}

impl BlogOptions {
    pub fn selection(&self) -> Selection {
        Selection::new(
            self.tag.as_deref(),
            false,
            self.search.clone().unwrap_or_default(),
        )
    }
}

/// Executes the blog command.
pub async fn execute(ctx: &CommandContext, opts: &BlogOptions, catalog: &Catalog) -> Result<()> {
    let known_tags = catalog.content().post_tags();

    if opts.tags {
        let counts = tag_counts(&known_tags, catalog.posts());
        if ctx.json_output {
            println!("{}", format_tags_json(counts)?);
        } else if !ctx.quiet {
            print!("{}", format_tags_table(&counts, ctx.use_colors));
        }
        return Ok(());
    }

    ctx.warn_unknown_category("tag", opts.tag.as_deref(), known_tags.iter().copied());

    let state = SelectionState::with_selection(catalog.posts(), opts.selection());
    debug!(selection = %state.selection(), shown = state.len(), "posts filtered");

    if ctx.json_output {
        let output =
            format_posts_json(state.filtered_items(), state.selection(), catalog.posts().len())?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_posts_table(
            state.filtered_items(),
            catalog.posts().len(),
            &ctx.dates,
            ctx.use_colors,
        );
        print!("{output}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_selection_is_exact() {
        let catalog = Catalog::bundled().unwrap();
        let opts = BlogOptions {
            tag: Some("Tutoriales".to_string()),
            ..Default::default()
        };
        let state = SelectionState::with_selection(catalog.posts(), opts.selection());
        let ids: Vec<u32> = state.filtered_items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4, 5]);

        let lowercase = BlogOptions {
            tag: Some("tutoriales".to_string()),
            ..Default::default()
        };
        let state = SelectionState::with_selection(catalog.posts(), lowercase.selection());
        assert!(state.is_empty());
    }

    #[test]
    fn test_flag_is_never_requested() {
        let opts = BlogOptions {
            tag: None,
            search: Some("react".to_string()),
            tags: false,
        };
        assert!(!opts.selection().only_flagged());
        assert_eq!(opts.selection().search_term(), "react");
    }
}
