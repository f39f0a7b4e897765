//! Courses command implementation.

use cpf_catalog::filter::FilterEvaluator;
use cpf_catalog::{Catalog, Selection};
use cpf_content::models::CourseLevel;
use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_courses_json, format_courses_table};

/// Options for the courses command.
#[derive(Debug, Default)]
pub struct CoursesOptions {
    /// Course level (beginner, intermediate, advanced) or "all".
    pub level: Option<String>,
    /// Search term matched against title, description and tags.
    pub search: Option<String>,
}

impl CoursesOptions {
    /// Courses carry no flag, so the flag filter is always off.
    pub fn selection(&self) -> Selection {
        Selection::new(
            self.level.as_deref(),
            false,
            self.search.clone().unwrap_or_default(),
        )
    }
}

/// Executes the courses command.
pub async fn execute(ctx: &CommandContext, opts: &CoursesOptions, catalog: &Catalog) -> Result<()> {
    ctx.warn_unknown_category(
        "course level",
        opts.level.as_deref(),
        CourseLevel::ALL.iter().map(|l| l.as_str()),
    );

    let selection = opts.selection();
    let courses = FilterEvaluator::new(&selection).filter_items(catalog.courses());
    debug!(%selection, shown = courses.len(), "courses filtered");

    if ctx.json_output {
        let output = format_courses_json(&courses, &selection, catalog.courses().len())?;
        println!("{output}");
    } else if !ctx.quiet {
        print!(
            "{}",
            format_courses_table(&courses, catalog.courses().len(), ctx.use_colors)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_selection() {
        let catalog = Catalog::bundled().unwrap();
        let opts = CoursesOptions {
            level: Some("intermediate".to_string()),
            search: None,
        };
        let selection = opts.selection();
        assert!(!selection.only_flagged());

        let courses = FilterEvaluator::new(&selection).filter_items(catalog.courses());
        let ids: Vec<u32> = courses.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 4, 5, 6]);
    }

    #[test]
    fn test_search_without_level() {
        let catalog = Catalog::bundled().unwrap();
        let opts = CoursesOptions {
            level: None,
            search: Some("python".to_string()),
        };
        let selection = opts.selection();
        let courses = FilterEvaluator::new(&selection).filter_items(catalog.courses());
        assert!(courses.iter().any(|c| c.title == "Introducción a Python"));
    }
}
