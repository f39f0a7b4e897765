//! Show command implementation.
//!
//! Displays one event, project, post or course by slug or id.

use cpf_catalog::Catalog;

use super::{CommandContext, Result};
use crate::cli::ShowKind;
use crate::output::{
    format_course_details_json, format_course_details_table, format_event_details_json,
    format_event_details_table, format_post_details_json, format_post_details_table,
    format_project_details_json, format_project_details_table,
};

/// Options for the show command.
#[derive(Debug)]
pub struct ShowOptions {
    /// Which listing to look in.
    pub kind: ShowKind,
    /// Slug or numeric id.
    pub key: String,
}

/// Executes the show command.
///
/// # Errors
///
/// Returns [`LookupError`](cpf_catalog::LookupError) when nothing matches the
/// key, with the closest slug as a suggestion.
pub async fn execute(ctx: &CommandContext, opts: &ShowOptions, catalog: &Catalog) -> Result<()> {
    let output = render(ctx, opts, catalog)?;
    if ctx.json_output {
        println!("{output}");
    } else if !ctx.quiet {
        print!("{output}");
    }
    Ok(())
}

fn render(ctx: &CommandContext, opts: &ShowOptions, catalog: &Catalog) -> Result<String> {
    let key = opts.key.trim();
    let output = match opts.kind {
        ShowKind::Event => {
            let event = catalog.event_by_key(key)?;
            if ctx.json_output {
                format_event_details_json(event)?
            } else {
                format_event_details_table(event, &ctx.dates, ctx.use_colors)
            }
        }
        ShowKind::Project => {
            let project = catalog.project_by_key(key)?;
            if ctx.json_output {
                format_project_details_json(project)?
            } else {
                format_project_details_table(project, ctx.use_colors)
            }
        }
        ShowKind::Post => {
            let post = catalog.post_by_key(key)?;
            if ctx.json_output {
                format_post_details_json(post)?
            } else {
                format_post_details_table(post, ctx.use_colors)
            }
        }
        ShowKind::Course => {
            let course = catalog.course_by_key(key)?;
            // Guest instructors have no profile.
            let instructor = catalog.instructor_by_name(&course.instructor).ok();
            if ctx.json_output {
                format_course_details_json(course, instructor)?
            } else {
                format_course_details_table(course, instructor, ctx.use_colors)
            }
        }
    };
    Ok(output)
}
